use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("erlang")
        .name("Erlang")
        .aliases(["erl"])
        .extensions(["erl", "es", "escript", "hrl"])
        .ident_continue_also(b"@")
        .keywords([
            "after", "and", "andalso", "band", "begin", "bnot", "bor", "bsl", "bsr", "bxor",
            "case", "catch", "cond", "div", "end", "fun", "if", "let", "maybe", "else", "not",
            "of", "or", "orelse", "receive", "rem", "try", "when", "xor",
        ])
        .operators([
            "=", "==", "/=", "=:=", "=/=", "<", "=<", ">", ">=", "+", "-", "*", "/", "++",
            "--", "!", "->", "<-", "<=", "||", "::", ":=", "=>", "|", "#", "?", "?=", ":",
            "..", "...",
        ])
        .punctuation([",", ".", ";", "<<", ">>"])
        .line_comment("%")
        .quote(QuoteRule::string("\"").multiline())
        // Quoted atoms.
        .quote(QuoteRule::string("'"))
        .quote(QuoteRule::prefixed_char("$"))
}
