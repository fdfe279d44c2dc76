use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("ocaml")
        .name("OCaml")
        .aliases(["ml"])
        .extensions(["ml", "mli"])
        .ident_continue_also(b"'")
        .keywords([
            "and", "as", "assert", "begin", "class", "constraint", "do", "done", "downto",
            "else", "end", "exception", "external", "false", "for", "fun", "function",
            "functor", "if", "in", "include", "inherit", "initializer", "lazy", "let", "match",
            "method", "module", "mutable", "new", "nonrec", "object", "of", "open", "or",
            "private", "rec", "sig", "struct", "then", "to", "true", "try", "type", "val",
            "virtual", "when", "while", "with",
        ])
        .operators([
            "=", "==", "<>", "!=", "<", "<=", ">", ">=", "+", "-", "*", "/", "+.", "-.", "*.",
            "/.", "**", "^", "@", "@@", "::", ":=", "!", "->", "<-", "|", "||", "&&", "&", "|>",
            "~", "?", "#",
        ])
        // `'` also introduces type variables (`'a list`).
        .punctuation([";", ";;", ",", ".", ":", "`", "'"])
        .nested_block_comment("(*", "*)")
        .quote(QuoteRule::string("\"").multiline())
        .quote(QuoteRule::char("'"))
}
