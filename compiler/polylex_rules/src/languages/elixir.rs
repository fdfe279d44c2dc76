use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("elixir")
        .name("Elixir")
        .aliases(["ex"])
        .extensions(["ex", "exs"])
        .ident_continue_also(b"?!")
        .keywords([
            "after", "alias", "and", "case", "catch", "cond", "def", "defp", "defmacro",
            "defmacrop", "defmodule", "defprotocol", "defimpl", "defstruct", "do", "else",
            "end", "false", "fn", "for", "if", "import", "in", "nil", "not", "or", "quote",
            "raise", "receive", "require", "rescue", "true", "try", "unless", "unquote", "use",
            "when", "with",
        ])
        .operators([
            "=", "==", "===", "!=", "!==", "<", "<=", ">", ">=", "+", "-", "*", "/", "++", "--",
            "<>", "|>", "&&", "||", "!", "=~", "->", "<-", "=>", "::", "..", "//", "\\\\",
            "|", "&", "^", "%", ":", "<<<", ">>>", "~>", "<~", "<<~", "~>>",
        ])
        .punctuation([",", ".", ";", "<<", ">>"])
        .line_comment("#")
        .quote(QuoteRule::string("\"\"\"").multiline())
        .quote(QuoteRule::string("'''").multiline())
        .quote(QuoteRule::string("\"").multiline())
        .quote(QuoteRule::string("'").multiline())
        .quote(QuoteRule::prefixed_char("?"))
        .annotation_marker(b'@')
}
