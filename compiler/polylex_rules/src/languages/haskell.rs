use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("haskell")
        .name("Haskell")
        .aliases(["hs"])
        .extensions(["hs", "lhs"])
        .ident_continue_also(b"'")
        .keywords([
            "case", "class", "data", "default", "deriving", "do", "else", "foreign", "if",
            "import", "in", "infix", "infixl", "infixr", "instance", "let", "module",
            "newtype", "of", "then", "type", "where", "qualified", "as", "hiding", "forall",
        ])
        .operators([
            "=", "==", "/=", "<", "<=", ">", ">=", "+", "-", "*", "/", "^", "^^", "**", "&&",
            "||", "++", "!!", ".", "$", "$!", ">>=", ">>", "=<<", "<$>", "<$", "<*>", "*>",
            "<*", "<>", "<|>", "->", "<-", "=>", "::", "|", "\\", "@", "~", "..", ":", "!",
        ])
        .punctuation([",", ";", "`", "'"])
        .line_comment("--")
        .nested_block_comment("{-", "-}")
        .quote(QuoteRule::string("\""))
        .quote(QuoteRule::char("'"))
}
