use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("c")
        .name("C")
        .extensions(["c", "h"])
        .keywords([
            "auto", "break", "case", "char", "const", "continue", "default", "do", "double",
            "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long",
            "register", "restrict", "return", "short", "signed", "sizeof", "static", "struct",
            "switch", "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas",
            "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn",
            "_Static_assert", "_Thread_local",
        ])
        .operators([
            "=", "==", "!", "!=", "<", "<=", ">", ">=", "&&", "||", "?", ":", "+", "-", "*", "/",
            "%", "++", "--", "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=",
            "|=", "^=", "<<=", ">>=", "->", "...", "#", "##",
        ])
        .punctuation([";", ",", "."])
        .line_comment("//")
        .block_comment("/*", "*/")
        .quote(QuoteRule::string("\""))
        .quote(QuoteRule::char("'"))
}
