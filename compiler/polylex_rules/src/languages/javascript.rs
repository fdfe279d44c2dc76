use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("javascript")
        .name("JavaScript")
        .aliases(["js", "ecmascript"])
        .extensions(["js", "mjs", "cjs"])
        .ident_start_also(b"$")
        .keywords([
            "await", "break", "case", "catch", "class", "const", "continue", "debugger",
            "default", "delete", "do", "else", "export", "extends", "false", "finally", "for",
            "function", "if", "import", "in", "instanceof", "let", "new", "null", "return",
            "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined",
            "var", "void", "while", "with", "yield", "async", "of",
        ])
        .operators([
            "=", "==", "===", "!", "!=", "!==", "<", "<=", ">", ">=", "&&", "||", "??", "?",
            "?.", ":", "+", "-", "*", "**", "/", "%", "++", "--", "&", "|", "^", "~", "<<", ">>",
            ">>>", "+=", "-=", "*=", "**=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", ">>>=",
            "&&=", "||=", "??=", "=>", "...",
        ])
        .punctuation([";", ",", "."])
        .line_comment("//")
        .block_comment("/*", "*/")
        .quote(QuoteRule::string("\""))
        .quote(QuoteRule::string("'"))
        .quote(QuoteRule::string("`").multiline())
        .annotation_marker(b'@')
}
