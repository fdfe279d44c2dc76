use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("java")
        .name("Java")
        .extensions(["java"])
        .ident_start_also(b"$")
        .keywords([
            "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
            "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
            "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
            "interface", "long", "native", "new", "package", "private", "protected", "public",
            "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
            "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
            "null", "var", "record", "yield", "sealed", "permits",
        ])
        .operators([
            "=", "==", "!", "!=", "<", "<=", ">", ">=", "&&", "||", "?", ":", "+", "-", "*", "/",
            "%", "++", "--", "&", "|", "^", "~", "<<", ">>", ">>>", "+=", "-=", "*=", "/=", "%=",
            "&=", "|=", "^=", "<<=", ">>=", ">>>=", "->", "::", "...",
        ])
        .punctuation([";", ",", "."])
        .line_comment("//")
        .block_comment("/*", "*/")
        .quote(QuoteRule::string("\"\"\"").multiline())
        .quote(QuoteRule::string("\""))
        .quote(QuoteRule::char("'"))
        .annotation_marker(b'@')
        .generics(true)
}
