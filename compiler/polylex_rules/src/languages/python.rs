use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

/// String prefixes, each accepted in any letter case.
const STRING_PREFIXES: &[&str] = &["", "r", "b", "f", "u", "rb", "br", "fr", "rf"];

pub(crate) fn rules() -> LanguageRulesBuilder {
    let mut builder = LanguageRules::builder("python")
        .name("Python")
        .aliases(["py", "python3"])
        .extensions(["py", "pyi"])
        .keywords([
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ])
        .operators([
            "=", "==", "!=", "<", "<=", ">", ">=", "+", "-", "*", "**", "/", "//", "%", "@",
            "&", "|", "^", "~", "<<", ">>", "+=", "-=", "*=", "**=", "/=", "//=", "%=", "@=",
            "&=", "|=", "^=", "<<=", ">>=", ":=", "->",
        ])
        .punctuation([":", ";", ",", ".", "..."])
        .line_comment("#")
        .annotation_marker(b'@')
        .annotations_at_line_start();

    for prefix in STRING_PREFIXES {
        for variant in case_variants(prefix) {
            // A backslash still protects the closing quote in raw strings.
            for quote in ["\"\"\"", "'''"] {
                builder = builder.quote(QuoteRule::prefixed_string(&variant, quote).multiline());
            }
            for quote in ["\"", "'"] {
                builder = builder.quote(QuoteRule::prefixed_string(&variant, quote));
            }
        }
    }
    builder
}

/// Every upper/lower case spelling of an ASCII prefix.
fn case_variants(prefix: &str) -> Vec<String> {
    let mut variants = vec![String::new()];
    for c in prefix.chars() {
        variants = variants
            .into_iter()
            .flat_map(|v| {
                let lower = format!("{v}{}", c.to_ascii_lowercase());
                let upper = format!("{v}{}", c.to_ascii_uppercase());
                [lower, upper]
            })
            .collect();
    }
    variants
}
