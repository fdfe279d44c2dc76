use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

/// Dotted operators and logical constants, matched in either case.
const DOTTED: &[&str] = &[
    ".and.", ".or.", ".not.", ".eqv.", ".neqv.", ".eq.", ".ne.", ".lt.", ".le.", ".gt.",
    ".ge.", ".true.", ".false.",
];

pub(crate) fn rules() -> LanguageRulesBuilder {
    let upper: Vec<String> = DOTTED.iter().map(|op| op.to_ascii_uppercase()).collect();
    LanguageRules::builder("fortran")
        .name("Fortran")
        .aliases(["f90", "f95"])
        .extensions([
            "f", "for", "ftn", "f90", "f95", "f03", "f08", "f15", "f18", "fpp",
        ])
        .case_insensitive_keywords()
        .keywords([
            "allocatable", "allocate", "assign", "associate", "block", "call", "case",
            "character", "class", "close", "common", "complex", "contains", "continue",
            "cycle", "data", "deallocate", "default", "dimension", "do", "double", "else",
            "elseif", "end", "enddo", "endif", "entry", "equivalence", "exit", "external",
            "format", "function", "go", "goto", "if", "implicit", "in", "inout", "integer",
            "intent", "interface", "intrinsic", "kind", "len", "logical", "module", "namelist",
            "none", "nullify", "only", "open", "optional", "out", "parameter", "pointer",
            "precision", "print", "private", "procedure", "program", "public", "pure", "read",
            "real", "recursive", "result", "return", "rewind", "save", "select", "sequence",
            "stop", "subroutine", "target", "then", "type", "use", "where", "while", "write",
        ])
        .operators([
            "=", "==", "/=", "<", "<=", ">", ">=", "+", "-", "*", "**", "/", "//", "=>", "%",
        ])
        .operators(DOTTED.iter().copied())
        .operators(upper.iter().map(String::as_str))
        .punctuation([",", ":", "::", ";", "&"])
        .line_comment("!")
        .quote(QuoteRule::string("\""))
        .quote(QuoteRule::string("'"))
}
