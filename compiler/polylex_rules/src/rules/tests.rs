use super::*;
use pretty_assertions::assert_eq;

fn toy() -> LanguageRules {
    let built = LanguageRules::builder("  Toy ")
        .name("Toy Language")
        .extensions([".TOY", "ty"])
        .keywords(["let", "in"])
        .operators(["=", ">", ">>", ">>=", "-", "->"])
        .punctuation([";", ","])
        .line_comment("#")
        .line_comment("##")
        .block_comment("/*", "*/")
        .quote(QuoteRule::string("\""))
        .quote(QuoteRule::string("\"\"\"").multiline())
        .quote(QuoteRule::char("'"))
        .annotation_marker(b'@')
        .build();
    match built {
        Ok(rules) => rules,
        Err(err) => panic!("toy rules should build: {err}"),
    }
}

#[test]
fn id_is_trimmed_and_lowercased() {
    let rules = toy();
    assert_eq!(rules.id(), "toy");
    assert_eq!(rules.name(), "Toy Language");
    let exts: Vec<&str> = rules.extensions().iter().map(|e| &**e).collect();
    assert_eq!(exts, vec!["toy", "ty"]);
}

#[test]
fn name_defaults_to_id() {
    let Ok(rules) = LanguageRules::builder("bare").build() else {
        panic!("bare rules should build");
    };
    assert_eq!(rules.name(), "bare");
}

#[test]
fn longest_symbol_is_maximal_munch() {
    let rules = toy();
    assert_eq!(rules.longest_symbol(b">>= 1"), Some((3, SymbolKind::Operator)));
    assert_eq!(rules.longest_symbol(b">>1"), Some((2, SymbolKind::Operator)));
    assert_eq!(rules.longest_symbol(b"> >"), Some((1, SymbolKind::Operator)));
    assert_eq!(rules.longest_symbol(b"->"), Some((2, SymbolKind::Operator)));
    assert_eq!(rules.longest_symbol(b";"), Some((1, SymbolKind::Punctuation)));
    assert_eq!(rules.longest_symbol(b"$"), None);
    assert_eq!(rules.longest_symbol(b""), None);
}

#[test]
fn delimiters_are_punctuation() {
    let rules = toy();
    for text in ["{", "}", "(", ")", "[", "]"] {
        assert_eq!(rules.symbol_kind(text), Some(SymbolKind::Punctuation), "{text}");
    }
    assert_eq!(rules.opening_delimiter(b'{'), Some(FrameKind::Brace));
    assert_eq!(rules.closing_delimiter(b')'), Some(FrameKind::Paren));
    assert_eq!(rules.opening_delimiter(b']'), None);
    assert_eq!(rules.closing_delimiter(b'<'), None);
}

#[test]
fn keywords_are_case_sensitive_by_default() {
    let rules = toy();
    assert!(rules.is_keyword("let"));
    assert!(!rules.is_keyword("LET"));
    assert!(!rules.is_keyword(""));
    assert!(!rules.is_keyword("letter"));
    assert_eq!(rules.keyword_count(), 2);
}

#[test]
fn case_insensitive_keywords_fold_both_sides() {
    let Ok(rules) = LanguageRules::builder("shouty")
        .case_insensitive_keywords()
        .keywords(["Program", "END"])
        .build()
    else {
        panic!("shouty rules should build");
    };
    assert!(rules.is_keyword("program"));
    assert!(rules.is_keyword("PROGRAM"));
    assert!(rules.is_keyword("End"));
    assert!(!rules.is_keyword("ending"));
    let long = "x".repeat(FOLD_BUFFER_LEN + 1);
    assert!(!rules.is_keyword(&long));
}

#[test]
fn openers_are_tried_longest_first() {
    let rules = toy();
    assert_eq!(rules.line_comment_at(b"## doc"), Some("##"));
    assert_eq!(rules.line_comment_at(b"# note"), Some("#"));
    assert_eq!(rules.line_comment_at(b"x"), None);
    assert_eq!(rules.quote_at(b"\"\"\"doc").map(QuoteRule::open), Some("\"\"\""));
    assert_eq!(rules.quote_at(b"\"s\"").map(QuoteRule::open), Some("\""));
    assert!(rules.block_comment_at(b"/* x */").is_some());
    assert!(rules.block_comment_at(b"/ *").is_none());
}

#[test]
fn quote_for_matches_complete_literals() {
    let rules = toy();
    assert_eq!(rules.quote_for("\"hi\"").map(QuoteRule::kind), Some(LiteralKind::String));
    assert_eq!(rules.quote_for("'c'").map(QuoteRule::kind), Some(LiteralKind::Char));
    assert_eq!(rules.quote_for("\"open").map(QuoteRule::kind), None);
    assert_eq!(rules.quote_for("name").map(QuoteRule::kind), None);
}

#[test]
fn prefixed_char_matches_one_following_char() {
    let rule = QuoteRule::prefixed_char("$");
    assert!(rule.is_char());
    assert!(rule.matches_literal("$a"));
    assert!(!rule.matches_literal("$"));
    assert!(!rule.matches_literal("a"));
}

#[test]
fn prefixed_string_closes_on_bare_delimiter() {
    let rule = QuoteRule::prefixed_string("f", "\"");
    assert_eq!(rule.open(), "f\"");
    assert_eq!(rule.close(), "\"");
    assert!(rule.matches_literal("f\"{x}\""));
    assert!(!rule.matches_literal("\"x\""));
    assert!(!rule.matches_literal("f\""));
}

#[test]
fn quote_escape_defaults_to_backslash() {
    assert_eq!(QuoteRule::string("\"").escape_byte(), Some(b'\\'));
    assert_eq!(QuoteRule::string("`").escape(None).escape_byte(), None);
    assert!(!QuoteRule::string("\"").is_multiline());
}

#[test]
fn build_rejects_empty_id() {
    assert_eq!(
        LanguageRules::builder("   ").build().map(|r| r.id().to_owned()),
        Err(RulesError::EmptyId)
    );
}

#[test]
fn build_rejects_empty_delimiters() {
    let err = LanguageRules::builder("bad").line_comment("").build().err();
    assert_eq!(
        err,
        Some(RulesError::EmptyDelimiter {
            language: "bad".into(),
            what: "line comment",
        })
    );
    let err = LanguageRules::builder("bad")
        .quote(QuoteRule::new("<<", "", LiteralKind::String))
        .build()
        .err();
    assert_eq!(
        err,
        Some(RulesError::EmptyDelimiter {
            language: "bad".into(),
            what: "quote",
        })
    );
    let err = LanguageRules::builder("bad")
        .block_comment("/*", "")
        .build()
        .err();
    assert!(matches!(err, Some(RulesError::EmptyDelimiter { what: "block comment", .. })));
}

#[test]
fn build_rejects_non_ascii_symbols() {
    let err = LanguageRules::builder("bad").operators(["→"]).build().err();
    assert_eq!(
        err,
        Some(RulesError::NonAsciiSymbol {
            language: "bad".into(),
            symbol: "→".into(),
        })
    );
}

#[test]
fn build_rejects_whitespace_annotation_marker() {
    let err = LanguageRules::builder("bad")
        .annotation_marker(b' ')
        .build()
        .err();
    assert_eq!(
        err,
        Some(RulesError::InvalidAnnotationMarker {
            language: "bad".into(),
            byte: b' ',
        })
    );
}

#[test]
fn ident_start_also_extends_continue() {
    let Ok(rules) = LanguageRules::builder("dollar")
        .ident_start_also(b"$")
        .ident_continue_also(b"'")
        .build()
    else {
        panic!("dollar rules should build");
    };
    assert!(rules.is_ident_start(b'$'));
    assert!(rules.is_ident_continue(b'$'));
    assert!(rules.is_ident_continue(b'\''));
    assert!(!rules.is_ident_start(b'\''));
    assert!(!rules.is_ident_start(b'1'));
    assert!(rules.is_ident_continue(b'1'));
}
