//! Whole-pipeline properties: coverage, idempotence and recovery.

use polylex::{
    global, tokenize, tokenize_with, ErrorCode, FrameKind, LiteralKind, TokenKind,
    TokenizeError, TokenizedFile, TokenizerConfig, UnknownLanguageError, BUILTIN_LANGUAGES,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run<'a>(source: &'a str, language: &str) -> TokenizedFile<'a> {
    match tokenize(source, language) {
        Ok(file) => file,
        Err(err) => panic!("{err}"),
    }
}

fn significant<'a>(file: &TokenizedFile<'a>) -> Vec<(TokenKind, &'a str)> {
    file.significant().map(|t| (t.kind(), t.text())).collect()
}

#[test]
fn maximal_munch() {
    let file = run("x >>= 2", "java");
    assert_eq!(
        significant(&file),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, ">>="),
            (TokenKind::Literal(LiteralKind::Number), "2"),
        ]
    );
    let file = run("a >>> b", "java");
    assert_eq!(significant(&file)[1], (TokenKind::Operator, ">>>"));
}

#[test]
fn balanced_recovery() {
    let file = run("{ ( } )", "java");
    let punctuation = file
        .tokens()
        .iter()
        .filter(|t| t.kind() == TokenKind::Punctuation)
        .count();
    assert_eq!(punctuation, 4);
    let codes: Vec<ErrorCode> = file.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1001]);
    assert_eq!(file.diagnostics()[0].span.start, 4);
    assert!(!file.unclosed().is_empty());
    assert!(file.is_malformed());
}

#[test]
fn unterminated_literal() {
    let file = run("x = \"abc", "java");
    assert_eq!(
        significant(&file),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Operator, "="),
            (TokenKind::Unknown, "\"abc"),
        ]
    );
    let codes: Vec<ErrorCode> = file.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0001]);
    assert_eq!(file.unclosed()[0].kind, FrameKind::StringLiteral);
}

#[test]
fn single_line_string_stops_at_newline() {
    let file = run("s = 'abc\nt = 1", "python");
    let codes: Vec<ErrorCode> = file.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0001]);
    assert!(file
        .tokens()
        .iter()
        .any(|t| t.kind() == TokenKind::Unknown && t.text() == "'abc"));
    assert!(file.tokens().iter().any(|t| t.text() == "t"));
}

#[test]
fn unterminated_block_comment() {
    let file = run("x (* never closed", "ocaml");
    let codes: Vec<ErrorCode> = file.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0003]);
    assert_eq!(file.unclosed()[0].kind, FrameKind::BlockComment);
}

#[test]
fn annotation_precedence() {
    let file = run("@Override @synchronized void f() {}", "java");
    let annotations: Vec<&str> = file
        .tokens()
        .iter()
        .filter(|t| t.kind() == TokenKind::Annotation)
        .map(|t| t.text())
        .collect();
    assert_eq!(annotations, vec!["@", "Override", "@", "synchronized"]);
    // Without the marker the same word is a keyword.
    let file = run("synchronized", "java");
    assert_eq!(significant(&file), vec![(TokenKind::Keyword, "synchronized")]);
}

#[test]
fn unknown_language_has_no_tokens() {
    assert_eq!(
        tokenize("int x;", "brainfuck"),
        Err(TokenizeError::UnknownLanguage(UnknownLanguageError::new("brainfuck")))
    );
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(run("x", "  Python ").language(), "python");
}

#[test]
fn every_builtin_is_registered() {
    for id in BUILTIN_LANGUAGES {
        assert!(global().contains(id), "{id}");
    }
}

fn check_total_coverage(file: &TokenizedFile<'_>, source: &str) -> Result<(), TestCaseError> {
    let mut offset = 0u32;
    for token in file.tokens() {
        prop_assert_eq!(token.span().start_offset(), offset);
        prop_assert!(token.span().end_offset() > offset);
        offset = token.span().end_offset();
    }
    prop_assert_eq!(offset as usize, source.len());
    Ok(())
}

fn code_like() -> impl Strategy<Value = String> {
    prop::string::string_regex(
        r#"([a-zA-Z_][a-zA-Z0-9_]{0,6}|[0-9]{1,4}(\.[0-9]{1,2})?|[ \t\n]{1,3}|[{}()\[\]<>;,.:=+\-*/%!&|^~?@#$\\'"`]{1,3}|//|/\*|\*/|\(\*|\*\)|\{-|-\}|--|"""|é|\u{FEFF}|\x00){0,40}"#,
    )
    .unwrap_or_else(|err| panic!("bad regex: {err}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn total_coverage_on_arbitrary_text(source in any::<String>(), lang in 0..BUILTIN_LANGUAGES.len()) {
        let file = run(&source, BUILTIN_LANGUAGES[lang]);
        check_total_coverage(&file, &source)?;
    }

    #[test]
    fn total_coverage_on_code_like_text(source in code_like(), lang in 0..BUILTIN_LANGUAGES.len()) {
        let file = run(&source, BUILTIN_LANGUAGES[lang]);
        check_total_coverage(&file, &source)?;
        // Unknown tokens always come with a diagnostic or an encoding issue.
        if file.tokens().iter().any(|t| t.kind() == TokenKind::Unknown) {
            prop_assert!(!file.diagnostics().is_empty());
        }
    }

    #[test]
    fn tokenizing_is_idempotent(source in code_like(), lang in 0..BUILTIN_LANGUAGES.len()) {
        let first = run(&source, BUILTIN_LANGUAGES[lang]);
        let second = run(&source, BUILTIN_LANGUAGES[lang]);
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn config_never_changes_tokens(source in code_like(), lang in 0..BUILTIN_LANGUAGES.len()) {
        let rules = global()
            .lookup(BUILTIN_LANGUAGES[lang])
            .unwrap_or_else(|err| panic!("{err}"));
        let full = tokenize_with(&source, rules, &TokenizerConfig::default())
            .unwrap_or_else(|err| panic!("{err}"));
        let bare = tokenize_with(
            &source,
            rules,
            &TokenizerConfig::default().with_generics(false).with_regions(false),
        )
        .unwrap_or_else(|err| panic!("{err}"));
        prop_assert_eq!(full.tokens(), bare.tokens());
        prop_assert_eq!(full.is_malformed(), bare.is_malformed());
    }
}
