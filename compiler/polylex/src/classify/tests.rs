use super::*;
use polylex_ir::{LineCol, Span};
use polylex_rules::global;
use pretty_assertions::assert_eq;

fn rules(id: &str) -> &'static LanguageRules {
    match global().lookup(id) {
        Ok(rules) => rules,
        Err(err) => panic!("{err}"),
    }
}

/// Span over `source[start..end]` on line 1.
#[allow(
    clippy::cast_possible_truncation,
    reason = "test sources are tiny"
)]
fn span(source: &str, start: usize, end: usize) -> SourceSpan<'_> {
    SourceSpan::new(
        source,
        Span::new(start as u32, end as u32),
        LineCol::new(1, start as u32 + 1),
        LineCol::new(1, end as u32 + 1),
    )
}

fn whole(source: &str, tag: RawTag, lang: &str) -> TokenKind {
    classify(&span(source, 0, source.len()), tag, None, rules(lang))
}

#[test]
fn trivia_and_errors_map_directly() {
    assert_eq!(whole("  ", RawTag::Whitespace, "java"), TokenKind::Whitespace);
    assert_eq!(
        whole("// x", RawTag::LineComment, "java"),
        TokenKind::Comment(CommentKind::Line)
    );
    assert_eq!(
        whole("/* x */", RawTag::BlockComment, "java"),
        TokenKind::Comment(CommentKind::Block)
    );
    assert_eq!(whole("\"abc", RawTag::UnterminatedString, "java"), TokenKind::Unknown);
    assert_eq!(whole("#", RawTag::InvalidChar, "java"), TokenKind::Unknown);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(whole("class", RawTag::Ident, "java"), TokenKind::Keyword);
    assert_eq!(whole("synchronized", RawTag::Ident, "java"), TokenKind::Keyword);
    assert_eq!(whole("Class", RawTag::Ident, "java"), TokenKind::Identifier);
    assert_eq!(whole("def", RawTag::Ident, "python"), TokenKind::Keyword);
    assert_eq!(whole("def", RawTag::Ident, "java"), TokenKind::Identifier);
}

#[test]
fn fortran_keywords_ignore_case() {
    assert_eq!(whole("PROGRAM", RawTag::Ident, "fortran"), TokenKind::Keyword);
    assert_eq!(whole("Program", RawTag::Ident, "fortran"), TokenKind::Keyword);
    assert_eq!(whole("PROGRAM", RawTag::Ident, "c"), TokenKind::Identifier);
}

#[test]
fn literals() {
    assert_eq!(
        whole("0x1F", RawTag::Number, "c"),
        TokenKind::Literal(LiteralKind::Number)
    );
    assert_eq!(
        whole("\"s\"", RawTag::String, "c"),
        TokenKind::Literal(LiteralKind::String)
    );
    assert_eq!(
        whole("'c'", RawTag::Char, "c"),
        TokenKind::Literal(LiteralKind::Char)
    );
    assert_eq!(
        whole("$a", RawTag::Char, "erlang"),
        TokenKind::Literal(LiteralKind::Char)
    );
    assert_eq!(
        whole("'''doc'''", RawTag::String, "python"),
        TokenKind::Literal(LiteralKind::String)
    );
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(whole(">>=", RawTag::Operator, "java"), TokenKind::Operator);
    assert_eq!(whole("<", RawTag::Operator, "java"), TokenKind::Operator);
    assert_eq!(whole(">", RawTag::Operator, "java"), TokenKind::Operator);
    assert_eq!(whole("{", RawTag::Punctuation, "java"), TokenKind::Punctuation);
    assert_eq!(whole(";", RawTag::Punctuation, "java"), TokenKind::Punctuation);
    assert_eq!(whole("...", RawTag::Operator, "java"), TokenKind::Operator);
}

#[test]
fn annotation_marker_and_name() {
    let source = "@Override";
    let rules = rules("java");
    let marker_span = span(source, 0, 1);
    let marker_kind = classify(&marker_span, RawTag::AnnotationMarker, None, rules);
    assert_eq!(marker_kind, TokenKind::Annotation);

    let marker = Token::new(marker_span, marker_kind, Some("java"));
    let name = classify(&span(source, 1, 9), RawTag::Ident, Some(&marker), rules);
    assert_eq!(name, TokenKind::Annotation);
}

#[test]
fn annotation_beats_keyword() {
    let source = "@synchronized @interface";
    let rules = rules("java");
    let marker = Token::new(span(source, 0, 1), TokenKind::Annotation, Some("java"));
    assert_eq!(
        classify(&span(source, 1, 13), RawTag::Ident, Some(&marker), rules),
        TokenKind::Annotation
    );
    let marker = Token::new(span(source, 14, 15), TokenKind::Annotation, Some("java"));
    assert_eq!(
        classify(&span(source, 15, 24), RawTag::Ident, Some(&marker), rules),
        TokenKind::Annotation
    );
}

#[test]
fn annotation_needs_adjacency() {
    let source = "@ Override";
    let rules = rules("java");
    let marker = Token::new(span(source, 0, 1), TokenKind::Annotation, Some("java"));
    assert_eq!(
        classify(&span(source, 2, 10), RawTag::Ident, Some(&marker), rules),
        TokenKind::Identifier
    );
}

#[test]
fn annotation_name_does_not_chain() {
    // Only the marker starts an annotation; the name after it does not.
    let source = "@A.B";
    let rules = rules("java");
    let name = Token::new(span(source, 1, 2), TokenKind::Annotation, Some("java"));
    let dot = classify(&span(source, 2, 3), RawTag::Punctuation, Some(&name), rules);
    assert_eq!(dot, TokenKind::Punctuation);
}

#[test]
fn char_fallback_symbol_is_punctuation() {
    assert_eq!(whole("'", RawTag::Punctuation, "ocaml"), TokenKind::Punctuation);
}
