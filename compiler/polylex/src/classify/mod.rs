//! Token classification.
//!
//! Turns a raw scanner tag plus the token text into a [`TokenKind`].
//! Trivia and malformed tags map directly. Everything else goes through
//! the lookup order:
//!
//! 0. annotation: the marker itself, or an identifier glued to it
//! 1. keyword (case-folded where the language says so)
//! 2. number
//! 3. quoted literal
//! 4. operator or punctuation
//! 5. identifier
//!
//! `<` and `>` always classify as operators; whether a `<...>` run is a
//! generic argument list is decided later by the nesting tracker.

use polylex_ir::{CommentKind, LiteralKind, SourceSpan, Token, TokenKind};
use polylex_lexer_core::{numeric, RawTag};
use polylex_rules::{LanguageRules, SymbolKind};

/// Classify the token covering `span`.
///
/// `previous` is the token immediately before it, if any.
pub fn classify(
    span: &SourceSpan<'_>,
    tag: RawTag,
    previous: Option<&Token<'_>>,
    rules: &LanguageRules,
) -> TokenKind {
    match tag {
        RawTag::Whitespace => return TokenKind::Whitespace,
        RawTag::LineComment => return TokenKind::Comment(CommentKind::Line),
        RawTag::BlockComment => return TokenKind::Comment(CommentKind::Block),
        RawTag::AnnotationMarker => return TokenKind::Annotation,
        RawTag::InvalidChar
        | RawTag::InteriorNull
        | RawTag::UnterminatedString
        | RawTag::UnterminatedChar
        | RawTag::UnterminatedBlockComment => return TokenKind::Unknown,
        RawTag::Ident
        | RawTag::Number
        | RawTag::String
        | RawTag::Char
        | RawTag::Operator
        | RawTag::Punctuation => {}
    }

    let text = span.text();
    if tag == RawTag::Ident && follows_annotation_marker(span, previous, rules) {
        return TokenKind::Annotation;
    }
    if rules.is_keyword(text) {
        return TokenKind::Keyword;
    }
    if tag == RawTag::Number || numeric::is_number(text) {
        return TokenKind::Literal(LiteralKind::Number);
    }
    if let Some(quote) = rules.quote_for(text) {
        return TokenKind::Literal(quote.kind());
    }
    match tag {
        RawTag::String => return TokenKind::Literal(LiteralKind::String),
        RawTag::Char => return TokenKind::Literal(LiteralKind::Char),
        _ => {}
    }
    match rules.symbol_kind(text) {
        Some(SymbolKind::Operator) => TokenKind::Operator,
        Some(SymbolKind::Punctuation) => TokenKind::Punctuation,
        None => TokenKind::Identifier,
    }
}

/// `true` if `previous` is a bare annotation marker ending exactly where
/// `span` starts.
fn follows_annotation_marker(
    span: &SourceSpan<'_>,
    previous: Option<&Token<'_>>,
    rules: &LanguageRules,
) -> bool {
    let (Some(previous), Some(marker)) = (previous, rules.annotation_marker()) else {
        return false;
    };
    previous.kind() == TokenKind::Annotation
        && previous.text().as_bytes() == [marker]
        && previous.span().is_adjacent_to(span)
}

#[cfg(test)]
mod tests;
