//! Classified tokens.

use std::fmt;

use crate::SourceSpan;

/// Kind of a literal token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralKind {
    String,
    Number,
    Char,
}

/// Kind of a comment token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// Runs to the end of the line (`//`, `#`, `--`, `%`, `;`).
    Line,
    /// Delimited on both ends (`/* */`, `{- -}`, `(* *)`).
    Block,
}

/// Classification of one token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal(LiteralKind),
    Operator,
    Punctuation,
    Comment(CommentKind),
    /// Annotation marker (`@`) and the name it marks.
    Annotation,
    Whitespace,
    /// Bytes the scanner could not classify, including unterminated
    /// literals and comments.
    Unknown,
}

impl TokenKind {
    /// Whitespace and comments: tokens a consumer may skip without losing
    /// program structure.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment(_))
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Literal(_))
    }

    /// Short lowercase name, stable for golden files and serialized output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Literal(LiteralKind::String) => "string",
            TokenKind::Literal(LiteralKind::Number) => "number",
            TokenKind::Literal(LiteralKind::Char) => "char",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Comment(CommentKind::Line) => "line-comment",
            TokenKind::Comment(CommentKind::Block) => "block-comment",
            TokenKind::Annotation => "annotation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token.
///
/// Created once by the classifier and never modified. The language hint is
/// the id of the rules that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    span: SourceSpan<'a>,
    kind: TokenKind,
    language_hint: Option<&'a str>,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(span: SourceSpan<'a>, kind: TokenKind, language_hint: Option<&'a str>) -> Self {
        Token {
            span,
            kind,
            language_hint,
        }
    }

    #[inline]
    pub fn span(&self) -> SourceSpan<'a> {
        self.span
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn language_hint(&self) -> Option<&'a str> {
        self.language_hint
    }

    /// The source text of this token.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.span.text()
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {:?}", self.kind, self.text(), self.span.span())
    }
}
