//! Nesting frames and the regions they leave behind once closed.

use std::fmt;

use crate::SourceSpan;

/// What kind of structure a nesting frame represents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    /// `{ ... }`
    Brace,
    /// `( ... )`
    Paren,
    /// `[ ... ]`
    Bracket,
    /// A quoted literal. Only stays open when unterminated.
    StringLiteral,
    /// A block comment. Only stays open when unterminated.
    BlockComment,
    /// A `<...>` run in type position.
    Generic,
}

impl FrameKind {
    /// `true` for the bracket-like kinds that are opened and closed by
    /// separate punctuation tokens.
    #[inline]
    pub fn is_delimiter(self) -> bool {
        matches!(self, FrameKind::Brace | FrameKind::Paren | FrameKind::Bracket)
    }

    pub fn name(self) -> &'static str {
        match self {
            FrameKind::Brace => "brace",
            FrameKind::Paren => "parenthesis",
            FrameKind::Bracket => "bracket",
            FrameKind::StringLiteral => "string literal",
            FrameKind::BlockComment => "block comment",
            FrameKind::Generic => "generic",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An open structural delimiter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NestingFrame<'a> {
    pub kind: FrameKind,
    pub opened_at: SourceSpan<'a>,
}

impl<'a> NestingFrame<'a> {
    #[inline]
    pub fn new(kind: FrameKind, opened_at: SourceSpan<'a>) -> Self {
        NestingFrame { kind, opened_at }
    }
}

/// A frame that was opened and then balanced.
///
/// `depth` is the number of frames that were open around it, so top-level
/// regions have depth 0.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NestingRegion<'a> {
    pub kind: FrameKind,
    pub open: SourceSpan<'a>,
    pub close: SourceSpan<'a>,
    pub depth: u32,
}

impl<'a> NestingRegion<'a> {
    /// Span from the opening token through the closing token.
    pub fn full_span(&self) -> SourceSpan<'a> {
        self.open.to(&self.close)
    }
}
