//! Source location spans.
//!
//! [`Span`] is the compact 8-byte range used in diagnostics. [`SourceSpan`]
//! is what tokens carry: the same range plus 1-based line/column for both
//! ends and a borrow of the text it was cut from.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Byte range within a source file. `end` is exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// 1-based line and column. Columns count Unicode scalar values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    /// Position of the first byte of a file.
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        LineCol { line, column }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        LineCol::START
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of one scanned buffer, with line/column for both ends.
///
/// Borrows the whole source buffer rather than copying the covered text, so
/// a `SourceSpan` is `Copy` and costs nothing to hand around. `end` is the
/// position just past the last byte.
///
/// Equality and hashing look at the byte range, the positions, and the
/// covered text, never at the rest of the buffer.
#[derive(Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceSpan<'src> {
    #[cfg_attr(feature = "serde", serde(skip))]
    source: &'src str,
    span: Span,
    start: LineCol,
    end: LineCol,
}

impl<'src> SourceSpan<'src> {
    /// Create a span over `source[span]`.
    ///
    /// # Contract
    ///
    /// `span` must lie within `source` on character boundaries and
    /// `start <= end`. Scanner-produced spans satisfy this by construction.
    pub fn new(source: &'src str, span: Span, start: LineCol, end: LineCol) -> Self {
        debug_assert!(span.start <= span.end, "span start {span:?} exceeds end");
        debug_assert!(
            span.end as usize <= source.len(),
            "span {span:?} exceeds source length {}",
            source.len()
        );
        debug_assert!(start <= end, "line/column start {start} after end {end}");
        SourceSpan {
            source,
            span,
            start,
            end,
        }
    }

    /// The text covered by this span.
    #[inline]
    pub fn text(&self) -> &'src str {
        self.source.get(self.span.range()).unwrap_or_default()
    }

    /// The whole buffer this span was cut from.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn start_offset(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.span.end
    }

    /// Line and column of the first byte.
    #[inline]
    pub fn start(&self) -> LineCol {
        self.start
    }

    /// Line and column just past the last byte.
    #[inline]
    pub fn end(&self) -> LineCol {
        self.end
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// `true` if `other` starts exactly where this span ends.
    #[inline]
    pub fn is_adjacent_to(&self, other: &SourceSpan<'_>) -> bool {
        self.span.end == other.span.start
    }

    /// Span covering both `self` and `other`, which must share a buffer.
    #[must_use]
    pub fn to(&self, other: &SourceSpan<'src>) -> SourceSpan<'src> {
        let (first, last) = if self.span.start <= other.span.start {
            (self, other)
        } else {
            (other, self)
        };
        SourceSpan {
            source: self.source,
            span: self.span.merge(other.span),
            start: first.start,
            end: if last.span.end >= first.span.end {
                last.end
            } else {
                first.end
            },
        }
    }
}

impl PartialEq for SourceSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span
            && self.start == other.start
            && self.end == other.end
            && self.text() == other.text()
    }
}

impl Eq for SourceSpan<'_> {}

impl Hash for SourceSpan<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.span.hash(state);
        self.start.hash(state);
        self.end.hash(state);
        self.text().hash(state);
    }
}

impl fmt::Debug for SourceSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} @ {}-{} {:?}",
            self.span,
            self.start,
            self.end,
            self.text()
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{LineCol, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(LineCol, 8);
}
