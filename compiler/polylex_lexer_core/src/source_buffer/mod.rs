//! Borrowed source buffer with up-front encoding checks.
//!
//! The buffer never copies the source: spans handed out by the tokenizer
//! borrow the caller's text directly.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans for:
//! - Interior null bytes (U+0000)
//! - Byte order marks (U+FEFF) anywhere but offset 0
//!
//! A leading byte order mark is not an issue; the scanner treats it as
//! whitespace. Issues are recorded as [`EncodingIssue`] values, which the
//! tokenizer turns into warning diagnostics.

use crate::Cursor;

/// Longest source a buffer can cover. Offsets are stored as `u32`.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// UTF-8 encoding of U+FEFF.
pub(crate) const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Source text prepared for scanning.
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    source: &'src str,
    /// Length of the source, saturated at `u32::MAX`.
    len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// Null byte (U+0000) in source content.
    InteriorNull,
    /// U+FEFF after the start of the source.
    StrayBom,
}

impl<'src> SourceBuffer<'src> {
    /// Wrap `source` and record its encoding issues.
    ///
    /// Sources longer than [`MAX_SOURCE_LEN`] are scanned only up to that
    /// length; the tokenizer rejects them before building a buffer.
    pub fn new(source: &'src str) -> Self {
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source.as_bytes(), &mut encoding_issues);
        SourceBuffer {
            source,
            len,
            encoding_issues,
        }
    }

    pub fn as_str(&self) -> &'src str {
        self.source
    }

    pub fn as_bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'src> {
        Cursor::new(self.source.as_bytes(), self.len)
    }

    /// Length of the scannable source in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if the source starts with a UTF-8 byte order mark.
    pub fn has_leading_bom(&self) -> bool {
        self.source.as_bytes().starts_with(UTF8_BOM)
    }

    /// Encoding issues, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_interior_nulls(source, issues);
    detect_stray_boms(source, issues);
    issues.sort_by_key(|issue| issue.pos);
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for pos in memchr::memchr_iter(0, source) {
        let Ok(pos) = u32::try_from(pos) else {
            break;
        };
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos,
            len: 1,
        });
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "UTF8_BOM is 3 bytes"
)]
fn detect_stray_boms(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for pos in memchr::memmem::find_iter(source, UTF8_BOM).filter(|&pos| pos != 0) {
        let Ok(pos) = u32::try_from(pos) else {
            break;
        };
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::StrayBom,
            pos,
            len: UTF8_BOM.len() as u32,
        });
    }
}

#[cfg(test)]
mod tests;
