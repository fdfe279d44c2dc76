//! Incremental line/column tracking.
//!
//! Lines are 1-based. Columns are 1-based and count Unicode scalar values
//! from the start of the line. Only `\n` starts a new line, so a `\r\n`
//! pair advances the line once.

use polylex_ir::LineCol;

/// Line/column position, advanced one token text at a time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineCounter {
    line: u32,
    column: u32,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCounter {
    pub fn new() -> Self {
        LineCounter { line: 1, column: 1 }
    }

    /// Position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }

    /// Move past `text` and return the new position.
    pub fn advance(&mut self, text: &str) -> LineCol {
        let bytes = text.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', bytes).count();
                self.line = self.line.saturating_add(saturate(newlines));
                self.column = 1 + saturate(char_count(&bytes[last + 1..]));
            }
            None => {
                self.column = self.column.saturating_add(saturate(char_count(bytes)));
            }
        }
        self.position()
    }
}

/// Number of UTF-8 scalar values in `bytes` (count of non-continuation
/// bytes).
#[inline]
fn char_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count()
}

#[inline]
fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
