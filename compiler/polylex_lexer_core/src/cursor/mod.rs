//! Byte cursor over a borrowed source.
//!
//! Reads past the end return `0x00`; use [`Cursor::is_eof`] to tell EOF
//! apart from an interior null byte. Every method that moves the cursor
//! clamps to the source length, so scanning can never run off the end.

/// Cursor over the scannable bytes of a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so a snapshot is a plain assignment; the scanner
/// uses this to back out of char literals that do not close.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: u32,
    len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], len: u32) -> Self {
        debug_assert!(len as usize <= bytes.len());
        Cursor { bytes, pos: 0, len }
    }

    /// Byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.len {
            self.bytes.get(pos as usize).copied().unwrap_or(0)
        } else {
            0
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scannable source.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.len
    }

    /// Bytes from `start` up to the current position.
    #[inline]
    pub fn since(&self, start: u32) -> &'a [u8] {
        self.bytes
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }

    /// Unscanned bytes from the current position to the end.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.bytes
            .get(self.pos as usize..self.len as usize)
            .unwrap_or_default()
    }

    /// `true` if the unscanned bytes start with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, stopping at EOF.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len);
    }

    /// Advance by a byte count taken from a slice length.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets come from slices of the source, which fits in u32"
    )]
    #[inline]
    pub fn advance_by(&mut self, n: usize) {
        self.advance_n(n as u32);
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Continuation and invalid lead bytes count as one.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance while `pred` holds for the current byte. Stops at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past ASCII whitespace: space, tab, `\n`, `\r`, vertical tab
    /// and form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Advance to the next `\n` (not consumed) or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(offset) => self.advance_by(offset),
            None => self.pos = self.len,
        }
    }

    /// Step back over one `byte` directly before the cursor, never moving
    /// below `floor`.
    pub fn retreat_over(&mut self, byte: u8, floor: u32) {
        if self.pos > floor && self.byte_at(self.pos - 1) == byte {
            self.pos -= 1;
        }
    }

    /// Offset of the first occurrence of `needle` in the unscanned bytes.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        memchr::memmem::find(self.rest(), needle)
    }

    /// Advance to the first of up to three `needles` and return it, or move
    /// to EOF and return `None`.
    ///
    /// With no needles the cursor moves straight to EOF.
    pub fn skip_to_any(&mut self, needles: &[u8]) -> Option<u8> {
        let rest = self.rest();
        let offset = match *needles {
            [a] => memchr::memchr(a, rest),
            [a, b] => memchr::memchr2(a, b, rest),
            [a, b, c, ..] => memchr::memchr3(a, b, c, rest),
            [] => None,
        };
        match offset {
            Some(offset) => {
                self.advance_by(offset);
                Some(self.current())
            }
            None => {
                self.pos = self.len;
                None
            }
        }
    }
}

/// ASCII whitespace as the scanner sees it.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
