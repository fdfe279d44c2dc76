//! 256-entry byte membership tables.
//!
//! Identifier classes are checked once per byte in the scanner's hottest
//! loop, so they are plain lookup tables rather than range matches.

/// Set of bytes, stored as a 256-byte lookup table.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct ByteClass([bool; 256]);

/// Non-ASCII bytes always belong to identifiers so a multi-byte UTF-8
/// character is never split across tokens.
const NON_ASCII: std::ops::RangeInclusive<u8> = 0x80..=0xFF;

impl ByteClass {
    /// The empty class.
    pub const fn empty() -> Self {
        ByteClass([false; 256])
    }

    /// `A-Z`, `a-z`, `_`, and every non-ASCII byte.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "loop counter i is 0..=255, always fits in u8"
    )]
    pub const fn ident_start() -> Self {
        let mut table = [false; 256];
        let mut i = 0u16;
        while i < 256 {
            table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0x80..=0xFF);
            i += 1;
        }
        ByteClass(table)
    }

    /// [`ByteClass::ident_start`] plus ASCII digits.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "loop counter i is 0..=255, always fits in u8"
    )]
    pub const fn ident_continue() -> Self {
        let mut table = [false; 256];
        let mut i = 0u16;
        while i < 256 {
            table[i as usize] = matches!(
                i as u8,
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | 0x80..=0xFF
            );
            i += 1;
        }
        ByteClass(table)
    }

    /// Add every byte in `bytes`.
    #[must_use]
    pub fn with(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self.0[b as usize] = true;
        }
        self
    }

    /// Remove every byte in `bytes`. Non-ASCII bytes cannot be removed.
    #[must_use]
    pub fn without(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            if !NON_ASCII.contains(&b) {
                self.0[b as usize] = false;
            }
        }
        self
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.0[b as usize]
    }

    /// `true` if at least one ASCII byte is a member.
    pub fn has_ascii_member(&self) -> bool {
        self.0[..0x80].iter().any(|&m| m)
    }
}

impl std::fmt::Debug for ByteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ascii: String = (0u8..0x80)
            .filter(|&b| self.contains(b) && b.is_ascii_graphic())
            .map(char::from)
            .collect();
        write!(f, "ByteClass({ascii:?} + non-ascii)")
    }
}
