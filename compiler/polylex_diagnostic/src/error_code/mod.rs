//! Error codes for tokenizer diagnostics.
//!
//! Format: E#### for errors, W#### for warnings. The first digit gives the
//! stage that raised it:
//! - E0xxx / W0xxx: scanner (malformed input)
//! - E1xxx: nesting tracker (structure)

use std::fmt;

/// Error codes for all tokenizer diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Malformed input (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unterminated character literal
    E0002,
    /// Unterminated block comment
    E0003,

    // Structure (E1xxx)
    /// Closing delimiter does not match the innermost open frame
    E1001,
    /// Closing delimiter with nothing open
    E1002,

    // Warnings (W0xxx)
    /// Byte or character with no meaning in the language
    W0001,
    /// Interior NUL byte
    W0002,
    /// Byte order mark after the start of the source
    W0003,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::W0001,
        ErrorCode::W0002,
        ErrorCode::W0003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
            ErrorCode::W0003 => "W0003",
        }
    }

    /// One-line description for `--explain` style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unterminated character literal",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E1001 => "mismatched closing delimiter",
            ErrorCode::E1002 => "unmatched closing delimiter",
            ErrorCode::W0001 => "unexpected character",
            ErrorCode::W0002 => "interior null byte",
            ErrorCode::W0003 => "stray byte order mark",
        }
    }

    /// Check if this code is raised by the scanner.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E0003
                | ErrorCode::W0001
                | ErrorCode::W0002
                | ErrorCode::W0003
        )
    }

    /// Check if this code is raised by the nesting tracker.
    pub fn is_structure_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0001 | ErrorCode::W0002 | ErrorCode::W0003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0001"` or `"W0002"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}
