//! Core diagnostic types.

use std::fmt;

use polylex_ir::{FrameKind, LineCol, Span};

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Malformed input found by the scanner. The offending span is emitted as
/// an `Unknown` token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MalformedInput {
    /// Quoted literal reached end-of-input (or end-of-line for single-line
    /// quotes) without its closing delimiter.
    UnterminatedString,
    /// Same as [`MalformedInput::UnterminatedString`] for character quotes.
    UnterminatedChar,
    /// Block comment reached end-of-input while still open.
    UnterminatedBlockComment,
    /// A character with no meaning in the language.
    UnexpectedCharacter { ch: char },
    /// NUL byte inside the source.
    InteriorNull,
    /// U+FEFF byte order mark after the start of the source.
    StrayByteOrderMark,
}

impl MalformedInput {
    pub fn code(self) -> ErrorCode {
        match self {
            MalformedInput::UnterminatedString => ErrorCode::E0001,
            MalformedInput::UnterminatedChar => ErrorCode::E0002,
            MalformedInput::UnterminatedBlockComment => ErrorCode::E0003,
            MalformedInput::UnexpectedCharacter { .. } => ErrorCode::W0001,
            MalformedInput::InteriorNull => ErrorCode::W0002,
            MalformedInput::StrayByteOrderMark => ErrorCode::W0003,
        }
    }

    fn message(self) -> String {
        match self {
            MalformedInput::UnterminatedString => "unterminated string literal".to_owned(),
            MalformedInput::UnterminatedChar => "unterminated character literal".to_owned(),
            MalformedInput::UnterminatedBlockComment => "unterminated block comment".to_owned(),
            MalformedInput::UnexpectedCharacter { ch } => {
                format!("unexpected character {ch:?} (U+{:04X})", u32::from(ch))
            }
            MalformedInput::InteriorNull => "null byte in source".to_owned(),
            MalformedInput::StrayByteOrderMark => {
                "byte order mark (U+FEFF) after the start of the source".to_owned()
            }
        }
    }
}

/// Delimiter mismatch found by the nesting tracker. The offending closer
/// stays an ordinary punctuation token and the stack is left alone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StructureError {
    /// Closer does not match the innermost open frame.
    MismatchedCloser {
        expected: FrameKind,
        found: FrameKind,
        opened_at: Span,
    },
    /// Closer with no open frame at all.
    UnmatchedCloser { found: FrameKind },
}

impl StructureError {
    pub fn code(self) -> ErrorCode {
        match self {
            StructureError::MismatchedCloser { .. } => ErrorCode::E1001,
            StructureError::UnmatchedCloser { .. } => ErrorCode::E1002,
        }
    }

    fn message(self) -> String {
        match self {
            StructureError::MismatchedCloser {
                expected, found, ..
            } => format!("mismatched closing {found}: innermost open frame is a {expected}"),
            StructureError::UnmatchedCloser { found } => {
                format!("unmatched closing {found}")
            }
        }
    }
}

/// Typed payload of a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    MalformedInput(MalformedInput),
    Structure(StructureError),
}

/// A recoverable problem found while tokenizing one file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Byte range the diagnostic points at.
    pub span: Span,
    /// Line and column of `span.start`.
    pub position: LineCol,
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic for malformed input. Warning codes get warning severity.
    pub fn malformed(kind: MalformedInput, span: Span, position: LineCol) -> Self {
        let code = kind.code();
        Diagnostic {
            code,
            severity: if code.is_warning() {
                Severity::Warning
            } else {
                Severity::Error
            },
            kind: DiagnosticKind::MalformedInput(kind),
            span,
            position,
            message: kind.message(),
        }
    }

    /// Diagnostic for a structure error. Always an error.
    pub fn structure(kind: StructureError, span: Span, position: LineCol) -> Self {
        Diagnostic {
            code: kind.code(),
            severity: Severity::Error,
            kind: DiagnosticKind::Structure(kind),
            span,
            position,
            message: kind.message(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[inline]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self.kind, DiagnosticKind::MalformedInput(_))
    }

    #[inline]
    pub fn is_structure_error(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Structure(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.code, self.position, self.message
        )
    }
}
