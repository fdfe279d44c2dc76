//! Errors raised while building rules or looking them up.

/// No rules are registered under the requested language id, alias, or
/// extension. Fatal to the call: there is nothing to scan with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{id}`")]
pub struct UnknownLanguageError {
    pub id: String,
}

impl UnknownLanguageError {
    pub fn new(id: impl Into<String>) -> Self {
        UnknownLanguageError { id: id.into() }
    }
}

/// A [`LanguageRules`](crate::LanguageRules) definition that cannot be used
/// for scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("language id must not be empty")]
    EmptyId,

    #[error("language `{language}` has an empty {what} delimiter")]
    EmptyDelimiter {
        language: String,
        what: &'static str,
    },

    #[error("language `{language}` has no ASCII identifier start characters")]
    NoIdentifierStart { language: String },

    #[error("language `{language}` declares non-ASCII symbol `{symbol}`")]
    NonAsciiSymbol { language: String, symbol: String },

    #[error("language `{language}` uses whitespace byte {byte:#04x} as annotation marker")]
    InvalidAnnotationMarker { language: String, byte: u8 },
}

/// Failure to install the process-wide registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("the global language registry is already initialized")]
    AlreadyInitialized,
}
