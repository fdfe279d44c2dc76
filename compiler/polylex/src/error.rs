//! Errors that stop a tokenize call before it produces anything.

use polylex_lexer_core::MAX_SOURCE_LEN;
use polylex_rules::UnknownLanguageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguageError),

    /// Spans are `u32` offsets, so longer sources cannot be covered.
    #[error("source is {len} bytes, the limit is {max}", max = MAX_SOURCE_LEN)]
    SourceTooLarge { len: usize },
}

/// Reject sources whose offsets would not fit in a span.
pub(crate) fn check_source_len(len: usize) -> Result<(), TokenizeError> {
    if len > MAX_SOURCE_LEN {
        return Err(TokenizeError::SourceTooLarge { len });
    }
    Ok(())
}
