//! Low-level scanner for polylex.
//!
//! Splits source text into `(RawTag, len)` pairs using a language's
//! [`LanguageRules`](polylex_rules::LanguageRules). The scanner does not resolve keywords or decide
//! between identifiers, literals and symbols beyond what the byte-level
//! grammar requires; that is the classifier's job in `polylex`.
//!
//! # Architecture
//!
//! - [`SourceBuffer`]: borrowed source plus encoding issues found up front
//! - [`Cursor`]: byte cursor with `memchr`-accelerated skipping
//! - [`RawScanner`]: rules-driven dispatch producing [`RawToken`]s
//! - [`LineCounter`]: incremental line/column tracking over emitted text
//! - [`numeric`]: the numeric literal grammar shared with the classifier
//!
//! Every byte of the source is covered by exactly one raw token. Malformed
//! input is encoded in the tag, never as an `Err`.

mod cursor;
mod line_counter;
pub mod numeric;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use line_counter::LineCounter;
pub use raw_scanner::{scan, RawScanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer, MAX_SOURCE_LEN};
pub use tag::{RawTag, RawToken};
