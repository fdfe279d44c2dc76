//! Diagnostics for the polylex tokenizer.
//!
//! Scanning never aborts on recoverable problems. Each one becomes a
//! [`Diagnostic`]: an [`ErrorCode`] for searchability, a [`Severity`], a
//! typed [`DiagnosticKind`], and the span/position it applies to. The
//! [`DiagnosticQueue`] collects them for one file, enforces a limit, and
//! hands them back sorted by position.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, DiagnosticKind, MalformedInput, Severity, StructureError};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
