//! Diagnostic queue for collecting, limiting, and sorting diagnostics.
//!
//! Features:
//! - Limit on stored diagnostics, with a count of everything past it
//! - Exact-duplicate suppression (same code at the same span)
//! - Position-sorted flush

use crate::Diagnostic;

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics kept per file (0 = unlimited).
    pub limit: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig { limit: 100 }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limit (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig { limit: 0 }
    }
}

/// Queue for one file's diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// queue.push(diagnostic);
/// // ... more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Diagnostics dropped because the limit was reached.
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            suppressed: 0,
            config,
        }
    }

    /// Add a diagnostic. Returns `false` if it was dropped, either as an
    /// exact duplicate or because the limit is reached.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        let duplicate = self
            .diagnostics
            .iter()
            .rev()
            .take_while(|d| d.span.start >= diagnostic.span.start)
            .any(|d| d.code == diagnostic.code && d.span == diagnostic.span);
        if duplicate {
            return false;
        }
        if self.is_full() {
            self.suppressed += 1;
            return false;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    /// `true` once the configured limit is reached.
    pub fn is_full(&self) -> bool {
        self.config.limit != 0 && self.diagnostics.len() >= self.config.limit
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of stored diagnostics with error severity.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Number of diagnostics dropped by the limit.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Take all stored diagnostics, sorted by span start then code.
    ///
    /// The queue is left empty; the suppressed count is kept.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by(|a, b| {
            a.span
                .start
                .cmp(&b.span.start)
                .then_with(|| a.code.as_str().cmp(b.code.as_str()))
        });
        diagnostics
    }
}
