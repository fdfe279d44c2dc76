//! Tokenizer configuration.

use polylex_diagnostic::DiagnosticConfig;

/// Options for one tokenizer run.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TokenizerConfig {
    /// Maximum diagnostics kept per file (0 = unlimited). Diagnostics past
    /// the limit are counted, not stored.
    pub diagnostic_limit: usize,
    /// Annotate `<...>` runs as generic regions in languages that have
    /// generics.
    pub track_generics: bool,
    /// Record balanced frames as [`NestingRegion`](crate::NestingRegion)s.
    pub record_regions: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            diagnostic_limit: DiagnosticConfig::default().limit,
            track_generics: true,
            record_regions: true,
        }
    }
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_diagnostic_limit(mut self, limit: usize) -> Self {
        self.diagnostic_limit = limit;
        self
    }

    #[must_use]
    pub fn with_generics(mut self, enabled: bool) -> Self {
        self.track_generics = enabled;
        self
    }

    #[must_use]
    pub fn with_regions(mut self, enabled: bool) -> Self {
        self.record_regions = enabled;
        self
    }

    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            limit: self.diagnostic_limit,
        }
    }
}
