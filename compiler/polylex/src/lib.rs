//! Multi-language source tokenizer.
//!
//! Turns source text in any registered language into classified
//! [`Token`]s, recoverable [`Diagnostic`]s and shallow nesting structure,
//! without a language-specific front end.
//!
//! # Pipeline
//!
//! ```text
//! &str ──► RawScanner ──► classify ──► NestingTracker ──► TokenizedFile
//!            (rules)       (rules)      (regions, unclosed frames)
//! ```
//!
//! - [`polylex_lexer_core`]: byte-level scanning into raw tags
//! - [`classify`]: raw tag plus text to [`TokenKind`]
//! - [`nesting`]: delimiter matching and generic-run annotation
//! - [`tokenizer`]: the lazy [`Tokenizer`] and [`tokenize`]
//! - [`batch`]: parallel tokenization of many files
//! - [`names`]: identifier word mining
//!
//! # Tracing
//!
//! Call [`init_tracing`] and set `RUST_LOG` (e.g. `RUST_LOG=polylex=debug`)
//! to see per-file summaries; `trace` adds structure events.

use std::sync::Once;

pub mod batch;
pub mod classify;
mod config;
mod error;
pub mod names;
pub mod nesting;
pub mod tokenizer;

pub use batch::{tokenize_all, SourceFile};
pub use config::TokenizerConfig;
pub use error::TokenizeError;
pub use tokenizer::{tokenize, tokenize_with, TokenizedFile, Tokenizer, TokenizerSummary};

pub use polylex_diagnostic::{
    Diagnostic, DiagnosticKind, ErrorCode, MalformedInput, Severity, StructureError,
};
pub use polylex_ir::{
    CommentKind, FrameKind, LineCol, LiteralKind, NestingFrame, NestingRegion, SourceSpan, Span,
    Token, TokenKind,
};
pub use polylex_lexer_core::MAX_SOURCE_LEN;
pub use polylex_rules::{
    global, init_global, LanguageRules, LanguageRulesBuilder, QuoteRule, Registry, RegistryError,
    RulesError, UnknownLanguageError, BUILTIN_LANGUAGES,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or another global subscriber is
/// already installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Err only means a subscriber is already set.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
