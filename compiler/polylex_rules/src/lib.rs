//! Language rule tables and the registry that hands them out.
//!
//! A [`LanguageRules`] value describes everything the scanner and classifier
//! need to know about one language: identifier byte classes, keywords,
//! operators and punctuation, comment and quote delimiters, the annotation
//! marker, and whether `<...>` can be a generic argument list. Rules are
//! built once, validated, and never mutated afterwards, so a single
//! `Arc<LanguageRules>` can be read by any number of concurrent scans.
//!
//! The [`Registry`] maps language ids, aliases and file extensions to rules.
//! [`global()`] returns a process-wide registry of the built-in languages
//! unless one was installed first with [`init_global()`].

mod byte_class;
mod error;
mod languages;
mod registry;
mod rules;

pub use byte_class::ByteClass;
pub use error::{RegistryError, RulesError, UnknownLanguageError};
pub use languages::BUILTIN_LANGUAGES;
pub use registry::{global, init_global, Registry};
pub use rules::{BlockComment, LanguageRules, LanguageRulesBuilder, QuoteRule, SymbolKind};
