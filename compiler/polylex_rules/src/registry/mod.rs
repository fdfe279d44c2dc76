//! Language registry.
//!
//! Maps language ids, aliases, and file extensions to shared
//! [`LanguageRules`]. A process-wide registry holding the built-in
//! languages is available through [`global`]; callers that need custom
//! languages can install their own with [`init_global`] before first use,
//! or keep a private [`Registry`].

use std::path::Path;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use tracing::{debug, error};

use crate::languages;
use crate::{LanguageRules, RegistryError, UnknownLanguageError};

/// Process-wide registry, built on first use.
static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Registry of language rules keyed by lowercase id.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    languages: FxHashMap<Box<str>, Arc<LanguageRules>>,
    /// Alias to language id.
    aliases: FxHashMap<Box<str>, Box<str>>,
    /// Extension (no dot, lowercase) to language id.
    extensions: FxHashMap<Box<str>, Box<str>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in language.
    ///
    /// A built-in that fails validation is logged and skipped.
    pub fn with_builtin_languages() -> Self {
        let mut registry = Registry::new();
        for builder in languages::builders() {
            match builder.build() {
                Ok(rules) => {
                    registry.register(rules);
                }
                Err(err) => error!(%err, "built-in language rules rejected"),
            }
        }
        debug!(languages = registry.len(), "registered built-in languages");
        registry
    }

    /// Register `rules` under its id, aliases, and extensions.
    ///
    /// Replaces and returns any rules previously registered under the
    /// same id. Aliases and extensions are taken over by the newest
    /// registration.
    pub fn register(&mut self, rules: LanguageRules) -> Option<Arc<LanguageRules>> {
        let id: Box<str> = rules.id().into();
        for alias in rules.aliases() {
            self.aliases.insert(alias.clone(), id.clone());
        }
        for ext in rules.extensions() {
            self.extensions.insert(ext.clone(), id.clone());
        }
        let previous = self.languages.insert(id, Arc::new(rules));
        if let Some(previous) = &previous {
            debug!(language = previous.id(), "replaced language rules");
        }
        previous
    }

    /// Rules for a language id or alias, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn lookup(&self, id: &str) -> Result<&Arc<LanguageRules>, UnknownLanguageError> {
        let key = id.trim().to_ascii_lowercase();
        let resolved = self
            .aliases
            .get(key.as_str())
            .map_or(key.as_str(), |id| &**id);
        self.languages
            .get(key.as_str())
            .or_else(|| self.languages.get(resolved))
            .ok_or_else(|| UnknownLanguageError::new(id))
    }

    /// Rules for a file extension, with or without the leading dot.
    pub fn lookup_extension(&self, ext: &str) -> Result<&Arc<LanguageRules>, UnknownLanguageError> {
        let key = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        self.extensions
            .get(key.as_str())
            .and_then(|id| self.languages.get(id))
            .ok_or_else(|| UnknownLanguageError::new(ext))
    }

    /// Rules for a path, chosen by its extension.
    pub fn language_for_path(
        &self,
        path: &Path,
    ) -> Result<&Arc<LanguageRules>, UnknownLanguageError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.lookup_extension(ext),
            None => Err(UnknownLanguageError::new(path.display().to_string())),
        }
    }

    /// `true` if `id` resolves as a language id or alias.
    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }

    /// Registered language ids, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.languages.keys().map(|id| &**id).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// The process-wide registry.
///
/// Holds the built-in languages unless [`init_global`] installed a
/// different registry first.
pub fn global() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(Registry::with_builtin_languages)
}

/// Install `registry` as the process-wide registry.
///
/// Fails if [`global`] was already called or a registry was already
/// installed.
#[tracing::instrument(level = "debug", skip_all, fields(languages = registry.len()))]
pub fn init_global(registry: Registry) -> Result<(), RegistryError> {
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInitialized)
}
