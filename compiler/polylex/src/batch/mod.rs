//! Parallel tokenization of many in-memory sources using Rayon.
//!
//! Each file is scanned independently with shared read-only rules, so the
//! batch is embarrassingly parallel. Output order matches input order.

use std::path::{Path, PathBuf};

use polylex_rules::{LanguageRules, Registry, UnknownLanguageError};
use rayon::prelude::*;

use crate::{tokenize_with, TokenizeError, TokenizedFile, TokenizerConfig};

/// One source text to tokenize. The language comes from `language` when
/// set, otherwise from the path's extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub language: Option<String>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve this file's rules in `registry`.
    pub fn rules<'r>(
        &self,
        registry: &'r Registry,
    ) -> Result<&'r LanguageRules, UnknownLanguageError> {
        let rules = match &self.language {
            Some(id) => registry.lookup(id)?,
            None => registry.language_for_path(&self.path)?,
        };
        Ok(rules)
    }
}

/// Tokenize every file. Entry `i` of the result belongs to `files[i]`; a
/// file whose language cannot be resolved, or that is too large, fails
/// only its own entry.
#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn tokenize_all<'a>(
    files: &'a [SourceFile],
    registry: &'a Registry,
    config: &TokenizerConfig,
) -> Vec<Result<TokenizedFile<'a>, TokenizeError>> {
    let tokenize_one = |file: &'a SourceFile| -> Result<TokenizedFile<'a>, TokenizeError> {
        let rules = file.rules(registry)?;
        tokenize_with(&file.text, rules, config)
    };
    if files.len() <= 1 {
        files.iter().map(tokenize_one).collect()
    } else {
        files.par_iter().map(tokenize_one).collect()
    }
}
