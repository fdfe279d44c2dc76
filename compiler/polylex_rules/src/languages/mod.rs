//! Built-in rule tables.
//!
//! One module per language, each returning an unvalidated builder. The
//! registry builds them when it is populated.

use crate::LanguageRulesBuilder;

mod c;
mod clojure;
mod elixir;
mod erlang;
mod fortran;
mod haskell;
mod java;
mod javascript;
mod ocaml;
mod python;

/// Ids of the built-in languages, sorted.
pub const BUILTIN_LANGUAGES: &[&str] = &[
    "c",
    "clojure",
    "elixir",
    "erlang",
    "fortran",
    "haskell",
    "java",
    "javascript",
    "ocaml",
    "python",
];

/// Builders for every built-in language, in [`BUILTIN_LANGUAGES`] order.
pub(crate) fn builders() -> [LanguageRulesBuilder; 10] {
    [
        c::rules(),
        clojure::rules(),
        elixir::rules(),
        erlang::rules(),
        fortran::rules(),
        haskell::rules(),
        java::rules(),
        javascript::rules(),
        ocaml::rules(),
        python::rules(),
    ]
}
