//! Identifier mining.
//!
//! Pulls identifier names out of a token stream, splits them into
//! lowercase "soft words" (`parseHTTPResponse2` → `parse`, `http`,
//! `response`, `2`) and accumulates word frequencies across files.

use polylex_ir::{Token, TokenKind};
use rustc_hash::FxHashMap;

/// Texts of the identifier tokens, in source order.
pub fn identifier_names<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Identifier)
        .map(Token::text)
        .collect()
}

/// Split an identifier into lowercase words.
///
/// Surrounding underscores are stripped. Words break at any character
/// that is not alphanumeric (`_`, `-`, `?` ...), at a lower-to-upper case
/// change, before the last capital of an acronym followed by lowercase
/// (`HTTPServer` → `http`, `server`), and between digits and letters.
pub fn split_soft_words(ident: &str) -> Vec<String> {
    let chars: Vec<char> = ident.trim_matches('_').chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }
        // A non-empty word means `i > 0`.
        if !current.is_empty() && is_word_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
            flush(&mut current, &mut words);
        }
        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut words);
    words
}

fn is_word_boundary(prev: char, c: char, next: Option<char>) -> bool {
    (prev.is_lowercase() && c.is_uppercase())
        || (prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase))
        || prev.is_numeric() != c.is_numeric()
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Occurrence counts of soft words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: FxHashMap<String, u64>,
    total: u64,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
        self.total += 1;
    }

    /// Count every soft word of `ident`.
    pub fn add_identifier(&mut self, ident: &str) {
        for word in split_soft_words(ident) {
            self.add_word(&word);
        }
    }

    /// Count the soft words of every identifier token.
    pub fn add_tokens(&mut self, tokens: &[Token<'_>]) {
        for name in identifier_names(tokens) {
            self.add_identifier(name);
        }
    }

    pub fn merge(&mut self, other: &WordFrequencies) {
        for (word, &count) in &other.counts {
            *self.counts.entry(word.clone()).or_insert(0) += count;
        }
        self.total += other.total;
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total words counted, repeats included.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Share of all counted words that were `word`; 0.0 when nothing was
    /// counted.
    #[allow(
        clippy::cast_precision_loss,
        reason = "word counts stay far below 2^52"
    )]
    pub fn probability(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }

    /// Words by descending count, ties broken alphabetically.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// [`ranked`](Self::ranked) words with their probabilities.
    pub fn probabilities(&self) -> Vec<(&str, f64)> {
        self.ranked()
            .into_iter()
            .map(|(word, _)| (word, self.probability(word)))
            .collect()
    }
}

#[cfg(test)]
mod tests;
