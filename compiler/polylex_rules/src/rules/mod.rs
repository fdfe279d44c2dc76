//! The immutable per-language rule table and its builder.

use polylex_ir::{FrameKind, LiteralKind};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ByteClass, RulesError};

/// Longest keyword that case-insensitive lookup will fold without
/// allocating. No built-in language comes close.
const FOLD_BUFFER_LEN: usize = 64;

/// Whether a symbol from the operator/punctuation table is an operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Operator,
    Punctuation,
}

/// A quoting delimiter pair.
///
/// Char quotes (`LiteralKind::Char`) only match a single character or one
/// escape sequence between the delimiters. A char quote with an empty
/// closing delimiter (Erlang `$a`, Elixir `?a`) covers exactly one
/// character after the opener.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QuoteRule {
    open: Box<str>,
    close: Box<str>,
    escape: Option<u8>,
    multiline: bool,
    kind: LiteralKind,
}

impl QuoteRule {
    /// Quote with separate opening and closing delimiters, backslash
    /// escapes, not allowed to span lines.
    pub fn new(open: &str, close: &str, kind: LiteralKind) -> Self {
        QuoteRule {
            open: open.into(),
            close: close.into(),
            escape: Some(b'\\'),
            multiline: false,
            kind,
        }
    }

    /// Single-line string quoted by `delimiter` on both ends.
    pub fn string(delimiter: &str) -> Self {
        Self::new(delimiter, delimiter, LiteralKind::String)
    }

    /// String opened by `prefix` plus `delimiter` and closed by `delimiter`
    /// alone (`f"..."`, `#"..."`).
    pub fn prefixed_string(prefix: &str, delimiter: &str) -> Self {
        Self::new(&format!("{prefix}{delimiter}"), delimiter, LiteralKind::String)
    }

    /// Character literal quoted by `delimiter` on both ends.
    pub fn char(delimiter: &str) -> Self {
        Self::new(delimiter, delimiter, LiteralKind::Char)
    }

    /// Character literal written as `prefix` followed by one character.
    pub fn prefixed_char(prefix: &str) -> Self {
        Self::new(prefix, "", LiteralKind::Char)
    }

    /// Allow the literal to span lines.
    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Replace the escape byte (`None` for raw literals).
    #[must_use]
    pub fn escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    #[inline]
    pub fn escape_byte(&self) -> Option<u8> {
        self.escape
    }

    #[inline]
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    #[inline]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    #[inline]
    pub fn is_char(&self) -> bool {
        self.kind == LiteralKind::Char
    }

    /// `true` if `text` is a complete literal under this rule.
    pub fn matches_literal(&self, text: &str) -> bool {
        let Some(body) = text.strip_prefix(&*self.open) else {
            return false;
        };
        if self.close.is_empty() {
            return !body.is_empty();
        }
        body.ends_with(&*self.close) && body.len() >= self.close.len()
    }
}

/// A block comment delimiter pair.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BlockComment {
    open: Box<str>,
    close: Box<str>,
    nests: bool,
}

impl BlockComment {
    pub fn new(open: &str, close: &str, nests: bool) -> Self {
        BlockComment {
            open: open.into(),
            close: close.into(),
            nests,
        }
    }

    #[inline]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[inline]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// `true` if an inner opener starts a nested comment (Haskell, OCaml).
    #[inline]
    pub fn nests(&self) -> bool {
        self.nests
    }
}

/// Lexical rules for one language. Immutable once built.
#[derive(Clone, Debug)]
pub struct LanguageRules {
    id: Box<str>,
    name: Box<str>,
    aliases: Vec<Box<str>>,
    extensions: Vec<Box<str>>,
    ident_start: ByteClass,
    ident_continue: ByteClass,
    keywords: FxHashSet<Box<str>>,
    keywords_case_insensitive: bool,
    max_keyword_len: usize,
    symbols: FxHashMap<Box<[u8]>, SymbolKind>,
    max_symbol_len: usize,
    delimiters: Vec<(u8, u8, FrameKind)>,
    /// Longest opener first.
    line_comments: Vec<Box<str>>,
    /// Longest opener first.
    block_comments: Vec<BlockComment>,
    /// Longest opener first.
    quotes: Vec<QuoteRule>,
    annotation_marker: Option<u8>,
    annotations_at_line_start: bool,
    generics: bool,
}

impl LanguageRules {
    /// Start building rules for the language `id`.
    pub fn builder(id: &str) -> LanguageRulesBuilder {
        LanguageRulesBuilder::new(id)
    }

    /// Lowercase language id, the primary registry key.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[Box<str>] {
        &self.aliases
    }

    /// File extensions without the leading dot.
    pub fn extensions(&self) -> &[Box<str>] {
        &self.extensions
    }

    #[inline]
    pub fn is_ident_start(&self, b: u8) -> bool {
        self.ident_start.contains(b)
    }

    #[inline]
    pub fn is_ident_continue(&self, b: u8) -> bool {
        self.ident_continue.contains(b)
    }

    /// Exact keyword match, folding ASCII case for case-insensitive
    /// languages.
    pub fn is_keyword(&self, text: &str) -> bool {
        if text.is_empty() || text.len() > self.max_keyword_len {
            return false;
        }
        if !self.keywords_case_insensitive {
            return self.keywords.contains(text);
        }
        let mut buf = [0u8; FOLD_BUFFER_LEN];
        let Some(folded) = buf.get_mut(..text.len()) else {
            return false;
        };
        folded.copy_from_slice(text.as_bytes());
        folded.make_ascii_lowercase();
        std::str::from_utf8(folded).is_ok_and(|s| self.keywords.contains(s))
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn has_case_insensitive_keywords(&self) -> bool {
        self.keywords_case_insensitive
    }

    /// Exact lookup in the operator/punctuation table.
    #[inline]
    pub fn symbol_kind(&self, text: &str) -> Option<SymbolKind> {
        self.symbols.get(text.as_bytes()).copied()
    }

    /// Longest symbol that `rest` starts with (maximal munch).
    ///
    /// Returns the symbol's byte length and kind.
    pub fn longest_symbol(&self, rest: &[u8]) -> Option<(usize, SymbolKind)> {
        let longest = self.max_symbol_len.min(rest.len());
        (1..=longest)
            .rev()
            .find_map(|len| self.symbols.get(&rest[..len]).map(|&kind| (len, kind)))
    }

    /// Line comment opener that `rest` starts with, if any.
    pub fn line_comment_at(&self, rest: &[u8]) -> Option<&str> {
        self.line_comments
            .iter()
            .find(|open| rest.starts_with(open.as_bytes()))
            .map(|open| &**open)
    }

    pub fn line_comments(&self) -> &[Box<str>] {
        &self.line_comments
    }

    /// Block comment whose opener `rest` starts with, if any.
    pub fn block_comment_at(&self, rest: &[u8]) -> Option<&BlockComment> {
        self.block_comments
            .iter()
            .find(|c| rest.starts_with(c.open.as_bytes()))
    }

    pub fn block_comments(&self) -> &[BlockComment] {
        &self.block_comments
    }

    /// Quote rule whose opener `rest` starts with, longest opener first.
    pub fn quote_at(&self, rest: &[u8]) -> Option<&QuoteRule> {
        self.quotes
            .iter()
            .find(|q| rest.starts_with(q.open.as_bytes()))
    }

    /// Quote rule under which `text` is a complete literal, if any.
    pub fn quote_for(&self, text: &str) -> Option<&QuoteRule> {
        self.quotes.iter().find(|q| q.matches_literal(text))
    }

    pub fn quotes(&self) -> &[QuoteRule] {
        &self.quotes
    }

    #[inline]
    pub fn annotation_marker(&self) -> Option<u8> {
        self.annotation_marker
    }

    /// `true` if the annotation marker only counts as the first non-blank
    /// byte of a line. Elsewhere it scans as a symbol.
    #[inline]
    pub fn annotations_at_line_start(&self) -> bool {
        self.annotations_at_line_start
    }

    /// `true` if `<...>` after a name can be a generic argument list.
    #[inline]
    pub fn has_generics(&self) -> bool {
        self.generics
    }

    /// Frame opened by `b`, if it is an opening delimiter.
    #[inline]
    pub fn opening_delimiter(&self, b: u8) -> Option<FrameKind> {
        self.delimiters
            .iter()
            .find(|(open, _, _)| *open == b)
            .map(|&(_, _, kind)| kind)
    }

    /// Frame closed by `b`, if it is a closing delimiter.
    #[inline]
    pub fn closing_delimiter(&self, b: u8) -> Option<FrameKind> {
        self.delimiters
            .iter()
            .find(|(_, close, _)| *close == b)
            .map(|&(_, _, kind)| kind)
    }
}

/// Builder for [`LanguageRules`].
///
/// Identifier classes default to ASCII letters and `_` (digits too for
/// continuation), and the delimiters default to `{}`, `()` and `[]`.
#[derive(Clone, Debug)]
pub struct LanguageRulesBuilder {
    id: String,
    name: Option<String>,
    aliases: Vec<Box<str>>,
    extensions: Vec<Box<str>>,
    ident_start: ByteClass,
    ident_continue: ByteClass,
    keywords: Vec<Box<str>>,
    keywords_case_insensitive: bool,
    operators: Vec<Box<str>>,
    punctuation: Vec<Box<str>>,
    delimiters: Vec<(u8, u8, FrameKind)>,
    line_comments: Vec<Box<str>>,
    block_comments: Vec<BlockComment>,
    quotes: Vec<QuoteRule>,
    annotation_marker: Option<u8>,
    annotations_at_line_start: bool,
    generics: bool,
}

impl LanguageRulesBuilder {
    fn new(id: &str) -> Self {
        LanguageRulesBuilder {
            id: id.trim().to_ascii_lowercase(),
            name: None,
            aliases: Vec::new(),
            extensions: Vec::new(),
            ident_start: ByteClass::ident_start(),
            ident_continue: ByteClass::ident_continue(),
            keywords: Vec::new(),
            keywords_case_insensitive: false,
            operators: Vec::new(),
            punctuation: Vec::new(),
            delimiters: vec![
                (b'{', b'}', FrameKind::Brace),
                (b'(', b')', FrameKind::Paren),
                (b'[', b']', FrameKind::Bracket),
            ],
            line_comments: Vec::new(),
            block_comments: Vec::new(),
            quotes: Vec::new(),
            annotation_marker: None,
            annotations_at_line_start: false,
            generics: false,
        }
    }

    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn aliases<'s>(mut self, aliases: impl IntoIterator<Item = &'s str>) -> Self {
        self.aliases
            .extend(aliases.into_iter().map(|a| a.to_ascii_lowercase().into()));
        self
    }

    /// File extensions, with or without the leading dot.
    #[must_use]
    pub fn extensions<'s>(mut self, extensions: impl IntoIterator<Item = &'s str>) -> Self {
        self.extensions.extend(
            extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase().into()),
        );
        self
    }

    /// Extra bytes allowed at the start of an identifier.
    #[must_use]
    pub fn ident_start_also(mut self, bytes: &[u8]) -> Self {
        self.ident_start = self.ident_start.with(bytes);
        self.ident_continue = self.ident_continue.with(bytes);
        self
    }

    /// Extra bytes allowed after the first byte of an identifier.
    #[must_use]
    pub fn ident_continue_also(mut self, bytes: &[u8]) -> Self {
        self.ident_continue = self.ident_continue.with(bytes);
        self
    }

    #[must_use]
    pub fn keywords<'s>(mut self, keywords: impl IntoIterator<Item = &'s str>) -> Self {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Match keywords ignoring ASCII case (Fortran).
    #[must_use]
    pub fn case_insensitive_keywords(mut self) -> Self {
        self.keywords_case_insensitive = true;
        self
    }

    #[must_use]
    pub fn operators<'s>(mut self, operators: impl IntoIterator<Item = &'s str>) -> Self {
        self.operators.extend(operators.into_iter().map(Into::into));
        self
    }

    /// Punctuation other than the bracket delimiters, which are added
    /// automatically.
    #[must_use]
    pub fn punctuation<'s>(mut self, punctuation: impl IntoIterator<Item = &'s str>) -> Self {
        self.punctuation
            .extend(punctuation.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn line_comment(mut self, open: &str) -> Self {
        self.line_comments.push(open.into());
        self
    }

    #[must_use]
    pub fn block_comment(mut self, open: &str, close: &str) -> Self {
        self.block_comments
            .push(BlockComment::new(open, close, false));
        self
    }

    /// Block comment that nests (`{- {- -} -}` is one comment).
    #[must_use]
    pub fn nested_block_comment(mut self, open: &str, close: &str) -> Self {
        self.block_comments.push(BlockComment::new(open, close, true));
        self
    }

    #[must_use]
    pub fn quote(mut self, rule: QuoteRule) -> Self {
        self.quotes.push(rule);
        self
    }

    #[must_use]
    pub fn quotes(mut self, rules: impl IntoIterator<Item = QuoteRule>) -> Self {
        self.quotes.extend(rules);
        self
    }

    #[must_use]
    pub fn annotation_marker(mut self, marker: u8) -> Self {
        self.annotation_marker = Some(marker);
        self
    }

    /// Only treat the annotation marker as one at the start of a line,
    /// after indentation (Python decorators versus `a @ b`).
    #[must_use]
    pub fn annotations_at_line_start(mut self) -> Self {
        self.annotations_at_line_start = true;
        self
    }

    #[must_use]
    pub fn generics(mut self, enabled: bool) -> Self {
        self.generics = enabled;
        self
    }

    /// Validate and freeze the rules.
    pub fn build(self) -> Result<LanguageRules, RulesError> {
        let id = self.id;
        if id.is_empty() {
            return Err(RulesError::EmptyId);
        }
        let empty = |what| RulesError::EmptyDelimiter {
            language: id.clone(),
            what,
        };

        if self.line_comments.iter().any(|c| c.is_empty()) {
            return Err(empty("line comment"));
        }
        if self
            .block_comments
            .iter()
            .any(|c| c.open.is_empty() || c.close.is_empty())
        {
            return Err(empty("block comment"));
        }
        if self
            .quotes
            .iter()
            .any(|q| q.open.is_empty() || (q.close.is_empty() && !q.is_char()))
        {
            return Err(empty("quote"));
        }
        if !self.ident_start.has_ascii_member() {
            return Err(RulesError::NoIdentifierStart {
                language: id.clone(),
            });
        }
        if let Some(marker) = self.annotation_marker {
            if marker.is_ascii_whitespace() || !marker.is_ascii() {
                return Err(RulesError::InvalidAnnotationMarker {
                    language: id.clone(),
                    byte: marker,
                });
            }
        }

        let mut symbols = FxHashMap::default();
        for (list, kind) in [
            (&self.operators, SymbolKind::Operator),
            (&self.punctuation, SymbolKind::Punctuation),
        ] {
            for symbol in list {
                if symbol.is_empty() {
                    return Err(empty("symbol"));
                }
                if !symbol.is_ascii() {
                    return Err(RulesError::NonAsciiSymbol {
                        language: id.clone(),
                        symbol: symbol.to_string(),
                    });
                }
                symbols.insert(Box::<[u8]>::from(symbol.as_bytes()), kind);
            }
        }
        for &(open, close, _) in &self.delimiters {
            symbols.insert(Box::from([open].as_slice()), SymbolKind::Punctuation);
            symbols.insert(Box::from([close].as_slice()), SymbolKind::Punctuation);
        }
        let max_symbol_len = symbols.keys().map(|s| s.len()).max().unwrap_or(0);

        let keywords: FxHashSet<Box<str>> = self
            .keywords
            .into_iter()
            .map(|k| {
                if self.keywords_case_insensitive {
                    k.to_ascii_lowercase().into()
                } else {
                    k
                }
            })
            .collect();
        let max_keyword_len = keywords.iter().map(|k| k.len()).max().unwrap_or(0);

        let mut line_comments = self.line_comments;
        line_comments.sort_by_key(|c| std::cmp::Reverse(c.len()));
        let mut block_comments = self.block_comments;
        block_comments.sort_by_key(|c| std::cmp::Reverse(c.open.len()));
        let mut quotes = self.quotes;
        quotes.sort_by_key(|q| std::cmp::Reverse(q.open.len()));

        Ok(LanguageRules {
            name: self.name.unwrap_or_else(|| id.clone()).into(),
            id: id.into(),
            aliases: self.aliases,
            extensions: self.extensions,
            ident_start: self.ident_start,
            ident_continue: self.ident_continue,
            keywords,
            keywords_case_insensitive: self.keywords_case_insensitive,
            max_keyword_len,
            symbols,
            max_symbol_len,
            delimiters: self.delimiters,
            line_comments,
            block_comments,
            quotes,
            annotation_marker: self.annotation_marker,
            annotations_at_line_start: self.annotations_at_line_start,
            generics: self.generics,
        })
    }
}

#[cfg(test)]
mod tests;
