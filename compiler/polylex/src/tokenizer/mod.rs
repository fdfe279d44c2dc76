//! Tokenizer pipeline: scan, classify, track nesting.
//!
//! [`Tokenizer`] is the lazy form: an iterator of [`Token`]s that runs the
//! nesting tracker and collects diagnostics as it goes. Dropping it early
//! abandons the scan. [`tokenize`] and [`tokenize_with`] drive it to the
//! end and return a [`TokenizedFile`].

use polylex_diagnostic::{Diagnostic, DiagnosticQueue, MalformedInput};
use polylex_ir::{NestingFrame, NestingRegion, SourceSpan, Span, Token};
use polylex_lexer_core::{
    scan, EncodingIssue, EncodingIssueKind, LineCounter, RawScanner, RawTag, SourceBuffer,
};
use polylex_rules::{global, LanguageRules};
use tracing::debug;

use crate::classify::classify;
use crate::error::{check_source_len, TokenizeError};
use crate::nesting::NestingTracker;
use crate::TokenizerConfig;

/// Lazy token stream over one source text.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    rules: &'a LanguageRules,
    scanner: RawScanner<'a>,
    lines: LineCounter,
    /// Byte offset of the next token.
    offset: u32,
    previous: Option<Token<'a>>,
    nesting: NestingTracker<'a>,
    diagnostics: DiagnosticQueue,
    /// Set once any error-severity diagnostic is raised, stored or not.
    saw_error: bool,
    emitted: usize,
}

impl<'a> Tokenizer<'a> {
    /// Fails only when `source` is longer than
    /// [`MAX_SOURCE_LEN`](polylex_lexer_core::MAX_SOURCE_LEN).
    pub fn new(
        source: &'a str,
        rules: &'a LanguageRules,
        config: &TokenizerConfig,
    ) -> Result<Self, TokenizeError> {
        check_source_len(source.len())?;
        let buffer = SourceBuffer::new(source);
        let mut tokenizer = Tokenizer {
            source,
            rules,
            scanner: scan(&buffer, rules),
            lines: LineCounter::new(),
            offset: 0,
            previous: None,
            nesting: NestingTracker::new(rules, config.track_generics, config.record_regions),
            diagnostics: DiagnosticQueue::with_config(config.diagnostic_config()),
            saw_error: false,
            emitted: 0,
        };
        tokenizer.report_encoding_issues(buffer.encoding_issues());
        Ok(tokenizer)
    }

    /// Language id of the rules in use.
    pub fn language(&self) -> &'a str {
        self.rules.id()
    }

    /// Byte offset where the next token starts.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Nesting depth at the current position.
    pub fn depth(&self) -> usize {
        self.nesting.depth()
    }

    /// Drain the remaining tokens and return everything the scan found
    /// besides the tokens themselves.
    pub fn finish(mut self) -> TokenizerSummary<'a> {
        for _ in self.by_ref() {}
        let diagnostics = self.diagnostics.flush();
        let suppressed = self.diagnostics.suppressed();
        let (regions, unclosed) = self.nesting.finish();
        debug!(
            language = self.rules.id(),
            tokens = self.emitted,
            diagnostics = diagnostics.len(),
            suppressed,
            unclosed = unclosed.len(),
            "tokenized"
        );
        TokenizerSummary {
            malformed: self.saw_error || !unclosed.is_empty(),
            diagnostics,
            suppressed,
            regions,
            unclosed,
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.saw_error |= diagnostic.is_error();
        self.diagnostics.push(diagnostic);
    }

    fn report_encoding_issues(&mut self, issues: &[EncodingIssue]) {
        let mut lines = LineCounter::new();
        let mut at = 0usize;
        for issue in issues {
            let pos = issue.pos as usize;
            let position = match self.source.get(at..pos) {
                Some(text) => lines.advance(text),
                None => lines.position(),
            };
            at = pos;
            let kind = match issue.kind {
                EncodingIssueKind::InteriorNull => MalformedInput::InteriorNull,
                EncodingIssueKind::StrayBom => MalformedInput::StrayByteOrderMark,
            };
            self.report(Diagnostic::malformed(
                kind,
                Span::new(issue.pos, issue.pos.saturating_add(issue.len)),
                position,
            ));
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let raw = self.scanner.next_token()?;
        let start = self.offset;
        let end = start + raw.len;
        self.offset = end;

        let text = &self.source[start as usize..end as usize];
        let start_pos = self.lines.position();
        let end_pos = self.lines.advance(text);
        let span = SourceSpan::new(self.source, Span::new(start, end), start_pos, end_pos);

        let kind = classify(&span, raw.tag, self.previous.as_ref(), self.rules);
        let token = Token::new(span, kind, Some(self.rules.id()));

        if let Some(malformed) = malformed_input(raw.tag, text) {
            self.report(Diagnostic::malformed(malformed, span.span(), start_pos));
        }
        if let Some(event) = self.nesting.observe(&token, raw.tag, self.rules) {
            self.report(Diagnostic::structure(
                event.error,
                event.at.span(),
                event.at.start(),
            ));
        }

        self.previous = Some(token);
        self.emitted += 1;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Diagnostic payload for a malformed raw token. Interior NUL bytes are
/// reported once, from the source buffer, so their tokens raise nothing
/// here.
fn malformed_input(tag: RawTag, text: &str) -> Option<MalformedInput> {
    match tag {
        RawTag::UnterminatedString => Some(MalformedInput::UnterminatedString),
        RawTag::UnterminatedChar => Some(MalformedInput::UnterminatedChar),
        RawTag::UnterminatedBlockComment => Some(MalformedInput::UnterminatedBlockComment),
        RawTag::InvalidChar => text
            .chars()
            .next()
            .map(|ch| MalformedInput::UnexpectedCharacter { ch }),
        _ => None,
    }
}

/// Everything a finished [`Tokenizer`] reports besides its tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizerSummary<'a> {
    /// Diagnostics sorted by position.
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics dropped by the configured limit.
    pub suppressed: usize,
    /// Balanced regions in closing order.
    pub regions: Vec<NestingRegion<'a>>,
    /// Frames still open at end of input.
    pub unclosed: Vec<NestingFrame<'a>>,
    malformed: bool,
}

impl TokenizerSummary<'_> {
    /// `true` if a frame was left open or any error was raised, including
    /// errors dropped by the diagnostic limit.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }
}

/// A fully tokenized source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizedFile<'a> {
    language: &'a str,
    tokens: Vec<Token<'a>>,
    summary: TokenizerSummary<'a>,
}

impl<'a> TokenizedFile<'a> {
    pub fn language(&self) -> &'a str {
        self.language
    }

    /// Every token, in source order. Together they cover the whole text.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }

    /// Tokens other than whitespace and comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'a>> + '_ {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.summary.diagnostics
    }

    pub fn suppressed(&self) -> usize {
        self.summary.suppressed
    }

    pub fn regions(&self) -> &[NestingRegion<'a>] {
        &self.summary.regions
    }

    pub fn unclosed(&self) -> &[NestingFrame<'a>] {
        &self.summary.unclosed
    }

    /// `true` if any stored diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.summary.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// See [`TokenizerSummary::is_malformed`].
    pub fn is_malformed(&self) -> bool {
        self.summary.is_malformed()
    }
}

/// Tokenize `source` with the globally registered rules for `language`.
///
/// Fails when `language` is not registered or `source` is longer than
/// [`MAX_SOURCE_LEN`](polylex_lexer_core::MAX_SOURCE_LEN). Malformed text
/// never fails; it shows up in the diagnostics.
pub fn tokenize<'a>(source: &'a str, language: &str) -> Result<TokenizedFile<'a>, TokenizeError> {
    let rules = global().lookup(language)?;
    tokenize_with(source, rules, &TokenizerConfig::default())
}

/// Tokenize `source` with explicit rules and configuration. Fails only on
/// an oversized source.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(language = rules.id(), bytes = source.len())
)]
pub fn tokenize_with<'a>(
    source: &'a str,
    rules: &'a LanguageRules,
    config: &TokenizerConfig,
) -> Result<TokenizedFile<'a>, TokenizeError> {
    let mut tokenizer = Tokenizer::new(source, rules, config)?;
    let tokens: Vec<Token<'a>> = tokenizer.by_ref().collect();
    Ok(TokenizedFile {
        language: rules.id(),
        tokens,
        summary: tokenizer.finish(),
    })
}
