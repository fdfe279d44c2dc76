//! Nesting tracker.
//!
//! A per-file state machine over a stack of [`NestingFrame`]s:
//!
//! - an opening delimiter pushes a frame, its matching closer pops it and
//!   records a [`NestingRegion`]
//! - a closer that does not match the innermost open delimiter is a
//!   mismatched-closer error; the stack is left alone
//! - a closer with nothing open is an unmatched-closer error
//! - an unterminated literal or block comment pushes a frame that never
//!   closes, so the file ends malformed
//!
//! # Generic runs
//!
//! For languages with generics, a `<` right after an identifier or keyword
//! opens a *tentative* frame on a side stack. Names, annotations, `,` `.`
//! `?` `&` `[` `]` `::` and trivia may follow. `>`, `>>` and `>>>` close
//! one, two and three tentative frames; any other token means the `<` was
//! a comparison and every tentative frame is dropped. Tentative frames
//! never touch the main stack and never produce diagnostics.

use polylex_diagnostic::StructureError;
use polylex_ir::{FrameKind, NestingFrame, NestingRegion, SourceSpan, Token, TokenKind};
use polylex_lexer_core::RawTag;
use polylex_rules::LanguageRules;
use smallvec::SmallVec;
use tracing::trace;

/// Tokens that may appear inside a generic argument list besides names.
const GENERIC_INNER_SYMBOLS: &[&str] = &[",", ".", "?", "&", "[", "]", "::"];

/// A structure error raised by one token.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StructureEvent<'a> {
    pub error: StructureError,
    pub at: SourceSpan<'a>,
}

/// Nesting state for one file.
#[derive(Clone, Debug)]
pub struct NestingTracker<'a> {
    stack: SmallVec<[NestingFrame<'a>; 16]>,
    /// Open `<` tokens of the current tentative generic run.
    tentative: SmallVec<[SourceSpan<'a>; 4]>,
    track_generics: bool,
    record_regions: bool,
    regions: Vec<NestingRegion<'a>>,
    last_significant: Option<TokenKind>,
}

impl<'a> NestingTracker<'a> {
    /// Tracker for `rules`. Generic runs are only tracked when both the
    /// language and `track_generics` allow it.
    pub fn new(rules: &LanguageRules, track_generics: bool, record_regions: bool) -> Self {
        NestingTracker {
            stack: SmallVec::new(),
            tentative: SmallVec::new(),
            track_generics: track_generics && rules.has_generics(),
            record_regions,
            regions: Vec::new(),
            last_significant: None,
        }
    }

    /// Feed the next token. Returns the structure error it causes, if any.
    pub fn observe(
        &mut self,
        token: &Token<'a>,
        tag: RawTag,
        rules: &LanguageRules,
    ) -> Option<StructureEvent<'a>> {
        if self.track_generics {
            self.observe_generic(token);
        }
        if !token.is_trivia() {
            self.last_significant = Some(token.kind());
        }

        match tag {
            RawTag::UnterminatedString | RawTag::UnterminatedChar => {
                self.push(FrameKind::StringLiteral, token.span());
                None
            }
            RawTag::UnterminatedBlockComment => {
                self.push(FrameKind::BlockComment, token.span());
                None
            }
            RawTag::String | RawTag::Char => {
                self.record(FrameKind::StringLiteral, token.span(), token.span());
                None
            }
            RawTag::BlockComment => {
                self.record(FrameKind::BlockComment, token.span(), token.span());
                None
            }
            _ if token.kind() == TokenKind::Punctuation => self.delimiter(token, rules),
            _ => None,
        }
    }

    fn delimiter(&mut self, token: &Token<'a>, rules: &LanguageRules) -> Option<StructureEvent<'a>> {
        let &[b] = token.text().as_bytes() else {
            return None;
        };
        if let Some(kind) = rules.opening_delimiter(b) {
            self.push(kind, token.span());
            return None;
        }
        let found = rules.closing_delimiter(b)?;
        let at = token.span();

        // Literal frames never close, so match against the innermost
        // delimiter frame.
        let Some(index) = self.stack.iter().rposition(|f| f.kind.is_delimiter()) else {
            trace!(%found, offset = at.start_offset(), "unmatched closer");
            return Some(StructureEvent {
                error: StructureError::UnmatchedCloser { found },
                at,
            });
        };
        let open = self.stack[index];
        if open.kind != found {
            trace!(expected = %open.kind, %found, offset = at.start_offset(), "mismatched closer");
            return Some(StructureEvent {
                error: StructureError::MismatchedCloser {
                    expected: open.kind,
                    found,
                    opened_at: open.opened_at.span(),
                },
                at,
            });
        }
        self.stack.remove(index);
        self.record(found, open.opened_at, at);
        None
    }

    fn observe_generic(&mut self, token: &Token<'a>) {
        let text = token.text();
        if self.tentative.is_empty() {
            if text == "<" && self.after_name() {
                self.tentative.push(token.span());
            }
            return;
        }

        let closes = match text {
            ">" => 1,
            ">>" => 2,
            ">>>" => 3,
            _ => 0,
        };
        if closes > 0 {
            if closes > self.tentative.len() {
                self.abandon_generics();
                return;
            }
            for _ in 0..closes {
                if let Some(open) = self.tentative.pop() {
                    self.record(FrameKind::Generic, open, token.span());
                }
            }
            return;
        }

        if text == "<" && self.after_name() {
            self.tentative.push(token.span());
            return;
        }
        let allowed = token.is_trivia()
            || matches!(
                token.kind(),
                TokenKind::Identifier | TokenKind::Keyword | TokenKind::Annotation
            )
            || GENERIC_INNER_SYMBOLS.contains(&text);
        if !allowed {
            self.abandon_generics();
        }
    }

    fn after_name(&self) -> bool {
        matches!(
            self.last_significant,
            Some(TokenKind::Identifier | TokenKind::Keyword)
        )
    }

    fn abandon_generics(&mut self) {
        if !self.tentative.is_empty() {
            trace!(frames = self.tentative.len(), "abandoned tentative generic run");
            self.tentative.clear();
        }
    }

    fn push(&mut self, kind: FrameKind, opened_at: SourceSpan<'a>) {
        self.stack.push(NestingFrame::new(kind, opened_at));
    }

    /// Record a balanced region. Its depth counts every frame open around
    /// it, tentative generic frames included.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "nesting depth is bounded by the u32 source length"
    )]
    fn record(&mut self, kind: FrameKind, open: SourceSpan<'a>, close: SourceSpan<'a>) {
        if !self.record_regions {
            return;
        }
        let depth = (self.stack.len() + self.tentative.len()) as u32;
        self.regions.push(NestingRegion {
            kind,
            open,
            close,
            depth,
        });
    }

    /// Frames currently open, innermost last. Tentative generic frames are
    /// not included.
    pub fn open_frames(&self) -> &[NestingFrame<'a>] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Finish the file: balanced regions in closing order, and the frames
    /// still open. Tentative generic frames are dropped.
    pub fn finish(self) -> (Vec<NestingRegion<'a>>, Vec<NestingFrame<'a>>) {
        (self.regions, self.stack.into_vec())
    }
}

#[cfg(test)]
mod tests;
