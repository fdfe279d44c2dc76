//! Rules-driven raw scanner producing `(RawTag, len)` pairs.
//!
//! # Dispatch order
//!
//! At each position the scanner tries, in order:
//!
//! 1. whitespace (plus a byte order mark at offset 0)
//! 2. line or block comment, the longer opener winning when both match
//! 3. quoted literal, longest opener first
//! 4. annotation marker directly followed by an identifier start (first
//!    on its line when the language asks for that)
//! 5. number
//! 6. identifier
//! 7. longest operator or punctuation (maximal munch)
//! 8. one invalid character
//!
//! Each step consumes at least one byte, so the scan always terminates,
//! and token boundaries always fall on character boundaries.

use polylex_rules::{BlockComment, LanguageRules, QuoteRule, SymbolKind};

use crate::cursor::{is_whitespace, Cursor};
use crate::source_buffer::UTF8_BOM;
use crate::tag::{RawTag, RawToken};
use crate::{numeric, SourceBuffer};

/// Longest run of hex-ish bytes accepted after an escape in a char literal
/// (`'\u{10FFFF}'`, `'\U0001F600'`).
const MAX_CHAR_ESCAPE_TAIL: usize = 8;

/// Scanner over one source buffer. Produces one token at a time; malformed
/// input is encoded in the tag.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    rules: &'a LanguageRules,
    /// Only whitespace since the last line break.
    line_start: bool,
}

/// Start a fresh scan of `buffer` with `rules`.
pub fn scan<'a>(buffer: &SourceBuffer<'a>, rules: &'a LanguageRules) -> RawScanner<'a> {
    RawScanner::new(buffer.cursor(), rules)
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>, rules: &'a LanguageRules) -> Self {
        RawScanner {
            cursor,
            rules,
            line_start: true,
        }
    }

    /// Byte offset where the next token starts.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token, or `None` at EOF.
    pub fn next_token(&mut self) -> Option<RawToken> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let tag = self.dispatch(start);
        debug_assert!(self.cursor.pos() > start, "scanner made no progress");
        let len = self.cursor.pos() - start;
        if tag == RawTag::Whitespace {
            self.line_start |= memchr::memchr(b'\n', self.cursor.since(start)).is_some();
        } else {
            self.line_start = false;
        }
        Some(RawToken { tag, len })
    }

    fn dispatch(&mut self, start: u32) -> RawTag {
        let rules = self.rules;
        let rest = self.cursor.rest();
        let b = self.cursor.current();

        if is_whitespace(b) || (start == 0 && rest.starts_with(UTF8_BOM)) {
            return self.whitespace();
        }

        match (rules.block_comment_at(rest), rules.line_comment_at(rest)) {
            (Some(block), Some(line)) if block.open().len() >= line.len() => {
                return self.block_comment(block);
            }
            (Some(block), None) => return self.block_comment(block),
            (_, Some(_)) => return self.line_comment(),
            (None, None) => {}
        }

        if let Some(quote) = rules.quote_at(rest) {
            return if quote.is_char() {
                self.char_literal(quote)
            } else {
                self.string(quote)
            };
        }

        if rules.annotation_marker() == Some(b)
            && rules.is_ident_start(self.cursor.peek())
            && (self.line_start || !rules.annotations_at_line_start())
        {
            self.cursor.advance();
            return RawTag::AnnotationMarker;
        }

        if numeric::starts_number(rest) {
            self.cursor.advance_by(numeric::number_len(rest));
            return RawTag::Number;
        }

        if rules.is_ident_start(b) {
            self.cursor.advance();
            self.cursor.eat_while(|b| rules.is_ident_continue(b));
            return RawTag::Ident;
        }

        if let Some((len, kind)) = rules.longest_symbol(rest) {
            self.cursor.advance_by(len);
            return symbol_tag(kind);
        }

        if b == 0 {
            self.cursor.advance();
            return RawTag::InteriorNull;
        }
        self.cursor.advance_char();
        RawTag::InvalidChar
    }

    // ─── Trivia ──────────────────────────────────────────────────────────

    fn whitespace(&mut self) -> RawTag {
        if self.cursor.pos() == 0 && self.cursor.starts_with(UTF8_BOM) {
            self.cursor.advance_by(UTF8_BOM.len());
        }
        self.cursor.eat_whitespace();
        RawTag::Whitespace
    }

    fn line_comment(&mut self) -> RawTag {
        self.cursor.eat_until_newline_or_eof();
        RawTag::LineComment
    }

    /// Block comment through its closer, counting inner openers when the
    /// comment nests.
    fn block_comment(&mut self, comment: &BlockComment) -> RawTag {
        let open = comment.open().as_bytes();
        let close = comment.close().as_bytes();
        self.cursor.advance_by(open.len());
        let mut depth = 1u32;
        loop {
            let Some(close_at) = self.cursor.find(close) else {
                self.cursor.advance_by(self.cursor.rest().len());
                return RawTag::UnterminatedBlockComment;
            };
            let open_at = if comment.nests() {
                self.cursor.find(open).filter(|&at| at < close_at)
            } else {
                None
            };
            if let Some(open_at) = open_at {
                self.cursor.advance_by(open_at + open.len());
                depth += 1;
            } else {
                self.cursor.advance_by(close_at + close.len());
                depth -= 1;
                if depth == 0 {
                    return RawTag::BlockComment;
                }
            }
        }
    }

    // ─── Literals ────────────────────────────────────────────────────────

    fn string(&mut self, quote: &QuoteRule) -> RawTag {
        let close = quote.close().as_bytes();
        let mut needles = Vec::with_capacity(3);
        needles.extend(close.first());
        needles.extend(quote.escape_byte());
        if !quote.is_multiline() {
            needles.push(b'\n');
        }

        self.cursor.advance_by(quote.open().len());
        let body_start = self.cursor.pos();
        loop {
            let Some(found) = self.cursor.skip_to_any(&needles) else {
                return RawTag::UnterminatedString;
            };
            if Some(found) == quote.escape_byte() {
                self.cursor.advance();
                self.cursor.advance_char();
            } else if found == b'\n' && !quote.is_multiline() {
                // The line break, `\r` included, belongs to the next token.
                self.cursor.retreat_over(b'\r', body_start);
                return RawTag::UnterminatedString;
            } else if self.cursor.starts_with(close) {
                self.cursor.advance_by(close.len());
                return RawTag::String;
            } else {
                self.cursor.advance();
            }
        }
    }

    /// Char literal: one character, or an escape plus its tail, then the
    /// closer. A prefixed char (`$a`, `?a`, `\a`) has no closer.
    ///
    /// When the literal does not close, the opener falls back to a symbol
    /// if the language has one spelled that way (OCaml type variables,
    /// Haskell name quotes). Otherwise the literal runs to a closer later
    /// on the same line (`'ab'`), or stops where the body ended, and is
    /// reported as one unterminated char.
    fn char_literal(&mut self, quote: &QuoteRule) -> RawTag {
        let start = self.cursor;
        let close = quote.close().as_bytes();
        self.cursor.advance_by(quote.open().len());

        let body_ok = if close.is_empty() {
            self.prefixed_char_body(quote)
        } else {
            self.quoted_char_body(quote, close)
        };
        if body_ok && close.is_empty() {
            return RawTag::Char;
        }
        if body_ok && self.cursor.starts_with(close) {
            self.cursor.advance_by(close.len());
            return RawTag::Char;
        }

        if let Some((len, kind)) = self.rules.longest_symbol(start.rest()) {
            self.cursor = start;
            self.cursor.advance_by(len);
            return symbol_tag(kind);
        }
        if !close.is_empty() {
            self.eat_to_closer_on_line(quote, close);
        }
        RawTag::UnterminatedChar
    }

    /// Advance past the next unescaped `close` on this line, if there is
    /// one. Leaves the cursor alone otherwise.
    fn eat_to_closer_on_line(&mut self, quote: &QuoteRule, close: &[u8]) {
        let mut ahead = self.cursor;
        while !ahead.is_eof() && ahead.current() != b'\n' {
            if ahead.starts_with(close) {
                ahead.advance_by(close.len());
                self.cursor = ahead;
                return;
            }
            if Some(ahead.current()) == quote.escape_byte() {
                ahead.advance();
                if ahead.current() == b'\n' {
                    return;
                }
            }
            ahead.advance_char();
        }
    }

    fn quoted_char_body(&mut self, quote: &QuoteRule, close: &[u8]) -> bool {
        let b = self.cursor.current();
        if self.cursor.is_eof() || b == b'\n' || self.cursor.starts_with(close) {
            return false;
        }
        if Some(b) == quote.escape_byte() {
            self.cursor.advance();
            if self.cursor.is_eof() {
                return false;
            }
            self.cursor.advance_char();
            let mut tail = 0;
            while tail < MAX_CHAR_ESCAPE_TAIL
                && !self.cursor.starts_with(close)
                && is_escape_tail(self.cursor.current())
            {
                self.cursor.advance();
                tail += 1;
            }
        } else {
            self.cursor.advance_char();
        }
        true
    }

    /// One character after a prefix. A letter may continue into a named
    /// character (`\newline`, `A`).
    fn prefixed_char_body(&mut self, quote: &QuoteRule) -> bool {
        let b = self.cursor.current();
        if self.cursor.is_eof() || is_whitespace(b) {
            return false;
        }
        if Some(b) == quote.escape_byte() && !is_whitespace(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.advance_char();
        } else if b.is_ascii_alphabetic() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
        } else {
            self.cursor.advance_char();
        }
        true
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    #[inline]
    fn next(&mut self) -> Option<RawToken> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for RawScanner<'_> {}

#[inline]
fn symbol_tag(kind: SymbolKind) -> RawTag {
    match kind {
        SymbolKind::Operator => RawTag::Operator,
        SymbolKind::Punctuation => RawTag::Punctuation,
    }
}

#[inline]
fn is_escape_tail(b: u8) -> bool {
    b.is_ascii_hexdigit() || matches!(b, b'u' | b'U' | b'x' | b'X' | b'{' | b'}')
}
