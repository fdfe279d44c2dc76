//! Raw token tags produced by the scanner.

/// What the scanner recognized, before classification.
///
/// Discriminants are grouped by range: trivia `0..`, candidates for
/// classification `16..`, errors `240..`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum RawTag {
    // Trivia
    Whitespace = 0,
    LineComment = 1,
    BlockComment = 2,

    // Candidates: the classifier decides the final kind
    Ident = 16,
    Number = 17,
    String = 18,
    Char = 19,
    Operator = 20,
    Punctuation = 21,
    AnnotationMarker = 22,

    // Malformed input
    InvalidChar = 240,
    InteriorNull = 241,
    UnterminatedString = 242,
    UnterminatedChar = 243,
    UnterminatedBlockComment = 244,
}

impl RawTag {
    /// `true` for whitespace and terminated comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (self as u8) < 16
    }

    /// `true` for tags that mark malformed input.
    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240
    }

    /// `true` for unterminated literals and block comments.
    pub fn is_unterminated(self) -> bool {
        matches!(
            self,
            RawTag::UnterminatedString
                | RawTag::UnterminatedChar
                | RawTag::UnterminatedBlockComment
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            RawTag::Whitespace => "whitespace",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::Ident => "identifier",
            RawTag::Number => "number",
            RawTag::String => "string",
            RawTag::Char => "char",
            RawTag::Operator => "operator",
            RawTag::Punctuation => "punctuation",
            RawTag::AnnotationMarker => "annotation marker",
            RawTag::InvalidChar => "invalid character",
            RawTag::InteriorNull => "interior null",
            RawTag::UnterminatedString => "unterminated string",
            RawTag::UnterminatedChar => "unterminated char",
            RawTag::UnterminatedBlockComment => "unterminated block comment",
        }
    }
}

/// One scanned token: its tag and byte length. The start offset is the
/// sum of the lengths before it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
