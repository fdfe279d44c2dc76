//! Numeric literal grammar shared by every built-in language.
//!
//! ```text
//! number  = radix | decimal
//! radix   = "0" ("x" | "X" | "b" | "B" | "o" | "O") word+
//! decimal = (digit (digit | "_")* | "") ["." digit (digit | "_")*]
//!           [("e" | "E") ["+" | "-"] digit+] word*
//! word    = ASCII alphanumeric | "_"
//! ```
//!
//! The grammar is deliberately loose: radix digits are not checked against
//! the radix, and any alphanumeric suffix (`L`, `f32`, `ULL`, `_i64`) is
//! part of the literal. A decimal must start with a digit, or with `.`
//! directly followed by a digit.

/// `true` if a number can start at the front of `rest`.
#[inline]
pub fn starts_number(rest: &[u8]) -> bool {
    match rest {
        [b, ..] if b.is_ascii_digit() => true,
        [b'.', b, ..] => b.is_ascii_digit(),
        _ => false,
    }
}

/// Length of the numeric literal at the front of `rest`, or 0.
pub fn number_len(rest: &[u8]) -> usize {
    if !starts_number(rest) {
        return 0;
    }
    if let [b'0', b'x' | b'X' | b'b' | b'B' | b'o' | b'O', first, ..] = rest {
        if is_word(*first) {
            return 2 + run(&rest[2..], is_word);
        }
    }

    let mut len = run(rest, is_digit_or_separator);
    if let [b'.', b, ..] = &rest[len..] {
        if b.is_ascii_digit() {
            len += 1 + run(&rest[len + 1..], is_digit_or_separator);
        }
    }
    len += exponent_len(&rest[len..]);
    len + run(&rest[len..], is_word)
}

/// `true` if all of `text` is one numeric literal.
pub fn is_number(text: &str) -> bool {
    !text.is_empty() && number_len(text.as_bytes()) == text.len()
}

fn exponent_len(rest: &[u8]) -> usize {
    match rest {
        [b'e' | b'E', b'+' | b'-', d, ..] if d.is_ascii_digit() => {
            2 + run(&rest[2..], |b| b.is_ascii_digit())
        }
        [b'e' | b'E', d, ..] if d.is_ascii_digit() => 1 + run(&rest[1..], |b| b.is_ascii_digit()),
        _ => 0,
    }
}

#[inline]
fn run(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}

#[inline]
fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_digit_or_separator(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_'
}
