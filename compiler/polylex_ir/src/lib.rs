//! polylex IR - types shared by every stage of the tokenizer.
//!
//! - [`Span`]: compact byte range
//! - [`SourceSpan`]: byte range plus line/column, borrowing the source text
//! - [`Token`] and [`TokenKind`]: classified output of a scan
//! - [`NestingFrame`], [`NestingRegion`]: structural annotations produced
//!   by the nesting tracker
//!
//! Nothing in this crate owns source text. Every borrowed type carries the
//! lifetime of the buffer it was scanned from.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod frame;
mod span;
mod token;

pub use frame::{FrameKind, NestingFrame, NestingRegion};
pub use span::{LineCol, SourceSpan, Span};
pub use token::{CommentKind, LiteralKind, Token, TokenKind};
