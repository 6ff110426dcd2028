//! Lexical scanner for the prefix notation.
//!
//! Turns source text into a flat [`Tokens`] sequence: integers, symbols and
//! parentheses, in input order. Symbol text is copied into the [`Arena`]
//! so the token list does not borrow the input.
//!
//! [`Arena`]: crate::arena::Arena

mod error;
mod scanner;
mod token;

pub use error::{TokenizeError, TokenizeErrorKind};
pub use scanner::{tokenize, tokenize_with_options};
pub use token::{Token, TokenKind, Tokens};

/// Knobs for [`tokenize_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Accept C-style `0x1F` (hex) and `017` (octal) integer literals.
    pub radix_prefixes: bool,
    /// Reject input producing more tokens than this.
    pub max_tokens: Option<usize>,
}
