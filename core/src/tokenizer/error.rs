use thiserror::Error;

use crate::{
    String,
    arena::ArenaError,
    syntax::{Location, Span},
};

/// Tokenizer error with the position it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct TokenizeError {
    pub kind: TokenizeErrorKind,
    pub location: Location,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeErrorKind {
    /// Digits followed by something other than a delimiter, e.g. `99c`.
    #[error("names must not begin with digits")]
    InvalidName,

    #[error("integer literal `{text}` does not fit in 64 bits")]
    NumberOutOfRange { text: String },

    #[error("input has more than {max_tokens} tokens")]
    TooManyTokens { max_tokens: usize },

    #[error("out of arena memory: {0}")]
    OutOfMemory(#[from] ArenaError),
}

impl TokenizeError {
    pub fn new(kind: TokenizeErrorKind, location: Location, span: Span) -> Self {
        Self {
            kind,
            location,
            span,
        }
    }
}
