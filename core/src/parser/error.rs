use thiserror::Error;

use crate::{arena::ArenaError, syntax::Span};

/// Parser error with the span of the offending token or group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Missing or surplus parenthesis
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// A group needs at least `(`, a head and `)`
    #[error("expression is too short")]
    TooShortExpression,

    /// Maximum nesting depth exceeded
    #[error("expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },

    #[error("out of arena memory: {0}")]
    OutOfMemory(#[from] ArenaError),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}
