use core::fmt;

use crate::{arena::Store, syntax::Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Number(i64),
    /// Symbol text, copied into the arena.
    Symbol(&'a str),
    ParenOpen,
    ParenClose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind<'a>, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokens in input order, stored in the arena.
pub type Tokens<'a> = Store<'a, Token<'a>>;

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::Symbol(text) => write!(f, "symbol `{text}`"),
            TokenKind::ParenOpen => write!(f, "`(`"),
            TokenKind::ParenClose => write!(f, "`)`"),
        }
    }
}
