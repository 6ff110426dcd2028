//! Public error type for the API.
//!
//! [`Error`] records which stage failed and keeps that stage's error as is,
//! so callers can match on the precise kind.

use core::fmt;

use thiserror::Error;

use crate::{
    String, ToString,
    evaluator::{EvalError, EvalErrorKind},
    parser::{ParseError, ParseErrorKind},
    syntax::Span,
    tokenizer::{TokenizeError, TokenizeErrorKind},
};

/// Pipeline stage an [`Error`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Tokenization,
    Parsing,
    Evaluation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Tokenization => write!(f, "tokenization"),
            Stage::Parsing => write!(f, "parsing"),
            Stage::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Public error type for all `sche` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("tokenization error: {0}")]
    Tokenization(#[from] TokenizeError),

    #[error("parse error: {0}")]
    Parsing(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvalError),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Tokenization(_) => Stage::Tokenization,
            Error::Parsing(_) => Stage::Parsing,
            Error::Evaluation(_) => Stage::Evaluation,
        }
    }

    /// Byte range of the source the error points at.
    pub fn span(&self) -> &Span {
        match self {
            Error::Tokenization(err) => &err.span,
            Error::Parsing(err) => &err.span,
            Error::Evaluation(err) => &err.span,
        }
    }

    /// The lower-level error's message, without the stage prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Tokenization(err) => err.kind.to_string(),
            Error::Parsing(err) => err.kind.to_string(),
            Error::Evaluation(err) => err.kind.to_string(),
        }
    }

    /// Stable code for documentation lookup, e.g. `"E005"`.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Tokenization(err) => match err.kind {
                TokenizeErrorKind::InvalidName => "T001",
                TokenizeErrorKind::NumberOutOfRange { .. } => "T002",
                TokenizeErrorKind::TooManyTokens { .. } => "T003",
                TokenizeErrorKind::OutOfMemory(_) => "T004",
            },
            Error::Parsing(err) => match err.kind {
                ParseErrorKind::UnbalancedParens => "P001",
                ParseErrorKind::TooShortExpression => "P002",
                ParseErrorKind::MaxDepthExceeded { .. } => "P003",
                ParseErrorKind::OutOfMemory(_) => "P004",
            },
            Error::Evaluation(err) => match err.kind {
                EvalErrorKind::NameExpected => "E001",
                EvalErrorKind::OperandTypeExpected => "E002",
                EvalErrorKind::UndefinedFunction { .. } => "E003",
                EvalErrorKind::WrongArgumentCount { .. } => "E004",
                EvalErrorKind::DivisionByZero => "E005",
            },
        }
    }

    /// Optional hint on how to fix the input.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Error::Tokenization(err) => match err.kind {
                TokenizeErrorKind::InvalidName => {
                    Some("separate the number from what follows, or start the name with a non-digit")
                }
                TokenizeErrorKind::NumberOutOfRange { .. } => {
                    Some("integers must lie between -9223372036854775808 and 9223372036854775807")
                }
                TokenizeErrorKind::TooManyTokens { .. } | TokenizeErrorKind::OutOfMemory(_) => {
                    None
                }
            },
            Error::Parsing(err) => match err.kind {
                ParseErrorKind::UnbalancedParens => {
                    Some("the input must be a single parenthesized expression")
                }
                ParseErrorKind::TooShortExpression => {
                    Some("an expression needs a function name, e.g. `(+ 1 2)`")
                }
                ParseErrorKind::MaxDepthExceeded { .. } => {
                    Some("reduce nesting or simplify the expression")
                }
                ParseErrorKind::OutOfMemory(_) => None,
            },
            Error::Evaluation(err) => match err.kind {
                EvalErrorKind::NameExpected | EvalErrorKind::UndefinedFunction { .. } => {
                    Some("available functions are `+`, `-`, `*`, `/` and `%`")
                }
                EvalErrorKind::OperandTypeExpected => Some("there are no variables; use a number"),
                EvalErrorKind::WrongArgumentCount { .. } | EvalErrorKind::DivisionByZero => None,
            },
        }
    }
}
