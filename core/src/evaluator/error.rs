//! Evaluation errors.

use thiserror::Error;

use crate::{String, syntax::Span};

/// Evaluation error with the span of the offending node or group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// The head of a group is a number or a nested group.
    #[error("expected a function name at the head of the expression")]
    NameExpected,

    /// An operand is a bare name.
    #[error("expected a number or an expression as operand")]
    OperandTypeExpected,

    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String },

    #[error("`{name}` expects {}, found {found}", arity(.min, .max))]
    WrongArgumentCount {
        name: &'static str,
        min: usize,
        max: Option<usize>,
        found: usize,
    },

    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

fn arity(min: &usize, max: &Option<usize>) -> String {
    let min = *min;
    let plural = |n: usize| if n == 1 { "" } else { "s" };
    match *max {
        Some(max) if max == min => crate::format!("exactly {min} operand{}", plural(min)),
        Some(max) => crate::format!("{min} to {max} operands"),
        None => crate::format!("at least {min} operand{}", plural(min)),
    }
}
