//! Tree-walking evaluator for parsed expressions.
//!
//! Every group is a function application: the head must be a name found in
//! the fixed [`FUNCTIONS`] table, and the remaining elements are its operands.
//! Operands are evaluated left to right, nested groups recursively, and then
//! folded by the function.
//!
//! ## Design Principles
//!
//! - **Never panic**: integer arithmetic wraps, division checks its divisor
//! - **Read-only**: the tree is only borrowed, never modified
//! - **No allocation in the arena**: operands live in a small stack buffer
//!
//! ## Example
//!
//! ```
//! use sche_core::{arena::Arena, evaluator::evaluate, parser::parse, tokenizer::tokenize};
//!
//! let arena = Arena::new();
//! let tokens = tokenize(&arena, "(* 6 (+ 3 4))").unwrap();
//! let tree = parse(&arena, &tokens).unwrap();
//! assert_eq!(evaluate(&tree).unwrap(), 42);
//! ```

mod error;
mod eval;
mod functions;


pub use error::{EvalError, EvalErrorKind};
pub use eval::{evaluate, evaluate_group};
pub use functions::{FUNCTIONS, Function, lookup};
