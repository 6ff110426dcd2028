//! sche - a prefix-notation integer calculator
//!
//! # Overview
//!
//! sche evaluates parenthesized prefix expressions such as `(+ 1 (* 2 3))`
//! over 64-bit integers. It is meant to be embedded as the calculator of a
//! larger host program.
//!
//! The grammar is tiny: an expression is `(` name operand... `)`, where each
//! operand is an integer or another expression. Five functions exist:
//!
//! | name | operands  | result                         |
//! |------|-----------|--------------------------------|
//! | `+`  | 2 or more | sum                            |
//! | `-`  | 2         | difference                     |
//! | `*`  | 2 or more | product                        |
//! | `/`  | 2         | quotient, truncated toward zero |
//! | `%`  | 2         | remainder                      |
//!
//! Arithmetic wraps on overflow.
//!
//! # Quick Start
//!
//! ```
//! use sche::{Engine, EngineOptions, Stage};
//!
//! assert_eq!(sche::eval("(+ (- 5 3) 40)").unwrap(), 42);
//!
//! let engine = Engine::new(EngineOptions::default());
//! let err = engine.eval("(/ 5 0)").unwrap_err();
//! assert_eq!(err.stage(), Stage::Evaluation);
//! ```
//!
//! # Error reports
//!
//! [`render_error`] and friends turn an [`Error`] into a report that quotes
//! the source and marks the offending span.

// Re-export public API from sche_core
pub use sche_core::api::{Engine, EngineOptions, Error, Stage, eval, evaluate_source};

// Re-export the pipeline stages for hosts that drive them directly
pub use sche_core::{arena, evaluator, parser, syntax, tokenizer};

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
