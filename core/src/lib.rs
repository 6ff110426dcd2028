//! Core of the `sche` prefix-notation calculator.
//!
//! Source text flows through four stages, each in its own module:
//!
//! 1. [`arena`]: bump allocation for everything the next two stages produce
//! 2. [`tokenizer`]: text to a flat [`tokenizer::Tokens`] sequence
//! 3. [`parser`]: tokens to an arena-indexed [`parser::ExprTree`]
//! 4. [`evaluator`]: tree to an `i64`
//!
//! [`api`] wires them together behind [`api::Engine`] and [`api::eval`].
//!
//! ```
//! assert_eq!(sche_core::api::eval("(+ (- 5 3) 40)").unwrap(), 42);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod arena;
pub mod evaluator;
pub mod parser;
pub mod syntax;
pub mod tokenizer;
