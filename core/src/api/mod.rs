//! Public API for the `sche` calculator.
//!
//! [`Engine`] runs the whole pipeline (tokenize, parse, evaluate) over one
//! source string, and [`eval`] / [`evaluate_source`] do the same with default
//! options.
//!
//! # Example
//!
//! ```
//! use sche_core::api::{Engine, EngineOptions, Error, Stage};
//!
//! let engine = Engine::new(EngineOptions::default());
//! assert_eq!(engine.eval("(% 17 5)").unwrap(), 2);
//!
//! let err = engine.eval("(/ 1 0)").unwrap_err();
//! assert_eq!(err.stage(), Stage::Evaluation);
//! assert!(matches!(err, Error::Evaluation(_)));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::{Engine, eval, evaluate_source};
pub use error::{Error, Stage};
pub use options::EngineOptions;
