//! The `sche` evaluation engine.

use super::{EngineOptions, Error};
use crate::{
    String,
    arena::Arena,
    evaluator,
    parser::{self, ExprTree},
    tokenizer::{self, Tokens},
};

/// Runs source text through tokenizer, parser and evaluator.
///
/// The engine only holds options, so it is cheap to create and can be shared
/// between threads. Each [`eval`](Engine::eval) call works in an arena of its
/// own.
///
/// # Example
///
/// ```
/// use sche_core::api::{Engine, EngineOptions};
/// use sche_core::arena::Arena;
/// use sche_core::tokenizer::TokenizerOptions;
///
/// let engine = Engine::new(EngineOptions {
///     tokenizer: TokenizerOptions {
///         radix_prefixes: true,
///         ..TokenizerOptions::default()
///     },
///     ..EngineOptions::default()
/// });
/// assert_eq!(engine.eval("(+ 0x10 010)").unwrap(), 24);
///
/// // Reuse one arena across many expressions.
/// let mut arena = Arena::new();
/// for (source, expected) in [("(* 6 7)", 42), ("(- 0 1)", -1)] {
///     assert_eq!(engine.eval_in(&arena, source).unwrap(), expected);
///     arena.reset();
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Evaluate `source` in a fresh arena, released before returning.
    pub fn eval(&self, source: &str) -> Result<i64, Error> {
        let arena = Arena::with_options(self.options.arena);
        let result = self.eval_in(&arena, source);
        arena.release();
        result
    }

    /// Evaluate `source` using a caller-provided arena.
    ///
    /// Tokens and tree stay in `arena` until it is reset or dropped.
    pub fn eval_in(&self, arena: &Arena, source: &str) -> Result<i64, Error> {
        let tree = self.parse(arena, source)?;
        let value = evaluator::evaluate(&tree)?;
        tracing::debug!(value, used = arena.used(), "evaluated source");
        Ok(value)
    }

    /// Run only the tokenizer.
    pub fn tokenize<'a>(&self, arena: &'a Arena, source: &str) -> Result<Tokens<'a>, Error> {
        Ok(tokenizer::tokenize_with_options(
            arena,
            source,
            &self.options.tokenizer,
        )?)
    }

    /// Run tokenizer and parser, stopping short of evaluation.
    pub fn parse<'a>(&self, arena: &'a Arena, source: &str) -> Result<ExprTree<'a>, Error> {
        let tokens = self.tokenize(arena, source)?;
        Ok(parser::parse_with_max_depth(
            arena,
            &tokens,
            self.options.max_depth,
        )?)
    }
}

/// Evaluate `source` with default options.
///
/// # Example
///
/// ```
/// use sche_core::api::eval;
///
/// assert_eq!(eval("(- 5 4)").unwrap(), 1);
/// assert!(eval("(- 1 2 3)").is_err());
/// ```
pub fn eval(source: &str) -> Result<i64, Error> {
    Engine::default().eval(source)
}

/// Owned-string entry point for hosts that hand over their buffer.
pub fn evaluate_source(source: String) -> Result<i64, Error> {
    eval(&source)
}
