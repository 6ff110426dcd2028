//! Configuration options for the engine.

use crate::{arena::ArenaOptions, parser::DEFAULT_MAX_DEPTH, tokenizer::TokenizerOptions};

/// Configuration options for the [`Engine`](super::Engine).
///
/// # Example
///
/// ```
/// use sche_core::api::EngineOptions;
/// use sche_core::arena::{ArenaOptions, Growth};
///
/// let options = EngineOptions {
///     arena: ArenaOptions {
///         initial_capacity: 1 << 16,
///         growth: Growth::Fixed,
///     },
///     max_depth: 64,
///     ..EngineOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Arena created for each [`Engine::eval`](super::Engine::eval) call.
    ///
    /// Default: 4096 bytes, chained growth
    pub arena: ArenaOptions,

    /// Tokenizer knobs (radix prefixes, token limit).
    pub tokenizer: TokenizerOptions,

    /// Maximum nesting depth of groups (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            arena: ArenaOptions::default(),
            tokenizer: TokenizerOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
