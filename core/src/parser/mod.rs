mod expr;
pub mod error;
pub mod parser;

// Re-export the parser entry points and tree types for external use
pub use error::{ParseError, ParseErrorKind};
pub use expr::{ExprTree, Node, NodeId, NodeKind, Siblings};
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_with_max_depth};
