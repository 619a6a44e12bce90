/// Program-level parsing and the shared result type.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading keyword to variable declarations and print
/// statements.
pub mod statement;

/// Expression parsing.
///
/// Left-associative arithmetic over primaries, without operator precedence.
pub mod expression;

/// Token-matching helpers shared by the other parser modules.
pub mod utils;

pub use self::core::{ParseResult, parse_program};
