/// The lexer module turns EBPL source text into tokens.
///
/// The lexer reads the source line by line and recognises the two statement
/// shapes of the language by their keyword pairs. Everything else on a line
/// is skipped. Value and print text is classified as a string, a number or
/// a small arithmetic expression.
///
/// # Responsibilities
/// - Produces an owned token sequence with kind, text, line and column.
/// - Terminates every non-blank line with `NEWLINE` and the stream with
///   `END`.
/// - Never fails.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over a fixed grammar. Arithmetic is strictly
/// left-associative with no operator precedence.
///
/// # Responsibilities
/// - Converts tokens into a [`crate::ast::Program`].
/// - Reports the first grammar violation as a
///   [`crate::error::SyntaxError`], without recovery.
pub mod parser;
/// The emitter module renders a program as target script text.
///
/// Each statement becomes one line after a fixed header. Binary operations
/// are fully parenthesised so the parser's grouping is visible.
pub mod emitter;
/// The simulator module previews what the emitted script would print.
///
/// The simulator never looks at the AST. It re-reads emitted text with its
/// own simplified rules, which resolve at most one operator per line.
///
/// # Responsibilities
/// - Maintains a per-run variable environment.
/// - Produces the output trace, one entry per print line.
pub mod simulator;
