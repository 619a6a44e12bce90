/// Syntax errors.
///
/// Raised by the parser when the token stream does not match the grammar.
/// A syntax error is always fatal: the first one aborts the compilation.
pub mod syntax_error;
/// Simulation errors.
///
/// Raised while the execution simulator replays emitted text. These never
/// fail a compilation; they are reported next to the emitted text instead of
/// an output trace.
pub mod simulation_error;

pub use simulation_error::SimulationError;
pub use syntax_error::SyntaxError;
