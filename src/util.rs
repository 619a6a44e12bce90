/// Numeric text helpers.
///
/// This module decides which pieces of source or emitted text count as
/// decimal numbers and renders numbers back to text. The lexer, parser,
/// emitter and simulator all share these rules so that a number written by
/// one stage is read the same way by the next.
pub mod num;
/// Quoted string helpers shared by the lexer and the simulator.
pub mod text;
