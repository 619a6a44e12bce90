//! # ebpl
//!
//! ebpl translates EBPL, a controlled-English teaching language, into a
//! Python-flavoured target script and previews what that script would print.
//!
//! ```text
//! create variable x with value 10      x = 10
//! print x + 5                          print((x + 5))
//! ```
//!
//! Compilation runs four pure stages in order: lexing, parsing, emission
//! and simulation. The first syntax error aborts the pipeline; a simulation
//! error is reported alongside an otherwise successful result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, warn};

use crate::translator::{
    emitter::emit, lexer::tokenize, parser::parse_program, simulator::simulate,
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Program`, `Statement` and `Expr` types built
/// by the parser and consumed by the emitter. The tree is closed: every
/// consumer matches all variants exhaustively.
pub mod ast;
/// Built-in example programs.
///
/// A small catalog of categorised EBPL programs for learners to start from.
pub mod catalog;
/// Provides the error types of the pipeline.
///
/// # Responsibilities
/// - `SyntaxError`: fatal parser failures, with token kinds and line.
/// - `SimulationError`: non-fatal failures of the execution preview.
pub mod error;
/// Packages pipeline outputs for callers.
///
/// Defines [`CompileResult`] and the token listing format.
pub mod report;
/// The translation stages.
///
/// This module ties together lexing, parsing, emission and simulation.
/// Each stage is a pure function of its input and can be used on its own.
///
/// # Responsibilities
/// - Converts source text into tokens and tokens into an AST.
/// - Renders the AST as target script text.
/// - Replays the emitted text to produce an output trace.
pub mod translator;
/// Shared text and number helpers.
pub mod util;

pub use report::CompileResult;

/// Compiles EBPL source text and previews its output.
///
/// Runs the lexer, parser, emitter and simulator in order. Each call owns
/// all of its intermediate data, so concurrent calls do not interact.
///
/// # Returns
/// A [`CompileResult`]. A syntax error yields `success == false` with the
/// error message; otherwise the result carries the token listing, the
/// emitted text and the output trace or a simulation error.
///
/// # Examples
/// ```
/// use ebpl::compile;
///
/// let result = compile("create variable a with value 10\ncreate variable b with value 5\nprint a + b");
/// assert!(result.success);
/// assert_eq!(result.output_trace.as_deref(), Some("15"));
///
/// let result = compile("create variable x");
/// assert!(!result.success);
/// assert_eq!(result.error_message.as_deref(),
///            Some("Error on line 1: Expected WITH, got NEWLINE."));
/// ```
#[must_use]
pub fn compile(source: &str) -> CompileResult {
    let tokens = tokenize(source);
    debug!(tokens = tokens.len(), "lexed source");

    let program = match parse_program(&tokens) {
        Ok(program) => program,
        Err(e) => {
            warn!(line = e.line(), error = %e, "syntax error");
            return CompileResult::failure(&e);
        },
    };
    debug!(statements = program.statements.len(), "parsed program");

    let emitted = emit(&program);
    let simulation = simulate(&emitted);
    match &simulation {
        Ok(trace) => debug!(lines = trace.len(), "simulated output"),
        Err(e) => warn!(error = %e, "simulation failed"),
    }

    CompileResult::success(&tokens, emitted, simulation)
}
