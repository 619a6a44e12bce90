use thiserror::Error;

/// Represents the failures the execution simulator can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// An assignment line with nothing left of the `=`.
    #[error("line {line}: assignment has no target name")]
    MissingTarget {
        /// Line of the emitted text (1-based).
        line: usize,
    },
}
