/// The simulation loop and its variable environment.
pub mod core;

/// Textual evaluation of right-hand sides and print arguments.
///
/// Resolves at most one operator per expression, probing `+`, `-`, `*`, `/`
/// in that order.
pub mod arithmetic;

/// Values held by the simulation environment.
pub mod value;

pub use self::core::{Environment, SimResult, simulate};
