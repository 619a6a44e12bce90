use std::fmt;

use crate::util::num::format_number;

/// A dynamically typed value produced by the simulator.
#[derive(Debug, Clone, PartialEq)]
pub enum SimValue {
    /// A number.
    Number(f64),
    /// Text: an unquoted string literal or an unrecognised expression kept
    /// as written.
    Text(String),
}

impl SimValue {
    /// Returns the numeric value, or `None` for text.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<f64> for SimValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for SimValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for SimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(text) => f.write_str(text),
        }
    }
}
