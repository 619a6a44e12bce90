use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::SimulationError,
    translator::simulator::{
        arithmetic::{find_operator, strip_parens},
        value::SimValue,
    },
    util::text::unquote,
};

/// Result type used by the simulator.
pub type SimResult<T> = Result<T, SimulationError>;

/// The variables of a single simulation run.
///
/// An environment is created empty for each run and dropped afterwards.
/// Assignment lines write to it; arithmetic and print lines read it.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, SimValue>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SimValue> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any earlier value.
    pub fn assign(&mut self, name: &str, value: SimValue) {
        trace!(variable = name, %value, "assign");
        self.variables.insert(name.to_string(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Replays one line of emitted text.
    ///
    /// Blank lines and `#` comments are ignored. A line containing `=` is an
    /// assignment: it is split at the first `=` and the trimmed right-hand
    /// side, if non-empty, is evaluated and stored under the trimmed
    /// left-hand side. Independently, a line of the form `print(...)`
    /// produces output (see [`Self::render_print`]).
    ///
    /// # Parameters
    /// - `line`: 1-based line number, used for error reporting.
    /// - `text`: The line as emitted.
    ///
    /// # Returns
    /// The printed text, if the line prints.
    ///
    /// # Errors
    /// `MissingTarget` if an assignment has an empty left-hand side.
    pub fn execute_line(&mut self, line: usize, text: &str) -> SimResult<Option<String>> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        if let Some((name, expr)) = text.split_once('=') {
            let (name, expr) = (name.trim(), expr.trim());
            if !expr.is_empty() {
                if name.is_empty() {
                    return Err(SimulationError::MissingTarget { line });
                }
                let value = self.evaluate(expr);
                self.assign(name, value);
            }
        }

        Ok(text.strip_prefix("print(")
               .and_then(|rest| rest.strip_suffix(')'))
               .map(|content| self.render_print(content.trim())))
    }

    /// Computes the text a `print(...)` line outputs for `content`.
    ///
    /// In order: the value of the variable named exactly `content`; the text
    /// inside a quoted string; the single-operator evaluation of an
    /// arithmetic argument; otherwise `content` as written.
    #[must_use]
    pub fn render_print(&self, content: &str) -> String {
        if let Some(value) = self.get(content) {
            return value.to_string();
        }
        if let Some(inner) = unquote(content) {
            return inner.to_string();
        }
        if find_operator(&strip_parens(content)).is_some() {
            return self.evaluate(content).to_string();
        }
        content.to_string()
    }
}

/// Produces the output trace of emitted text without executing it.
///
/// Each line is replayed in order against a fresh [`Environment`]; every
/// `print(...)` line contributes one entry.
///
/// # Errors
/// Returns the first [`SimulationError`] raised by a line.
///
/// # Example
/// ```
/// use ebpl::translator::simulator::simulate;
///
/// let trace = simulate("a = 10\nb = 5\nprint((a + b))\nprint(\"done\")").unwrap();
/// assert_eq!(trace, ["15", "done"]);
/// ```
pub fn simulate(emitted: &str) -> SimResult<Vec<String>> {
    let mut env = Environment::new();
    let mut output = Vec::new();

    for (index, text) in emitted.lines().enumerate() {
        if let Some(printed) = env.execute_line(index + 1, text)? {
            output.push(printed);
        }
    }
    debug!(variables = env.len(), printed = output.len(), "replayed emitted text");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let trace = simulate("#!/usr/bin/env python3\n# Generated from EBPL\n\nprint(1)").unwrap();
        assert_eq!(trace, ["1"]);
    }

    #[test]
    fn redeclaration_overwrites() {
        let trace = simulate("x = 1\nprint(x)\nx = \"two\"\nprint(x)").unwrap();
        assert_eq!(trace, ["1", "two"]);
    }

    #[test]
    fn environment_counts_distinct_names() {
        let mut env = Environment::new();
        for line in ["a = 1", "b = 2", "a = 3", "print(a)"] {
            env.execute_line(1, line).unwrap();
        }
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("a"), Some(&SimValue::Number(3.0)));
    }

    #[test]
    fn unknown_print_argument_is_echoed() {
        assert_eq!(simulate("print(y)").unwrap(), ["y"]);
    }

    #[test]
    fn print_needs_closing_paren() {
        assert!(simulate("print(x").unwrap().is_empty());
    }

    #[test]
    fn assignment_splits_at_first_equals() {
        let mut env = Environment::new();
        env.execute_line(1, "s = \"a=b\"").unwrap();
        assert_eq!(env.get("s"), Some(&SimValue::Text("a=b".into())));
    }

    #[test]
    fn empty_right_hand_side_is_ignored() {
        let mut env = Environment::new();
        assert_eq!(env.execute_line(1, "x =").unwrap(), None);
        assert!(env.is_empty());
    }

    #[test]
    fn missing_target_is_an_error() {
        assert_eq!(simulate("x = 1\n= 2"), Err(SimulationError::MissingTarget { line: 2 }));
    }

    #[test]
    fn print_of_quoted_equals_still_prints() {
        assert_eq!(simulate("print(\"x = 1\")").unwrap(), ["x = 1"]);
    }

    #[test]
    fn print_of_arithmetic_uses_single_operator_rule() {
        let trace = simulate("a = 2\nb = 3\nc = 4\nprint(((a + b) * c))").unwrap();
        // `+` is tried first; its right operand `b * c` falls back to 0.
        assert_eq!(trace, ["2"]);
    }
}
