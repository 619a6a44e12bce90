use crate::{
    ast::BinaryOperator,
    translator::simulator::{core::Environment, value::SimValue},
    util::{num::parse_decimal, text::unquote},
};

impl Environment {
    /// Evaluates the right-hand side of an assignment line.
    ///
    /// Parentheses are removed first. If the text then contains an operator,
    /// the first one found in the order `+`, `-`, `*`, `/` is applied to the
    /// first two operands around it (see [`Self::apply`]). Otherwise the text
    /// is a literal: a decimal number, a quoted string (quotes removed), or
    /// raw text kept as written.
    ///
    /// Only one operator is ever resolved, so `((a + b) * c)` evaluates as
    /// `a + b` with the right operand `b * c` unresolved.
    ///
    /// # Example
    /// ```
    /// use ebpl::translator::simulator::{Environment, value::SimValue};
    ///
    /// let mut env = Environment::new();
    /// env.assign("a", SimValue::Number(10.0));
    ///
    /// assert_eq!(env.evaluate("(a + 5)"), SimValue::Number(15.0));
    /// assert_eq!(env.evaluate("\"hi\""), SimValue::Text("hi".into()));
    /// ```
    #[must_use]
    pub fn evaluate(&self, expr: &str) -> SimValue {
        let expr = strip_parens(expr);
        match find_operator(&expr) {
            Some(op) => self.apply(op, &expr),
            None => literal(expr.trim()),
        }
    }

    /// Applies `op` to the first two `op`-separated operands of `expr`.
    ///
    /// Each operand is a decimal number if it parses as one, else the value
    /// of the variable it names, else the operator's default for that side
    /// (see [`operand_defaults`]). Division by zero yields `0`.
    #[must_use]
    pub fn apply(&self, op: BinaryOperator, expr: &str) -> SimValue {
        let (left_default, right_default) = operand_defaults(op);
        let mut operands = expr.split(op.symbol()).map(str::trim);

        let left = self.resolve_operand(operands.next().unwrap_or_default(), left_default);
        let right = self.resolve_operand(operands.next().unwrap_or_default(), right_default);

        combine(op, &left, &right)
    }

    fn resolve_operand(&self, operand: &str, default: f64) -> SimValue {
        parse_decimal(operand).map(SimValue::Number)
                              .or_else(|| self.get(operand).cloned())
                              .unwrap_or(SimValue::Number(default))
    }
}

/// Defaults for unresolvable `(left, right)` operands.
///
/// Additive operators fall back to `0`, multiplication to `1` on both
/// sides, and division to `0` over `1`.
#[must_use]
pub const fn operand_defaults(op: BinaryOperator) -> (f64, f64) {
    match op {
        BinaryOperator::Add | BinaryOperator::Sub => (0.0, 0.0),
        BinaryOperator::Mul => (1.0, 1.0),
        BinaryOperator::Div => (0.0, 1.0),
    }
}

/// The first operator present in `text`, tried as `+`, `-`, `*`, `/`.
#[must_use]
pub fn find_operator(text: &str) -> Option<BinaryOperator> {
    BinaryOperator::ALL.into_iter().find(|op| text.contains(op.symbol()))
}

/// Removes every `(` and `)` from `text`.
#[must_use]
pub fn strip_parens(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Combines two resolved operands.
///
/// Numbers combine arithmetically. With a text operand, `+` concatenates
/// the rendered operands and every other operator yields `NaN`.
#[must_use]
pub fn combine(op: BinaryOperator, left: &SimValue, right: &SimValue) -> SimValue {
    let (Some(l), Some(r)) = (left.as_number(), right.as_number()) else {
        return match op {
            BinaryOperator::Add => SimValue::Text(format!("{left}{right}")),
            _ => SimValue::Number(f64::NAN),
        };
    };

    SimValue::Number(match op {
                         BinaryOperator::Add => l + r,
                         BinaryOperator::Sub => l - r,
                         BinaryOperator::Mul => l * r,
                         BinaryOperator::Div => {
                             if r == 0.0 {
                                 0.0
                             } else {
                                 l / r
                             }
                         },
                     })
}

/// Interprets operator-free text as a number, a quoted string, or raw text.
#[must_use]
pub fn literal(text: &str) -> SimValue {
    if let Some(n) = parse_decimal(text) {
        SimValue::Number(n)
    } else if let Some(inner) = unquote(text) {
        SimValue::Text(inner.to_string())
    } else {
        SimValue::Text(text.to_string())
    }
}
