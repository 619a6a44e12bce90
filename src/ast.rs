/// A complete EBPL program: the statements of a source text in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// A single EBPL statement.
///
/// The language has exactly two statement shapes and no nesting, so every
/// statement sits at the top level of its [`Program`].
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `create variable <name> with value <expr>`
    VariableDeclaration {
        /// Name of the declared variable.
        name:  String,
        /// Initial value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print <expr>`
    Print {
        /// The expression whose value is printed.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. } | Self::Print { line, .. } => *line,
        }
    }
}

/// An expression tree.
///
/// Operands are owned by their parent node. Binary operations are built once
/// by the parser, strictly left-associatively, and never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `10` or `2.5`.
    Number(f64),
    /// A double-quoted string literal, stored without its quotes.
    String(String),
    /// Reference to a variable by name.
    Identifier(String),
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::BinaryOp`] node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// The four arithmetic operators of the language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// All operators in the order the simulator tries them.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// The operator's source and target spelling.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
