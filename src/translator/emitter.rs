use crate::{
    ast::{Expr, Program, Statement},
    util::num::format_number,
};

/// The fixed header that opens every emitted script.
pub const HEADER: [&str; 2] = ["#!/usr/bin/env python3", "# Generated from EBPL"];

/// One level of indentation in emitted text.
pub const INDENT: &str = "    ";

/// Renders a program as target script text.
///
/// The text is the two header lines, a blank separator line, then one line
/// per statement, joined with `\n` and without a trailing newline.
///
/// # Example
/// ```
/// use ebpl::translator::{emitter::emit, lexer::tokenize, parser::parse_program};
///
/// let program = parse_program(&tokenize("create variable x with value 10\nprint x + 5")).unwrap();
/// assert_eq!(emit(&program),
///            "#!/usr/bin/env python3\n# Generated from EBPL\n\nx = 10\nprint((x + 5))");
/// ```
#[must_use]
pub fn emit(program: &Program) -> String {
    HEADER.iter()
          .map(ToString::to_string)
          .chain(std::iter::once(String::new()))
          .chain(program.statements.iter().map(|statement| render_statement(statement, 0)))
          .collect::<Vec<_>>()
          .join("\n")
}

/// Renders one statement at the given nesting depth.
#[must_use]
pub fn render_statement(statement: &Statement, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    match statement {
        Statement::VariableDeclaration { name, value, .. } => {
            format!("{indent}{name} = {}", render_expr(value))
        },
        Statement::Print { value, .. } => format!("{indent}print({})", render_expr(value)),
    }
}

/// Renders an expression. Binary operations are always parenthesised.
#[must_use]
pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Number(value) => format_number(*value),
        Expr::String(text) => format!("\"{text}\""),
        Expr::Identifier(name) => name.clone(),
        Expr::BinaryOp { left, op, right } => {
            format!("({} {op} {})", render_expr(left), render_expr(right))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    #[test]
    fn empty_program_is_header_only() {
        assert_eq!(emit(&Program::default()),
                   "#!/usr/bin/env python3\n# Generated from EBPL\n");
    }

    #[test]
    fn nested_operations_are_fully_parenthesised() {
        let expr = Expr::binary(Expr::binary(ident("a"), BinaryOperator::Add, ident("b")),
                                BinaryOperator::Mul,
                                Expr::Number(2.5));
        assert_eq!(render_expr(&expr), "((a + b) * 2.5)");
    }

    #[test]
    fn strings_keep_quotes() {
        let statement = Statement::Print { value: Expr::String("Hello, EBPL World!".into()),
                                           line:  1, };
        assert_eq!(render_statement(&statement, 0), "print(\"Hello, EBPL World!\")");
    }

    #[test]
    fn depth_indents_with_four_spaces() {
        let statement = Statement::VariableDeclaration { name:  "x".into(),
                                                         value: Expr::Number(-5.0),
                                                         line:  1, };
        assert_eq!(render_statement(&statement, 2), "        x = -5");
    }
}
