use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    translator::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, utils::token_to_binary_operator},
    },
    util::num::parse_decimal,
};

/// Parses an arithmetic expression.
///
/// All four operators share one precedence level and associate to the
/// left, so `a + b * c` parses as `(a + b) * c`.
///
/// Grammar: `expression := primary (("+" | "-" | "*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first operand.
/// - `line`: Line of the last consumed token, reported if the stream ends
///   before an operand.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_primary(tokens, line)?;
    while let Some(op) = tokens.peek().and_then(|token| token_to_binary_operator(token.kind)) {
        let line = tokens.next().map_or(line, |token| token.line);
        let right = parse_primary(tokens, line)?;
        left = Expr::binary(left, op, right);
    }
    Ok(left)
}

/// Parses a primary expression: a number, a string or an identifier.
///
/// # Errors
/// - `UnexpectedInExpression` for any other token kind.
/// - `InvalidNumber` if a `NUMBER` token's text is not a decimal number.
/// - `UnexpectedEndOfInput` on `line` if the stream is exhausted.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek().copied() else {
        return Err(SyntaxError::UnexpectedEndOfInput { line });
    };

    let expr = match token.kind {
        TokenKind::Number => {
            let value = parse_decimal(&token.text).ok_or_else(|| {
                                                      SyntaxError::InvalidNumber { text: token.text.clone(),
                                                                                   line: token.line, }
                                                  })?;
            Expr::Number(value)
        },
        TokenKind::String => Expr::String(token.text.clone()),
        TokenKind::Identifier => Expr::Identifier(token.text.clone()),
        kind => {
            return Err(SyntaxError::UnexpectedInExpression { found: kind,
                                                             line:  token.line, });
        },
    };
    tokens.next();

    Ok(expr)
}
