use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    error::SyntaxError,
    translator::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, which must be of kind `expected`.
///
/// `line` is the line of the last consumed token and is reported when the
/// stream runs out.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// - `ExpectedToken` naming both kinds if the next token differs.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::translator::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                   expected: TokenKind,
                                                   line: usize)
                                                   -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == expected) {
        Some(token) => Ok(token),
        None => match tokens.peek() {
            Some(token) => Err(SyntaxError::ExpectedToken { expected,
                                                            found: token.kind,
                                                            line: token.line }),
            None => Err(SyntaxError::UnexpectedEndOfInput { line }),
        },
    }
}

/// Maps an operator token kind to its [`BinaryOperator`].
///
/// Returns `None` for every other kind.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_stream_reports_last_consumed_line() {
        let tokens: [Token; 0] = [];
        assert_eq!(expect(&mut tokens.iter().peekable(), TokenKind::With, 3).unwrap_err(),
                   SyntaxError::UnexpectedEndOfInput { line: 3 });
    }

    #[test]
    fn mismatch_reports_found_token_line() {
        let tokens = [Token::new(TokenKind::Value, "value", 5, 1)];
        assert_eq!(expect(&mut tokens.iter().peekable(), TokenKind::With, 4).unwrap_err(),
                   SyntaxError::ExpectedToken { expected: TokenKind::With,
                                                found:    TokenKind::Value,
                                                line:     5, });
    }
}
