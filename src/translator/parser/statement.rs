use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::SyntaxError,
    translator::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, expression::parse_expression, utils::expect},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`CREATE ...`).
/// - a print statement (`PRINT ...`).
///
/// `line` is the line of the last consumed token; it is reported if the
/// stream ends mid-statement.
///
/// # Errors
/// `UnexpectedToken` if the next token starts neither form.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::Create,
                     .. }) => parse_variable_declaration(tokens, line),
        Some(Token { kind: TokenKind::Print,
                     .. }) => parse_print(tokens, line),
        Some(token) => Err(SyntaxError::UnexpectedToken { found: token.kind,
                                                          line:  token.line, }),
        None => Err(SyntaxError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a variable declaration.
///
/// Grammar: `declaration := CREATE VARIABLE IDENTIFIER WITH VALUE expression`
pub fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                          line: usize)
                                          -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, TokenKind::Create, line)?.line;
    expect(tokens, TokenKind::Variable, line)?;
    let name = expect(tokens, TokenKind::Identifier, line)?.text.clone();
    expect(tokens, TokenKind::With, line)?;
    expect(tokens, TokenKind::Value, line)?;
    let value = parse_expression(tokens, line)?;

    Ok(Statement::VariableDeclaration { name, value, line })
}

/// Parses a print statement.
///
/// Grammar: `print := PRINT expression`
pub fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, TokenKind::Print, line)?.line;
    let value = parse_expression(tokens, line)?;

    Ok(Statement::Print { value, line })
}
