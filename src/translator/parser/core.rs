use crate::{
    ast::{Program, Statement},
    error::SyntaxError,
    translator::{
        lexer::{Token, TokenKind},
        parser::statement::parse_statement,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token stream into a [`Program`].
///
/// This is the entry point of the parser.
///
/// Grammar: `program := (statement | NEWLINE)* END`
///
/// Parsing stops at the first `END` token. The first grammar violation
/// aborts parsing; there is no error recovery.
///
/// # Parameters
/// - `tokens`: The token stream, normally produced by
///   [`crate::translator::lexer::tokenize`].
///
/// # Returns
/// The parsed program.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream does not contain an `END` token.
/// - Any error raised while parsing a statement.
///
/// # Example
/// ```
/// use ebpl::translator::{lexer::tokenize, parser::parse_program};
///
/// let program = parse_program(&tokenize("create variable x with value 1\nprint x")).unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// let err = parse_program(&tokenize("print")).unwrap_err();
/// assert_eq!(err.to_string(),
///            "Error on line 1: Unexpected token in expression: NEWLINE.");
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    if !tokens.iter().any(|t| t.kind == TokenKind::End) {
        return Err(SyntaxError::UnexpectedEndOfInput { line: tokens.last().map_or(1, |t| t.line) });
    }

    let mut iter = tokens.iter().peekable();
    let mut statements: Vec<Statement> = Vec::new();
    let mut line = 1;

    while let Some(token) = iter.peek() {
        match token.kind {
            TokenKind::End => break,
            TokenKind::NewLine => {
                line = token.line;
                iter.next();
            },
            _ => {
                let statement = parse_statement(&mut iter, line)?;
                line = statement.line_number();
                statements.push(statement);
            },
        }
    }

    Ok(Program { statements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, Expr};

    fn tok(kind: TokenKind, text: &str, line: usize) -> Token {
        Token::new(kind, text, line, 1)
    }

    #[test]
    fn empty_stream_is_empty_program() {
        let program = parse_program(&[tok(TokenKind::End, "", 1)]).unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn statements_may_share_a_line() {
        let tokens = [tok(TokenKind::Print, "print", 1),
                      tok(TokenKind::Number, "1", 1),
                      tok(TokenKind::Print, "print", 1),
                      tok(TokenKind::Number, "2", 1),
                      tok(TokenKind::NewLine, "\n", 1),
                      tok(TokenKind::End, "", 2)];
        let program = parse_program(&tokens).unwrap();
        assert_eq!(program.statements,
                   [Statement::Print { value: Expr::Number(1.0),
                                       line:  1, },
                    Statement::Print { value: Expr::Number(2.0),
                                       line:  1, }]);
    }

    #[test]
    fn out_of_place_kind_names_kind_and_line() {
        let tokens = [tok(TokenKind::NewLine, "\n", 1),
                      tok(TokenKind::Identifier, "x", 2),
                      tok(TokenKind::NewLine, "\n", 2),
                      tok(TokenKind::End, "", 3)];
        let err = parse_program(&tokens).unwrap_err();
        assert_eq!(err,
                   SyntaxError::UnexpectedToken { found: TokenKind::Identifier,
                                                  line:  2, });
        assert_eq!(err.to_string(), "Error on line 2: Unexpected token: IDENTIFIER.");
    }

    #[test]
    fn missing_end_is_reported() {
        let tokens = [tok(TokenKind::Print, "print", 4), tok(TokenKind::Number, "1", 4)];
        assert_eq!(parse_program(&tokens).unwrap_err(),
                   SyntaxError::UnexpectedEndOfInput { line: 4 });
    }

    #[test]
    fn tokens_after_end_are_ignored() {
        let tokens = [tok(TokenKind::End, "", 1), tok(TokenKind::Plus, "+", 1)];
        assert!(parse_program(&tokens).unwrap().statements.is_empty());
    }

    #[test]
    fn print_of_binary_expression() {
        let tokens = [tok(TokenKind::Print, "print", 1),
                      tok(TokenKind::Identifier, "a", 1),
                      tok(TokenKind::Minus, "-", 1),
                      tok(TokenKind::Number, "3", 1),
                      tok(TokenKind::End, "", 2)];
        let program = parse_program(&tokens).unwrap();
        assert_eq!(program.statements[0],
                   Statement::Print { value: Expr::binary(Expr::Identifier("a".into()),
                                                          BinaryOperator::Sub,
                                                          Expr::Number(3.0)),
                                      line:  1, });
    }
}
