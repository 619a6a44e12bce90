use thiserror::Error;

use crate::translator::lexer::TokenKind;

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A token that cannot begin a statement was found at statement start.
    #[error("Error on line {line}: Unexpected token: {found}.")]
    UnexpectedToken {
        /// The kind of the offending token.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token kind was required but another was found.
    #[error("Error on line {line}: Expected {expected}, got {found}.")]
    ExpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that is not a number, string or identifier was found where an
    /// operand was required.
    #[error("Error on line {line}: Unexpected token in expression: {found}.")]
    UnexpectedInExpression {
        /// The kind of the offending token.
        found: TokenKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `NUMBER` token whose text is not a decimal number.
    #[error("Error on line {line}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The token stream ended without an `END` token.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The line of the last token seen.
        line: usize,
    },
}

impl SyntaxError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedInExpression { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_kinds_and_line() {
        let err = SyntaxError::ExpectedToken { expected: TokenKind::With,
                                               found:    TokenKind::NewLine,
                                               line:     3, };
        assert_eq!(err.to_string(), "Error on line 3: Expected WITH, got NEWLINE.");
        assert_eq!(err.line(), 3);

        let err = SyntaxError::UnexpectedToken { found: TokenKind::Identifier,
                                                 line:  1, };
        assert_eq!(err.to_string(), "Error on line 1: Unexpected token: IDENTIFIER.");
    }
}
