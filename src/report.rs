use serde::Serialize;

use crate::{
    error::{SimulationError, SyntaxError},
    translator::lexer::{Token, TokenKind},
};

/// Width the token kind is padded to in token listings.
pub const KIND_WIDTH: usize = 20;

/// The outcome of one [`crate::compile`] call.
///
/// On success every stage's output is present: the token listing, the
/// emitted text and the output trace (possibly empty). A simulation
/// failure does not fail the compilation; it leaves the trace empty and
/// fills `simulation_error`. On failure only the error fields are set.
///
/// Serializes with camelCase keys and without absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResult {
    pub success:          bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_display:   Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitted_text:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_trace:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message:    Option<String>,
    /// Every fatal error encountered. Parsing stops at the first one, so
    /// this holds at most one entry.
    pub errors:           Vec<String>,
}

impl CompileResult {
    /// Packages the outputs of a compilation that got past the parser.
    #[must_use]
    pub fn success(tokens: &[Token],
                   emitted_text: String,
                   simulation: Result<Vec<String>, SimulationError>)
                   -> Self {
        let (output_trace, simulation_error) = match simulation {
            Ok(lines) => (lines.join("\n"), None),
            Err(e) => (String::new(), Some(format!("Simulation error: {e}"))),
        };

        Self { success:          true,
               tokens_display:   Some(display_tokens(tokens)),
               emitted_text:     Some(emitted_text),
               output_trace:     Some(output_trace),
               simulation_error,
               error_message:    None,
               errors:           Vec::new(), }
    }

    /// Packages a fatal syntax error.
    #[must_use]
    pub fn failure(error: &SyntaxError) -> Self {
        let message = error.to_string();
        Self { success:          false,
               tokens_display:   None,
               emitted_text:     None,
               output_trace:     None,
               simulation_error: None,
               error_message:    Some(message.clone()),
               errors:           vec![message], }
    }
}

/// Formats one token for display:
/// `<KIND padded to 20> -> '<text>' (line <n>)`.
///
/// ```
/// use ebpl::{report::display_token, translator::lexer::{Token, TokenKind}};
///
/// let token = Token::new(TokenKind::Number, "10", 1, 30);
/// assert_eq!(display_token(&token), "NUMBER               -> '10' (line 1)");
/// ```
#[must_use]
pub fn display_token(token: &Token) -> String {
    format!("{:<width$} -> '{}' (line {})",
            token.kind,
            token.text,
            token.line,
            width = KIND_WIDTH)
}

/// Formats every token except `NEWLINE` and `END`.
#[must_use]
pub fn display_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter()
          .filter(|token| !matches!(token.kind, TokenKind::NewLine | TokenKind::End))
          .map(display_token)
          .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_skips_structure_tokens() {
        let tokens = [Token::new(TokenKind::Print, "print", 2, 1),
                      Token::new(TokenKind::String, "hi", 2, 7),
                      Token::new(TokenKind::NewLine, "\n", 2, 11),
                      Token::new(TokenKind::End, "", 3, 1)];
        assert_eq!(display_tokens(&tokens),
                   ["PRINT                -> 'print' (line 2)",
                    "STRING               -> 'hi' (line 2)"]);
    }

    #[test]
    fn failure_carries_single_error() {
        let err = SyntaxError::UnexpectedEndOfInput { line: 1 };
        let result = CompileResult::failure(&err);
        assert!(!result.success);
        assert_eq!(result.errors, [err.to_string()]);
        assert_eq!(result.error_message.as_deref(), Some("Error on line 1: Unexpected end of input."));
    }

    #[test]
    fn simulation_error_leaves_trace_empty() {
        let result = CompileResult::success(&[],
                                            String::new(),
                                            Err(SimulationError::MissingTarget { line: 4 }));
        assert!(result.success);
        assert_eq!(result.output_trace.as_deref(), Some(""));
        assert_eq!(result.simulation_error.as_deref(),
                   Some("Simulation error: line 4: assignment has no target name"));
    }

    #[test]
    fn serializes_camel_case_without_absent_fields() {
        let err = SyntaxError::UnexpectedEndOfInput { line: 1 };
        let json = serde_json::to_value(CompileResult::failure(&err)).unwrap();
        assert_eq!(json,
                   serde_json::json!({
                       "success": false,
                       "errorMessage": "Error on line 1: Unexpected end of input.",
                       "errors": ["Error on line 1: Unexpected end of input."],
                   }));
    }
}
