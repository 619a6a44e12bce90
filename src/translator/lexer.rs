use std::iter;

use logos::Logos;

use crate::util::{num::is_decimal, text::unquote};

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `create`
    Create,
    /// `variable`
    Variable,
    /// `with`
    With,
    /// `value`
    Value,
    /// `print`
    Print,
    /// Variable names such as `x` or `total`.
    Identifier,
    /// Decimal literals such as `10` or `2.5`.
    Number,
    /// Double-quoted text. The token text excludes the quotes.
    String,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// End of a non-blank source line.
    NewLine,
    /// End of input.
    End,
}

impl TokenKind {
    /// The upper-case name used in token listings and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Variable => "VARIABLE",
            Self::With => "WITH",
            Self::Value => "VALUE",
            Self::Print => "PRINT",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::NewLine => "NEWLINE",
            Self::End => "END",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so that width specifiers such as `{:<20}` apply.
        f.pad(self.name())
    }
}

/// A lexical token with its position in the source.
///
/// Lines and columns are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               column }
    }
}

/// Splits one source line into words separated by Unicode whitespace.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
enum WordToken {
    #[regex(r"\S+")]
    Word,
}

/// Splits value or print text into operands and arithmetic operators.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Fragment {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[regex(r"[^+\-*/]+")]
    Operand,
}

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text:   &'a str,
    column: usize,
}

/// Converts EBPL source text into tokens.
///
/// The source is processed line by line. Only two statement shapes are
/// recognised:
///
/// ```text
///     create variable <name> with value <value text>
///     print <content text>
/// ```
///
/// Any other leading word is skipped without error. Value text runs up to,
/// but not including, the first word starting with `print`, so a declared
/// value can never contain such a word. Every non-blank line ends with a
/// `NEWLINE` token and the stream ends with a single `END` token.
///
/// # Example
/// ```
/// use ebpl::translator::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("print x + 5").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Print,
///             TokenKind::Identifier,
///             TokenKind::Plus,
///             TokenKind::Number,
///             TokenKind::NewLine,
///             TokenKind::End]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let end_line = source.lines().count() + 1;

    source.lines()
          .enumerate()
          .flat_map(|(index, text)| tokenize_line(text, index + 1))
          .chain(iter::once(Token::new(TokenKind::End, "", end_line, 1)))
          .collect()
}

/// Tokenizes a single line. Blank lines produce no tokens at all.
fn tokenize_line(text: &str, line: usize) -> Vec<Token> {
    let words = split_words(text);
    let Some(last) = words.last() else {
        return Vec::new();
    };
    let end_column = last.column + last.text.chars().count();

    let mut tokens = Vec::new();
    let mut rest = words.as_slice();

    while let Some((word, tail)) = rest.split_first() {
        rest = match (word.text, tail) {
            ("create", [next, after @ ..]) if next.text == "variable" => {
                tokens.push(Token::new(TokenKind::Create, word.text, line, word.column));
                tokens.push(Token::new(TokenKind::Variable, next.text, line, next.column));
                declaration(after, line, &mut tokens)
            },
            ("print", _) => {
                tokens.push(Token::new(TokenKind::Print, word.text, line, word.column));
                classify(tail, line, &mut tokens);
                &[]
            },
            _ => tail,
        };
    }

    tokens.push(Token::new(TokenKind::NewLine, "\n", line, end_column));
    tokens
}

/// Tokenizes the remainder of a declaration after `create variable`.
///
/// Returns the words left for the line loop: the words from the first
/// `print`-prefixed word onwards, or everything after the name if
/// `with value` does not follow it.
fn declaration<'w, 'a>(words: &'w [Word<'a>],
                       line: usize,
                       tokens: &mut Vec<Token>)
                       -> &'w [Word<'a>] {
    let Some((name, rest)) = words.split_first() else {
        return words;
    };
    tokens.push(Token::new(TokenKind::Identifier, name.text, line, name.column));

    match rest {
        [with, value, rest @ ..] if with.text == "with" && value.text == "value" => {
            tokens.push(Token::new(TokenKind::With, with.text, line, with.column));
            tokens.push(Token::new(TokenKind::Value, value.text, line, value.column));

            let stop = rest.iter()
                           .position(|w| w.text.starts_with("print"))
                           .unwrap_or(rest.len());
            let (value_words, remaining) = rest.split_at(stop);
            classify(value_words, line, tokens);
            remaining
        },
        _ => rest,
    }
}

/// Classifies value or print text as one `STRING`, one `NUMBER`, or an
/// arithmetic expression.
fn classify(words: &[Word<'_>], line: usize, tokens: &mut Vec<Token>) {
    let Some(first) = words.first() else {
        return;
    };
    let text = words.iter().map(|w| w.text).collect::<Vec<_>>().join(" ");

    if let Some(inner) = unquote(&text) {
        tokens.push(Token::new(TokenKind::String, inner, line, first.column));
    } else if is_decimal(&text) {
        tokens.push(Token::new(TokenKind::Number, text, line, first.column));
    } else {
        tokenize_expression(&text, line, first.column, tokens);
    }
}

/// Splits arithmetic text on `+ - * /`, keeping the operators.
///
/// Operands are trimmed; each becomes a `NUMBER` if it is a decimal number
/// and an `IDENTIFIER` otherwise. Blank operands are dropped.
fn tokenize_expression(text: &str, line: usize, column: usize, tokens: &mut Vec<Token>) {
    for (fragment, span) in Fragment::lexer(text).spanned() {
        let slice = &text[span.clone()];
        let operand = slice.trim();
        if operand.is_empty() {
            continue;
        }
        let leading = slice.len() - slice.trim_start().len();
        let column = column + text[..span.start + leading].chars().count();

        let kind = match fragment {
            Ok(Fragment::Plus) => TokenKind::Plus,
            Ok(Fragment::Minus) => TokenKind::Minus,
            Ok(Fragment::Star) => TokenKind::Multiply,
            Ok(Fragment::Slash) => TokenKind::Divide,
            Ok(Fragment::Operand) | Err(()) if is_decimal(operand) => TokenKind::Number,
            Ok(Fragment::Operand) | Err(()) => TokenKind::Identifier,
        };
        tokens.push(Token::new(kind, operand, line, column));
    }
}

fn split_words(text: &str) -> Vec<Word<'_>> {
    WordToken::lexer(text).spanned()
                          .filter(|(token, _)| token.is_ok())
                          .map(|(_, span)| {
                              let column = text[..span.start].chars().count() + 1;
                              Word { text: &text[span], column }
                          })
                          .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        Token,
        TokenKind::{
            self, Create, Divide, End, Identifier, Minus, Multiply, NewLine, Number, Plus, Print,
            String as Str, Value, Variable, With,
        },
        tokenize,
    };

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn numeric_declaration() {
        assert_eq!(kinds("create variable x with value 10"),
                   [Create, Variable, Identifier, With, Value, Number, NewLine, End]);
        assert_eq!(texts("create variable x with value 10")[5], "10");
    }

    #[test]
    fn string_declaration_strips_quotes() {
        let tokens = tokenize("create variable name with value \"Alice  Smith\"");
        assert_eq!(tokens[5].kind, Str);
        // Words are re-joined with single spaces.
        assert_eq!(tokens[5].text, "Alice Smith");
    }

    #[test]
    fn expression_declaration() {
        assert_eq!(kinds("create variable total with value a+b * 2 / c - 1"),
                   [Create, Variable, Identifier, With, Value, Identifier, Plus, Identifier,
                    Multiply, Number, Divide, Identifier, Minus, Number, NewLine, End]);
    }

    #[test]
    fn negative_number_is_one_literal() {
        let tokens = tokenize("create variable x with value -5");
        assert_eq!(tokens[5].kind, Number);
        assert_eq!(tokens[5].text, "-5");
    }

    #[test]
    fn print_string_and_expression() {
        assert_eq!(kinds("print \"Hello, EBPL World!\""), [Print, Str, NewLine, End]);
        assert_eq!(texts("print \"Hello, EBPL World!\"")[1], "Hello, EBPL World!");
        assert_eq!(kinds("print a + b"), [Print, Identifier, Plus, Identifier, NewLine, End]);
    }

    #[test]
    fn unknown_leading_words_are_skipped() {
        assert_eq!(kinds("please print x"), [Print, Identifier, NewLine, End]);
        assert_eq!(kinds("hello world"), [NewLine, End]);
    }

    #[test]
    fn value_stops_at_print_prefixed_word() {
        assert_eq!(kinds("create variable x with value 5 print x"),
                   [Create, Variable, Identifier, With, Value, Number, Print, Identifier,
                    NewLine, End]);
        // `printer` ends the value but is not itself a keyword.
        assert_eq!(kinds("create variable x with value 5 printer"),
                   [Create, Variable, Identifier, With, Value, Number, NewLine, End]);
    }

    #[test]
    fn declaration_without_value_clause() {
        assert_eq!(kinds("create variable x"), [Create, Variable, Identifier, NewLine, End]);
        assert_eq!(kinds("create variable"), [Create, Variable, NewLine, End]);
        assert_eq!(kinds("create variable x with value"),
                   [Create, Variable, Identifier, With, Value, NewLine, End]);
    }

    #[test]
    fn blank_lines_emit_nothing_but_keep_numbering() {
        let tokens = tokenize("print 1\n\n   \nprint 2\n");
        let lines: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(lines,
                   [(Print, 1), (Number, 1), (NewLine, 1), (Print, 4), (Number, 4), (NewLine, 4),
                    (End, 5)]);
    }

    #[test]
    fn empty_source_is_just_end() {
        assert_eq!(tokenize(""), [Token::new(End, "", 1, 1)]);
    }

    #[test]
    fn columns_point_at_words() {
        let tokens = tokenize("  print  a + 10");
        let columns: Vec<usize> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, [3, 10, 12, 14, 16, 1]);
    }

    #[test]
    fn kind_display_honours_width() {
        assert_eq!(format!("{:<8}|", TokenKind::Plus), "PLUS    |");
    }

    #[test]
    fn any_unicode_whitespace_separates_words() {
        assert_eq!(kinds("print\u{0b}5"), [Print, Number, NewLine, End]);
        assert_eq!(texts("create\u{a0}variable x with value\u{2003}7"),
                   ["create", "variable", "x", "with", "value", "7", "\n", ""]);
    }
}
