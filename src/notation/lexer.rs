use log::debug;
use logos::Logos;
use serde::{Serialize, Serializer};

use crate::{ast::BinaryOperator, error::LexError};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// A token paired with the zero-based character offset it starts at.
pub type Spanned = (Token, usize);

/// Represents a lexical token of an infix expression.
///
/// Tokens are immutable once produced. Ordering within the produced
/// sequence is the only structure they carry; the offset travels alongside
/// in [`Spanned`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `12` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Single-letter variable tokens such as `A` or `x`.
    ///
    /// The pattern matches whole runs of letters so that `AB` is reported as
    /// one invalid identifier rather than two variables.
    #[regex(r"[a-zA-Z]+", parse_variable)]
    Variable(char),
    /// Arithmetic operator tokens.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` for numbers and variables.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Variable(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number or does not fit in a finite
///   `f64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Accepts a run of letters only when it is exactly one letter long.
fn parse_variable(lex: &logos::Lexer<Token>) -> Option<char> {
    let mut chars = lex.slice().chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) => Some(name),
        _ => None,
    }
}

/// Turns the slice the lexer rejected into a precise error.
fn classify_error(slice: &str, position: usize) -> LexError {
    if slice.len() > 1 && slice.chars().all(|c| c.is_ascii_alphabetic()) {
        return LexError::InvalidIdentifier { name: slice.to_string(),
                                             position };
    }
    if slice.parse::<f64>().is_ok_and(f64::is_infinite) {
        return LexError::NumberOutOfRange { literal: slice.to_string(),
                                            position };
    }

    LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                    position }
}

/// Splits an infix expression into tokens.
///
/// Whitespace is skipped anywhere. Consecutive digits (with at most one
/// decimal point followed by more digits) form a single number. An empty or
/// blank input yields an empty sequence; the parser decides whether that is
/// an error.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for any character outside the
///   alphabet, reporting the character and its offset.
/// - [`LexError::InvalidIdentifier`] for runs of two or more letters.
/// - [`LexError::NumberOutOfRange`] for literals too large for `f64`.
///
/// # Example
/// ```
/// use polish_notation::{
///     ast::BinaryOperator,
///     notation::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("12 + 3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(12.0), 0),
///                 (Token::Operator(BinaryOperator::Add), 3),
///                 (Token::Number(3.0), 5)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    let (mut byte_offset, mut position) = (0, 0);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        position += source[byte_offset..start].chars().count();
        byte_offset = start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => return Err(classify_error(lexer.slice(), position)),
        }
    }

    debug!("tokenized {:?} into {} tokens", source, tokens.len());
    Ok(tokens)
}

/// Drops the offsets from a spanned token sequence.
#[must_use]
pub fn strip_positions(tokens: &[Spanned]) -> Vec<Token> {
    tokens.iter().map(|(token, _)| *token).collect()
}
