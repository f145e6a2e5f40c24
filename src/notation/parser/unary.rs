use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    notation::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, describe, parse_expression, unexpected_end},
    },
};

/// Parses an operand.
///
/// The grammar has no prefix operators, so this level only dispatches on
/// the leading token.
///
/// Grammar:
/// ```text
///     unary := number
///            | variable
///            | "(" expr ")"
/// ```
///
/// # Errors
/// [`ParseError::MalformedExpression`] when an operator, a `)` or the end of
/// input appears where an operand is required.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    *value,
                                                                     position: *position, }),
        Some((Token::Variable(name), position)) => Ok(Expr::Variable { name:     *name,
                                                                       position: *position, }),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position),
        Some((token, position)) => Err(ParseError::MalformedExpression { token:    describe(token),
                                                                         position: Some(*position), }),
        None => Err(unexpected_end()),
    }
}

/// Parses the inside of a parenthesised expression, after its `(`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `(`.
/// - `open`: Offset of the `(` for error reporting.
///
/// # Errors
/// [`ParseError::UnbalancedParentheses`] when the input ends before the
/// matching `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((token, position)) => Err(ParseError::MalformedExpression { token:    describe(token),
                                                                         position: Some(*position), }),
        None => Err(ParseError::UnbalancedParentheses { position: open }),
    }
}
