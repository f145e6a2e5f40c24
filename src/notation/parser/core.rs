use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    notation::{
        lexer::{Spanned, Token},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Validates an infix token sequence and builds its AST.
///
/// Parsing fails fast at the first error; there is no recovery.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] when `tokens` is empty.
/// - [`ParseError::UnbalancedParentheses`] for a `(` that is never closed
///   or a `)` left over after a complete expression.
/// - [`ParseError::MalformedExpression`] for adjacent operands, operators
///   missing an operand and any other leftover token.
/// - [`ParseError::NestingTooDeep`] when parentheses nest deeper than
///   [`MAX_NESTING_DEPTH`].
///
/// # Example
/// ```
/// use polish_notation::{
///     ast::{BinaryOperator, Expr},
///     notation::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("A ^ B ^ C").unwrap();
/// let ast = parse(&tokens).unwrap();
/// let Expr::BinaryOp { op, right, .. } = &ast else {
///     panic!("expected a binary operation");
/// };
/// assert_eq!(*op, BinaryOperator::Pow);
/// assert!(matches!(**right, Expr::BinaryOp { op: BinaryOperator::Pow, .. }));
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    check_nesting(tokens)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(match token {
            Token::RParen => ParseError::UnbalancedParentheses { position: *position },
            _ => ParseError::MalformedExpression { token:    describe(token),
                                                   position: Some(*position), },
        });
    }

    debug!("parsed {} tokens", tokens.len());
    Ok(expr)
}

/// Rejects parenthesis nesting the recursive grouping rule cannot afford.
///
/// Only `(` recurses in the grammar; operator chains are parsed in loops.
fn check_nesting(tokens: &[Spanned]) -> ParseResult<()> {
    let mut depth = 0usize;
    for (token, position) in tokens {
        match token {
            Token::LParen => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { position: *position });
                }
            },
            Token::RParen => depth = depth.saturating_sub(1),
            _ => {},
        }
    }
    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point of the grammar. It begins at the lowest
/// precedence level and descends through the hierarchy.
///
/// Grammar: `expr := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_additive(tokens)
}

/// Renders a token for error messages.
pub(crate) fn describe(token: &Token) -> String {
    format!("token '{token}'")
}

/// The error for a production that ran out of tokens.
pub(crate) fn unexpected_end() -> ParseError {
    ParseError::MalformedExpression { token:    "end of input".to_string(),
                                      position: None, }
}
