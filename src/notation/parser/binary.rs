use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    notation::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((Token::Operator(op @ (BinaryOperator::Add | BinaryOperator::Sub)), position)) =
        tokens.peek()
    {
        let (op, position) = (*op, *position);
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `term := power (("*" | "/") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_power(tokens)?;
    while let Some((Token::Operator(op @ (BinaryOperator::Mul | BinaryOperator::Div)), position)) =
        tokens.peek()
    {
        let (op, position) = (*op, *position);
        tokens.next();
        let right = parse_power(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Operands and operator offsets are collected first and folded from the
/// right, so `a ^ b ^ c` parses as `a ^ (b ^ c)` and a long chain costs no
/// stack depth.
///
/// The rule is: `power := unary ("^" unary)*`, grouped to the right.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let base = parse_unary(tokens)?;
    let mut chain = Vec::new();
    while let Some((Token::Operator(BinaryOperator::Pow), position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        chain.push((position, parse_unary(tokens)?));
    }

    let Some((mut position, mut exponent)) = chain.pop() else {
        return Ok(base);
    };
    while let Some((previous, operand)) = chain.pop() {
        exponent = Expr::BinaryOp { left: Box::new(operand),
                                    op: BinaryOperator::Pow,
                                    right: Box::new(exponent),
                                    position };
        position = previous;
    }
    Ok(Expr::BinaryOp { left: Box::new(base),
                        op: BinaryOperator::Pow,
                        right: Box::new(exponent),
                        position })
}
