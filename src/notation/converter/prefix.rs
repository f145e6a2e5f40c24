use log::debug;

use crate::{ast::Expr, notation::lexer::Token};

/// Converts an AST to prefix notation by pre-order traversal.
///
/// Each operator is emitted before its left and right subtrees; leaves emit
/// themselves. No parentheses are produced since the tree shape already
/// encodes precedence.
///
/// # Example
/// ```
/// use polish_notation::{
///     notation::{converter::prefix::to_prefix, lexer::tokenize, parser::core::parse},
///     util::render::space_separated,
/// };
///
/// let ast = parse(&tokenize("(A + B) * C ^ D - E").unwrap()).unwrap();
/// assert_eq!(space_separated(&to_prefix(&ast)), "- * + A B ^ C D E");
/// ```
#[must_use]
pub fn to_prefix(expr: &Expr) -> Vec<Token> {
    let mut out = Vec::new();
    let mut pending = vec![expr];
    while let Some(node) = pending.pop() {
        out.push(node_token(node));
        if let Expr::BinaryOp { left, right, .. } = node {
            pending.push(right);
            pending.push(left);
        }
    }
    debug!("emitted {} prefix tokens", out.len());
    out
}

/// Converts an AST to postfix notation by post-order traversal.
///
/// For every valid input this matches the Shunting Yard output token for
/// token.
#[must_use]
pub fn postfix_from_ast(expr: &Expr) -> Vec<Token> {
    // Root, right, left, reversed, is left, right, root.
    let mut out = Vec::new();
    let mut pending = vec![expr];
    while let Some(node) = pending.pop() {
        out.push(node_token(node));
        if let Expr::BinaryOp { left, right, .. } = node {
            pending.push(left);
            pending.push(right);
        }
    }
    out.reverse();
    out
}

/// The token a single node stands for, ignoring its children.
const fn node_token(expr: &Expr) -> Token {
    match expr {
        Expr::Literal { value, .. } => Token::Number(*value),
        Expr::Variable { name, .. } => Token::Variable(*name),
        Expr::BinaryOp { op, .. } => Token::Operator(*op),
    }
}
