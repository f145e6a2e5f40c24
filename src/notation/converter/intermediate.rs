use serde::{Serialize, Serializer};

use crate::{
    ast::{BinaryOperator, Expr},
    notation::{converter::prefix::postfix_from_ast, lexer::Token},
};

/// An argument or result slot of a three-address instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A numeric literal.
    Number(f64),
    /// A source variable.
    Variable(char),
    /// A quadruple temporary, rendered `T1`, `T2`, ...
    Temporary(usize),
    /// A triple row reference, rendered `(1)`, `(2)`, ...
    Reference(usize),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Temporary(index) => write!(f, "T{index}"),
            Self::Reference(index) => write!(f, "({index})"),
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `result := arg1 op arg2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quadruple {
    pub op:     BinaryOperator,
    pub arg1:   Operand,
    pub arg2:   Operand,
    pub result: Operand,
}

/// `arg1 op arg2`, named by its one-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triple {
    pub op:   BinaryOperator,
    pub arg1: Operand,
    pub arg2: Operand,
}

/// Lowers an AST into quadruples, innermost operations first.
///
/// Each operation stores its value in a fresh temporary `T<n>`, numbered in
/// emission order. A lone literal or variable needs no instructions.
///
/// # Example
/// ```
/// use polish_notation::notation::{
///     converter::intermediate::{Operand, to_quadruples},
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let ast = parse(&tokenize("A + B * C").unwrap()).unwrap();
/// let table = to_quadruples(&ast);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table[1].arg2, Operand::Temporary(1));
/// assert_eq!(table[1].result.to_string(), "T2");
/// ```
#[must_use]
pub fn to_quadruples(expr: &Expr) -> Vec<Quadruple> {
    let mut table = Vec::new();
    lower(expr, |op, arg1, arg2| {
        let result = Operand::Temporary(table.len() + 1);
        table.push(Quadruple { op,
                               arg1,
                               arg2,
                               result });
        result
    });
    table
}

/// Lowers an AST into triples, innermost operations first.
///
/// Intermediate values are referred to by the row that computes them.
#[must_use]
pub fn to_triples(expr: &Expr) -> Vec<Triple> {
    let mut table = Vec::new();
    lower(expr, |op, arg1, arg2| {
        table.push(Triple { op, arg1, arg2 });
        Operand::Reference(table.len())
    });
    table
}

/// Replays the post-order token sequence of `expr` on an operand stack,
/// calling `emit` for every operation with its two arguments. `emit`
/// returns the operand that names the result.
fn lower<F>(expr: &Expr, mut emit: F)
    where F: FnMut(BinaryOperator, Operand, Operand) -> Operand
{
    let mut operands = Vec::new();
    for token in postfix_from_ast(expr) {
        let operand = match token {
            Token::Number(value) => Operand::Number(value),
            Token::Variable(name) => Operand::Variable(name),
            Token::Operator(op) => {
                let (Some(arg2), Some(arg1)) = (operands.pop(), operands.pop()) else {
                    continue;
                };
                emit(op, arg1, arg2)
            },
            Token::LParen | Token::RParen => continue,
        };
        operands.push(operand);
    }
}
