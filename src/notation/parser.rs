/// Entry points of the parser.
///
/// Holds the result alias, the top-level `parse` function that rejects empty
/// and trailing input, and the expression entry point of the grammar.
pub mod core;

/// Binary operator productions.
///
/// Implements the additive, multiplicative and power levels of the
/// precedence hierarchy, including right associativity for `^`.
pub mod binary;

/// Operand productions.
///
/// Parses numbers, variables and parenthesised sub-expressions, and checks
/// that every `(` is closed.
pub mod unary;
