/// The converter module rewrites infix input into other notations.
///
/// Two independent paths live here: the Shunting Yard algorithm turns the
/// token stream straight into postfix, while the tree traversals turn a
/// parsed AST into prefix (and, for cross-checking, postfix) as well as
/// three-address code.
///
/// # Responsibilities
/// - Reorders tokens into postfix with an operator stack and output queue.
/// - Walks the AST in pre-order and post-order.
/// - Exposes step-by-step traces for front ends that visualise the process.
pub mod converter;
/// The evaluator module reduces postfix and prefix token sequences to a
/// number.
///
/// Both evaluators are stack machines that substitute variables from a
/// binding map supplied at evaluation time.
///
/// # Responsibilities
/// - Applies `+ - * / ^` with the operand order fixed by the notation.
/// - Reports unbound variables, division by zero and malformed input.
pub mod evaluator;
/// The lexer module tokenizes raw infix text.
///
/// The lexer reads an expression line and produces numbers, single-letter
/// variables, operators and parentheses, each paired with its character
/// offset so later stages can point at the offending token.
///
/// # Responsibilities
/// - Skips whitespace and groups digits into one number token.
/// - Rejects unknown characters and multi-letter identifiers.
pub mod lexer;
/// The parser module validates infix syntax and builds the AST.
///
/// It is a precedence-climbing recursive descent parser and the single
/// authority on syntax errors.
///
/// # Responsibilities
/// - Encodes precedence and associativity in the tree shape.
/// - Detects empty input, unbalanced parentheses and misplaced tokens.
pub mod parser;
