//! # polish-notation
//!
//! polish-notation converts infix arithmetic expressions into postfix
//! (reverse Polish) and prefix (Polish) notation and evaluates postfix
//! expressions under a set of variable bindings.
//!
//! The pipeline is: tokenizer, then two independent consumers of the token
//! stream (the parser, which validates syntax and builds an AST, and the
//! Shunting Yard converter, which produces postfix directly), then the
//! postfix stack machine. Prefix output always derives from the AST.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeSet;

use log::debug;

use crate::{
    error::{Error, EvalError},
    notation::{
        converter::{
            intermediate::{Quadruple, Triple, to_quadruples, to_triples},
            postfix::{ShuntingStep, to_postfix, to_postfix_traced},
            prefix::to_prefix,
        },
        evaluator::core::{Bindings, EvalStep, evaluate, evaluate_traced},
        lexer::{Spanned, Token, strip_positions, tokenize},
        parser::core::parse,
    },
    util::render::space_separated,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum that represents an infix expression
/// as an owned binary tree, together with the operator metadata table
/// (precedence and associativity) shared by every stage.
///
/// # Responsibilities
/// - Defines literal, variable and binary operation nodes.
/// - Attaches source offsets to nodes for error reporting.
/// - Answers precedence and associativity questions for each operator.
pub mod ast;
/// Provides typed errors for every stage of the pipeline.
///
/// Each stage fails fast with its own error enum. The umbrella `Error`
/// carries the failing stage, a human readable message and, where known,
/// the offset of the offending token.
///
/// # Responsibilities
/// - Defines error enums for the lexer, parser, converter and evaluator.
/// - Converts between them so stages compose with `?`.
/// - Offers a serializable report for machine readable output.
pub mod error;
/// Implements the conversion and evaluation pipeline.
///
/// This module ties together lexing, parsing, notation conversion and
/// evaluation. The functions at the crate root are thin compositions of the
/// functions found here.
///
/// # Responsibilities
/// - Tokenizes raw text and validates its syntax.
/// - Converts token streams and trees into postfix, prefix and
///   three-address code.
/// - Evaluates postfix and prefix sequences on a value stack.
pub mod notation;
/// General helpers shared by the pipeline and its callers.
///
/// # Responsibilities
/// - Render token sequences as space-separated text.
pub mod util;

/// Tokenizes `expression` and runs the parser over the tokens, which is the
/// single authority on syntax errors, before any conversion runs.
fn validated(expression: &str) -> Result<Vec<Spanned>, Error> {
    let tokens = tokenize(expression)?;
    parse(&tokens)?;
    Ok(tokens)
}

/// Returns the sorted, de-duplicated variables of a token sequence.
fn variables_of(tokens: &[Spanned]) -> Vec<char> {
    tokens.iter()
          .filter_map(|(token, _)| match token {
              Token::Variable(name) => Some(*name),
              _ => None,
          })
          .collect::<BTreeSet<_>>()
          .into_iter()
          .collect()
}

/// Converts an infix expression to space-separated postfix notation.
///
/// The expression is validated by the parser first, so malformed input is
/// reported as a `ParseError` and the Shunting Yard algorithm only ever sees
/// valid token streams.
///
/// # Errors
/// Returns a `LexError` or `ParseError` for invalid input.
///
/// # Examples
/// ```
/// use polish_notation::convert_to_postfix;
///
/// assert_eq!(convert_to_postfix("A ^ B ^ C").unwrap(), "A B C ^ ^");
/// assert_eq!(convert_to_postfix("(A + B) * C ^ D - E").unwrap(),
///            "A B + C D ^ * E -");
///
/// // Unbalanced parentheses are never silently dropped.
/// assert!(convert_to_postfix("(A + B").is_err());
/// ```
pub fn convert_to_postfix(expression: &str) -> Result<String, Error> {
    let tokens = validated(expression)?;
    let postfix = to_postfix(&tokens)?;
    Ok(space_separated(&postfix))
}

/// Converts an infix expression to space-separated prefix notation.
///
/// # Errors
/// Returns a `LexError` or `ParseError` for invalid input.
///
/// # Examples
/// ```
/// use polish_notation::convert_to_prefix;
///
/// assert_eq!(convert_to_prefix("A ^ B ^ C").unwrap(), "^ A ^ B C");
/// assert_eq!(convert_to_prefix("(A + B) * C ^ D - E").unwrap(),
///            "- * + A B ^ C D E");
/// ```
pub fn convert_to_prefix(expression: &str) -> Result<String, Error> {
    let tokens = tokenize(expression)?;
    let ast = parse(&tokens)?;
    Ok(space_separated(&to_prefix(&ast)))
}

/// Evaluates a space-separated postfix expression.
///
/// Tokens are read with the same tokenizer as infix input, so numbers may be
/// multi-digit or decimal and variables are single letters.
///
/// # Errors
/// Returns a `LexError` for unreadable tokens or an `EvalError` for unbound
/// variables, division by zero and malformed sequences.
///
/// # Examples
/// ```
/// use polish_notation::{evaluate_postfix, notation::evaluator::core::Bindings};
///
/// let bindings = Bindings::from([('A', 2.0), ('B', 3.0)]);
/// assert_eq!(evaluate_postfix("A B +", &bindings).unwrap(), 5.0);
///
/// let partial = Bindings::from([('A', 2.0)]);
/// assert_eq!(evaluate_postfix("A B +", &partial).unwrap_err().to_string(),
///            "Error: Unbound variable B.");
/// ```
pub fn evaluate_postfix(expression: &str, bindings: &Bindings) -> Result<f64, Error> {
    let tokens = strip_positions(&tokenize(expression)?);
    Ok(evaluate(&tokens, bindings)?)
}

/// Evaluates a space-separated prefix expression.
///
/// # Errors
/// Same as [`evaluate_postfix`].
///
/// # Examples
/// ```
/// use polish_notation::{evaluate_prefix, notation::evaluator::core::Bindings};
///
/// let bindings = Bindings::from([('A', 2.0), ('B', 3.0)]);
/// assert_eq!(evaluate_prefix("^ A B", &bindings).unwrap(), 8.0);
/// ```
pub fn evaluate_prefix(expression: &str, bindings: &Bindings) -> Result<f64, Error> {
    let tokens = strip_positions(&tokenize(expression)?);
    Ok(notation::evaluator::prefix::evaluate_prefix(&tokens, bindings)?)
}

/// Returns the unique variables of an infix expression in sorted order.
///
/// Only the tokenizer runs; the expression does not have to be
/// syntactically valid.
///
/// # Errors
/// Returns a `LexError` for unreadable input.
///
/// # Examples
/// ```
/// use polish_notation::extract_variables;
///
/// assert_eq!(extract_variables("Z + A * A - M").unwrap(), vec!['A', 'M', 'Z']);
/// assert!(extract_variables("1 + 2 * 3").unwrap().is_empty());
/// ```
pub fn extract_variables(expression: &str) -> Result<Vec<char>, Error> {
    Ok(variables_of(&tokenize(expression)?))
}

/// Validates, converts and evaluates an infix expression.
///
/// All variables are checked against `bindings` before evaluation starts, so
/// the error lists every missing name at once.
///
/// # Errors
/// Returns a `LexError` or `ParseError` for invalid input,
/// `EvalError::MissingBindings` when variables lack values, and any other
/// `EvalError` raised by the stack machine.
///
/// # Examples
/// ```
/// use polish_notation::{evaluate_expression, notation::evaluator::core::Bindings};
///
/// let bindings = Bindings::from([('A', 1.0), ('B', 2.0), ('C', 2.0), ('D', 3.0), ('E', 5.0)]);
/// assert_eq!(evaluate_expression("(A + B) * C ^ D - E", &bindings).unwrap(), 19.0);
/// assert!(evaluate_expression("A + Q", &bindings).is_err());
/// ```
pub fn evaluate_expression(expression: &str, bindings: &Bindings) -> Result<f64, Error> {
    trace_evaluation(expression, bindings).map(|(_, value, _)| value)
}

/// Converts an infix expression to postfix and returns the Shunting Yard
/// steps alongside the result.
///
/// # Errors
/// Same as [`convert_to_postfix`].
///
/// # Examples
/// ```
/// use polish_notation::{notation::converter::postfix::ShuntingAction, trace_postfix};
///
/// let (postfix, steps) = trace_postfix("A + B").unwrap();
/// assert_eq!(postfix, "A B +");
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps[3].action, ShuntingAction::Drain);
/// ```
pub fn trace_postfix(expression: &str) -> Result<(String, Vec<ShuntingStep>), Error> {
    let tokens = validated(expression)?;
    let (postfix, steps) = to_postfix_traced(&tokens)?;
    Ok((space_separated(&postfix), steps))
}

/// Same as [`evaluate_expression`], additionally returning the postfix form
/// that was evaluated and the value stack after each postfix token.
///
/// # Errors
/// Same as [`evaluate_expression`].
///
/// # Examples
/// ```
/// use polish_notation::{notation::evaluator::core::Bindings, trace_evaluation};
///
/// let bindings = Bindings::from([('A', 4.0)]);
/// let (postfix, value, steps) = trace_evaluation("A * 2", &bindings).unwrap();
/// assert_eq!(postfix, "A 2 *");
/// assert_eq!(value, 8.0);
/// assert_eq!(steps.len(), 3);
/// ```
pub fn trace_evaluation(expression: &str,
                        bindings: &Bindings)
                        -> Result<(String, f64, Vec<EvalStep>), Error> {
    let tokens = validated(expression)?;

    let missing = variables_of(&tokens).into_iter()
                                       .filter(|name| !bindings.contains_key(name))
                                       .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(EvalError::MissingBindings { names: missing }.into());
    }

    let postfix = to_postfix(&tokens)?;
    let (value, steps) = evaluate_traced(&postfix, bindings)?;
    debug!("{expression:?} evaluated to {value}");
    Ok((space_separated(&postfix), value, steps))
}

/// Lowers an infix expression into triples and quadruples.
///
/// # Errors
/// Returns a `LexError` or `ParseError` for invalid input.
///
/// # Examples
/// ```
/// use polish_notation::three_address_code;
///
/// let (triples, quadruples) = three_address_code("(A + B) * C").unwrap();
/// assert_eq!(triples.len(), 2);
/// assert_eq!(triples[1].arg1.to_string(), "(1)");
/// assert_eq!(quadruples[1].arg1.to_string(), "T1");
/// ```
pub fn three_address_code(expression: &str) -> Result<(Vec<Triple>, Vec<Quadruple>), Error> {
    let ast = parse(&tokenize(expression)?)?;
    Ok((to_triples(&ast), to_quadruples(&ast)))
}
