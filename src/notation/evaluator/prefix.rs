use log::debug;

use crate::notation::{
    evaluator::core::{Bindings, EvalResult, StackMachine},
    lexer::Token,
};

/// Evaluates a prefix token sequence.
///
/// Tokens are scanned right to left. Operands are pushed; an operator pops
/// its left operand first, then its right operand. Error semantics match
/// the postfix evaluator, so a prefix and a postfix rendering of the same
/// tree yield the same result or the same error kind.
///
/// # Errors
/// See [`crate::notation::evaluator::core::evaluate`].
///
/// # Example
/// ```
/// use polish_notation::notation::{
///     evaluator::{core::Bindings, prefix::evaluate_prefix},
///     lexer::{strip_positions, tokenize},
/// };
///
/// let tokens = strip_positions(&tokenize("- 10 / 6 3").unwrap());
/// assert_eq!(evaluate_prefix(&tokens, &Bindings::new()).unwrap(), 8.0);
/// ```
pub fn evaluate_prefix(tokens: &[Token], bindings: &Bindings) -> EvalResult<f64> {
    let mut machine = StackMachine::new(bindings);
    for token in tokens.iter().rev() {
        machine.feed(*token, true)?;
    }
    let (value, _) = machine.finish()?;
    debug!("evaluated {} prefix tokens to {value}", tokens.len());
    Ok(value)
}
