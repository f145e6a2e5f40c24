use std::collections::HashMap;

use log::{debug, trace};
use serde::Serialize;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    notation::{evaluator::binary::apply, lexer::Token},
};

/// Result type used by the evaluators.
pub type EvalResult<T> = Result<T, EvalError>;

/// Values for single-letter variables, supplied at evaluation time.
///
/// A variable missing from the map is an error, never an implicit zero.
pub type Bindings = HashMap<char, f64>;

/// One row of an evaluation trace: the token consumed and the value stack
/// afterwards, bottom first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalStep {
    /// The token just processed.
    pub token: Token,
    /// Value stack after the token.
    pub stack: Vec<f64>,
}

/// The value stack of one evaluation.
///
/// Both the postfix and the prefix evaluator drive this machine; they only
/// differ in the order tokens are fed and in which popped value is the left
/// operand.
pub struct StackMachine<'a> {
    bindings: &'a Bindings,
    stack:    Vec<f64>,
    steps:    Option<Vec<EvalStep>>,
}

impl<'a> StackMachine<'a> {
    /// Creates an empty machine reading variables from `bindings`.
    #[must_use]
    pub const fn new(bindings: &'a Bindings) -> Self {
        Self { bindings,
               stack: Vec::new(),
               steps: None }
    }

    /// Creates an empty machine that records an [`EvalStep`] per token.
    #[must_use]
    pub const fn traced(bindings: &'a Bindings) -> Self {
        Self { bindings,
               stack: Vec::new(),
               steps: Some(Vec::new()) }
    }

    /// Pushes the value of a number or a bound variable.
    ///
    /// # Errors
    /// - [`EvalError::UnboundVariable`] for a variable without a binding.
    /// - [`EvalError::MalformedPostfix`] for parentheses.
    pub fn push_operand(&mut self, token: Token) -> EvalResult<()> {
        let value = match token {
            Token::Number(value) => value,
            Token::Variable(name) => *self.bindings
                                          .get(&name)
                                          .ok_or(EvalError::UnboundVariable { name })?,
            Token::Operator(_) | Token::LParen | Token::RParen => {
                return Err(EvalError::MalformedPostfix { details: format!("unexpected '{token}'"), });
            },
        };
        self.stack.push(value);
        self.record(token);
        Ok(())
    }

    /// Pops two values, applies `op` and pushes the result.
    ///
    /// With `left_first` unset the first popped value is the right operand,
    /// as in postfix; with it set the first popped value is the left
    /// operand, as in prefix scanned right to left.
    ///
    /// # Errors
    /// - [`EvalError::MalformedPostfix`] when fewer than two values are
    ///   available.
    /// - [`EvalError::DivisionByZero`] from [`apply`].
    pub fn apply_operator(&mut self, op: BinaryOperator, left_first: bool) -> EvalResult<()> {
        let (Some(first), Some(second)) = (self.stack.pop(), self.stack.pop()) else {
            return Err(EvalError::MalformedPostfix { details: format!("operator '{op}' needs two operands"), });
        };
        let (left, right) = if left_first { (first, second) } else { (second, first) };

        self.stack.push(apply(op, left, right)?);
        self.record(Token::Operator(op));
        Ok(())
    }

    /// Feeds one token, dispatching on its kind.
    ///
    /// # Errors
    /// See [`Self::push_operand`] and [`Self::apply_operator`].
    pub fn feed(&mut self, token: Token, left_first: bool) -> EvalResult<()> {
        match token {
            Token::Operator(op) => self.apply_operator(op, left_first),
            _ => self.push_operand(token),
        }
    }

    /// Returns the single remaining value and the recorded steps.
    ///
    /// # Errors
    /// [`EvalError::MalformedPostfix`] unless exactly one value remains.
    pub fn finish(self) -> EvalResult<(f64, Vec<EvalStep>)> {
        match self.stack.as_slice() {
            [value] => Ok((*value, self.steps.unwrap_or_default())),
            rest => Err(EvalError::MalformedPostfix { details: format!("expected one value on the stack, found {}",
                                                                       rest.len()), }),
        }
    }

    fn record(&mut self, token: Token) {
        trace!("{token}: stack={:?}", self.stack);
        if let Some(steps) = self.steps.as_mut() {
            steps.push(EvalStep { token,
                                  stack: self.stack.clone() });
        }
    }
}

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed, variables are looked up in `bindings`, and each
/// operator pops its right operand, then its left operand, and pushes the
/// result. Exactly one value must remain at the end.
///
/// # Errors
/// - [`EvalError::UnboundVariable`] for a variable without a binding.
/// - [`EvalError::DivisionByZero`] for `/` with a zero right operand.
/// - [`EvalError::MalformedPostfix`] for operators lacking operands,
///   parentheses, or leftover values.
///
/// # Example
/// ```
/// use polish_notation::notation::{
///     evaluator::core::{Bindings, evaluate},
///     lexer::{strip_positions, tokenize},
/// };
///
/// let tokens = strip_positions(&tokenize("A B C * +").unwrap());
/// let bindings = Bindings::from([('A', 1.0), ('B', 2.0), ('C', 3.0)]);
/// assert_eq!(evaluate(&tokens, &bindings).unwrap(), 7.0);
/// ```
pub fn evaluate(tokens: &[Token], bindings: &Bindings) -> EvalResult<f64> {
    let mut machine = StackMachine::new(bindings);
    for token in tokens {
        machine.feed(*token, false)?;
    }
    let (value, _) = machine.finish()?;
    debug!("evaluated {} postfix tokens to {value}", tokens.len());
    Ok(value)
}

/// Same as [`evaluate`], additionally returning one [`EvalStep`] per token.
///
/// # Errors
/// See [`evaluate`].
pub fn evaluate_traced(tokens: &[Token], bindings: &Bindings) -> EvalResult<(f64, Vec<EvalStep>)> {
    let mut machine = StackMachine::traced(bindings);
    for token in tokens {
        machine.feed(*token, false)?;
    }
    machine.finish()
}
