use crate::{ast::BinaryOperator, error::EvalError, notation::evaluator::core::EvalResult};

/// Computes `left op right`.
///
/// `^` uses the left operand as the base and accepts integer and fractional
/// exponents alike. A negative base with a fractional exponent yields `NaN`
/// as `f64::powf` does.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when `op` is `/` and `right` is zero.
///
/// # Example
/// ```
/// use polish_notation::{ast::BinaryOperator, notation::evaluator::binary::apply};
///
/// assert_eq!(apply(BinaryOperator::Pow, 2.0, 10.0).unwrap(), 1024.0);
/// assert_eq!(apply(BinaryOperator::Sub, 10.0, 3.0).unwrap(), 7.0);
/// assert!(apply(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        BinaryOperator::Pow => Ok(left.powf(right)),
    }
}
