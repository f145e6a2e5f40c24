/// Arithmetic on two operands.
///
/// Applies a binary operator to already resolved values and reports
/// division by zero.
pub mod binary;

/// The postfix stack machine.
///
/// Contains the binding map type, the value stack shared by both evaluators
/// and the postfix entry points with optional step traces.
pub mod core;

/// The prefix stack machine.
///
/// Evaluates pre-order token sequences by scanning them right to left.
pub mod prefix;
