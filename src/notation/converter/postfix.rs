use log::{debug, trace};
use serde::Serialize;

use crate::{
    ast::{Associativity, BinaryOperator},
    error::ConversionError,
    notation::lexer::{Spanned, Token},
};

/// Result type used by the Shunting Yard converter.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// What the converter did with a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShuntingAction {
    /// An operand was appended to the output.
    Output,
    /// Operators that bind at least as tightly were popped, then the
    /// operator was pushed.
    PushOperator,
    /// A `(` was pushed.
    OpenGroup,
    /// Operators were popped up to the matching `(`, which was discarded.
    CloseGroup,
    /// An operator left on the stack was moved to the output at the end.
    Drain,
}

/// One row of a Shunting Yard trace.
///
/// `stack` and `output` are snapshots taken after the step; `popped` lists
/// the operators moved to the output during the step, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShuntingStep {
    /// The token being processed.
    pub token:  Token,
    /// What happened to it.
    pub action: ShuntingAction,
    /// Operators moved from the stack to the output.
    pub popped: Vec<Token>,
    /// Operator stack, bottom first.
    pub stack:  Vec<Token>,
    /// Output queue so far.
    pub output: Vec<Token>,
}

/// Operator stack and output queue of one conversion.
struct ShuntingYard {
    stack:  Vec<Spanned>,
    output: Vec<Token>,
    steps:  Option<Vec<ShuntingStep>>,
}

impl ShuntingYard {
    fn new(traced: bool) -> Self {
        Self { stack:  Vec::new(),
               output: Vec::new(),
               steps:  traced.then(Vec::new), }
    }

    /// Returns `true` when `top` has to leave the stack before `incoming`
    /// is pushed.
    fn yields_to(top: BinaryOperator, incoming: BinaryOperator) -> bool {
        top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence()
            && incoming.associativity() == Associativity::Left)
    }

    fn feed(&mut self, (token, position): Spanned) -> ConversionResult<()> {
        let mut popped = Vec::new();

        let action = match token {
            Token::Number(_) | Token::Variable(_) => {
                self.output.push(token);
                ShuntingAction::Output
            },
            Token::Operator(op) => {
                while let Some((Token::Operator(top), _)) = self.stack.last()
                      && Self::yields_to(*top, op)
                {
                    let top = Token::Operator(*top);
                    self.stack.pop();
                    self.output.push(top);
                    popped.push(top);
                }
                self.stack.push((token, position));
                ShuntingAction::PushOperator
            },
            Token::LParen => {
                self.stack.push((token, position));
                ShuntingAction::OpenGroup
            },
            Token::RParen => {
                loop {
                    match self.stack.pop() {
                        Some((Token::LParen, _)) => break,
                        Some((top, _)) => {
                            self.output.push(top);
                            popped.push(top);
                        },
                        None => return Err(ConversionError::UnbalancedParentheses { position }),
                    }
                }
                ShuntingAction::CloseGroup
            },
        };

        self.record(token, action, popped);
        Ok(())
    }

    fn finish(mut self) -> ConversionResult<(Vec<Token>, Vec<ShuntingStep>)> {
        while let Some((token, position)) = self.stack.pop() {
            if token == Token::LParen {
                return Err(ConversionError::UnbalancedParentheses { position });
            }
            self.output.push(token);
            self.record(token, ShuntingAction::Drain, vec![token]);
        }

        Ok((self.output, self.steps.unwrap_or_default()))
    }

    fn record(&mut self, token: Token, action: ShuntingAction, popped: Vec<Token>) {
        trace!("{action:?} {token}: output={} stack={}",
               self.output.len(),
               self.stack.len());

        if let Some(steps) = self.steps.as_mut() {
            steps.push(ShuntingStep { token,
                                      action,
                                      popped,
                                      stack: self.stack.iter().map(|(t, _)| *t).collect(),
                                      output: self.output.clone() });
        }
    }
}

fn convert(tokens: &[Spanned], traced: bool) -> ConversionResult<(Vec<Token>, Vec<ShuntingStep>)> {
    let mut yard = ShuntingYard::new(traced);
    for spanned in tokens {
        yard.feed(*spanned)?;
    }
    let (output, steps) = yard.finish()?;
    debug!("converted {} tokens to {} postfix tokens",
           tokens.len(),
           output.len());
    Ok((output, steps))
}

/// Converts an infix token stream to postfix with the Shunting Yard
/// algorithm.
///
/// Operands go straight to the output. An incoming operator first pops every
/// stacked operator with higher precedence, or equal precedence when the
/// incoming operator is left associative. Parentheses steer the stack and
/// are never emitted.
///
/// The algorithm is only meaningful for syntactically valid input. Validate
/// with [`crate::notation::parser::core::parse`] first; the public
/// [`crate::convert_to_postfix`] does so.
///
/// # Errors
/// [`ConversionError::UnbalancedParentheses`] for a `)` with no open `(` on
/// the stack, or a `(` still open when the input ends.
///
/// # Example
/// ```
/// use polish_notation::{
///     notation::{converter::postfix::to_postfix, lexer::tokenize},
///     util::render::space_separated,
/// };
///
/// let tokens = tokenize("(A + B) * C ^ D - E").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(space_separated(&postfix), "A B + C D ^ * E -");
/// ```
pub fn to_postfix(tokens: &[Spanned]) -> ConversionResult<Vec<Token>> {
    convert(tokens, false).map(|(output, _)| output)
}

/// Same as [`to_postfix`], additionally returning one [`ShuntingStep`] per
/// input token and per operator drained at the end.
///
/// # Errors
/// See [`to_postfix`].
pub fn to_postfix_traced(tokens: &[Spanned]) -> ConversionResult<(Vec<Token>, Vec<ShuntingStep>)> {
    convert(tokens, true)
}
