#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while validating infix syntax.
pub enum ParseError {
    /// The token sequence was empty.
    EmptyExpression,
    /// A `(` was never closed, or a `)` had no matching `(`.
    UnbalancedParentheses {
        /// Zero-based character offset of the unmatched parenthesis.
        position: usize,
    },
    /// Operands and operators do not alternate as the grammar requires.
    MalformedExpression {
        /// The unexpected token, or `end of input`.
        token:    String,
        /// Zero-based character offset of the token, `None` at end of input.
        position: Option<usize>,
    },
    /// Parentheses nest deeper than the parser accepts.
    NestingTooDeep {
        /// Zero-based character offset of the first `(` past the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the input offset the error points at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::UnbalancedParentheses { position } | Self::NestingTooDeep { position } => {
                Some(*position)
            },
            Self::MalformedExpression { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Empty expression."),
            Self::UnbalancedParentheses { position } => {
                write!(f, "Error at position {position}: Unbalanced parentheses.")
            },
            Self::MalformedExpression { token,
                                        position: Some(position), } => write!(f,
                                                                              "Error at position {position}: Malformed expression, unexpected {token}."),
            Self::MalformedExpression { token, position: None } => {
                write!(f, "Error: Malformed expression, unexpected {token}.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Error at position {position}: Parentheses nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
