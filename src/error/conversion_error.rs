#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised by the Shunting Yard converter.
///
/// Input that went through the parser never produces these; they only
/// surface when the converter is fed unvalidated tokens.
pub enum ConversionError {
    /// A `)` without a matching `(`, or a `(` left open at the end.
    UnbalancedParentheses {
        /// Zero-based character offset of the unmatched parenthesis.
        position: usize,
    },
}

impl ConversionError {
    /// Returns the input offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnbalancedParentheses { position } => *position,
        }
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses { position } => {
                write!(f, "Error at position {position}: Unbalanced parentheses.")
            },
        }
    }
}

impl std::error::Error for ConversionError {}
