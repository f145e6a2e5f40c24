#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset in the input.
        position:  usize,
    },
    /// Found a run of letters; variables are exactly one letter long.
    InvalidIdentifier {
        /// The whole run of letters.
        name:     String,
        /// Zero-based character offset of the first letter.
        position: usize,
    },
    /// Found a numeric literal whose value does not fit in an `f64`.
    NumberOutOfRange {
        /// The literal as written.
        literal:  String,
        /// Zero-based character offset of the first digit.
        position: usize,
    },
}

impl LexError {
    /// Returns the input offset the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::InvalidIdentifier { position, .. }
            | Self::NumberOutOfRange { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character '{character}'."),
            Self::InvalidIdentifier { name, position } => write!(f,
                                                                 "Error at position {position}: Invalid identifier '{name}'. Variables are single letters."),
            Self::NumberOutOfRange { literal, position } => {
                write!(f, "Error at position {position}: Number '{literal}' is out of range.")
            },
        }
    }
}

impl std::error::Error for LexError {}
