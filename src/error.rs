/// Conversion errors.
///
/// Raised by the Shunting Yard converter when it is fed tokens whose
/// parentheses do not balance.
pub mod conversion_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised by the postfix and prefix
/// stack machines: unbound variables, division by zero and sequences that do
/// not reduce to a single value.
pub mod eval_error;
/// Lexical errors.
///
/// Raised while turning raw text into tokens: characters outside the
/// alphabet and multi-letter identifiers.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors detected while validating an infix token
/// sequence and building its AST.
pub mod parse_error;

pub use conversion_error::ConversionError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
use serde::Serialize;

/// The stage an [`Error`] originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Tokenizer failure.
    LexError,
    /// Syntax failure.
    ParseError,
    /// Shunting Yard failure.
    ConversionError,
    /// Stack machine failure.
    EvalError,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LexError => "LexError",
            Self::ParseError => "ParseError",
            Self::ConversionError => "ConversionError",
            Self::EvalError => "EvalError",
        };
        f.write_str(name)
    }
}

/// Any failure surfaced by the public entry points.
///
/// Each stage fails fast with its own error type; this enum lets callers
/// chain stages with `?` and still recover the kind, the message and, for
/// lexer and parser errors, the offending position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`LexError`].
    Lex(LexError),
    /// See [`ParseError`].
    Parse(ParseError),
    /// See [`ConversionError`].
    Conversion(ConversionError),
    /// See [`EvalError`].
    Eval(EvalError),
}

impl Error {
    /// Returns the stage this error comes from.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::LexError,
            Self::Parse(_) => ErrorKind::ParseError,
            Self::Conversion(_) => ErrorKind::ConversionError,
            Self::Eval(_) => ErrorKind::EvalError,
        }
    }

    /// Returns the zero-based input offset of the offending token, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Conversion(e) => Some(e.position()),
            Self::Eval(_) => None,
        }
    }

    /// Returns the human readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => std::fmt::Display::fmt(e, f),
            Self::Parse(e) => std::fmt::Display::fmt(e, f),
            Self::Conversion(e) => std::fmt::Display::fmt(e, f),
            Self::Eval(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Conversion(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<ConversionError> for Error {
    fn from(value: ConversionError) -> Self {
        Self::Conversion(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

/// A serializable snapshot of an [`Error`] for machine readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// The failing stage.
    pub kind:     ErrorKind,
    /// The human readable message.
    pub message:  String,
    /// Zero-based input offset, when the stage tracks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl From<&Error> for ErrorReport {
    fn from(error: &Error) -> Self {
        Self { kind:     error.kind(),
               message:  error.message(),
               position: error.position(), }
    }
}
