#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating postfix or prefix
/// token sequences.
pub enum EvalError {
    /// A variable was referenced without a binding.
    UnboundVariable {
        /// The variable name.
        name: char,
    },
    /// Several variables of an infix expression lack bindings.
    MissingBindings {
        /// The unbound names, sorted.
        names: Vec<char>,
    },
    /// The right-hand operand of `/` was zero.
    DivisionByZero,
    /// Operators and operands do not form exactly one value.
    MalformedPostfix {
        /// What went wrong.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Error: Unbound variable {name}."),
            Self::MissingBindings { names } => {
                let names = names.iter().map(char::to_string).collect::<Vec<_>>().join(", ");
                write!(f, "Error: Missing values for variables: {names}.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::MalformedPostfix { details } => {
                write!(f, "Error: Malformed postfix expression: {details}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
