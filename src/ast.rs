use serde::Serialize;

/// Grouping direction used to break ties between operators of equal
/// precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// The binary arithmetic operators of the infix language.
///
/// Operator metadata (precedence and associativity) lives here so that the
/// parser, the Shunting Yard converter and the evaluators all read the same
/// static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// `+` and `-` share the lowest tier, `*` and `/` the next, `^` is the
    /// highest.
    ///
    /// # Example
    /// ```
    /// use polish_notation::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns how chains of this operator group. Only `^` is right
    /// associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an infix expression.
///
/// The tree is strictly binary and owned top-down: every `BinaryOp` owns its
/// two children and nothing points back up. Each node remembers the input
/// offset of the token it was built from so that later stages can point at
/// it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `12` or `2.5`.
    Literal {
        /// The literal value.
        value:    f64,
        /// Zero-based character offset in the source.
        position: usize,
    },
    /// A single-letter variable reference.
    Variable {
        /// The variable name.
        name:     char,
        /// Zero-based character offset in the source.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Zero-based character offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// A childless stand-in used while tearing a tree down.
    const fn placeholder() -> Self {
        Self::Literal { value:    0.0,
                        position: 0, }
    }
}

impl Drop for Expr {
    /// Tears the tree down with an explicit work list so that dropping a
    /// long operator chain does not recurse once per node.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Self::BinaryOp { left, right, .. } = self {
            pending.push(std::mem::replace(&mut **left, Self::placeholder()));
            pending.push(std::mem::replace(&mut **right, Self::placeholder()));
        }

        while let Some(mut node) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut node {
                pending.push(std::mem::replace(&mut **left, Self::placeholder()));
                pending.push(std::mem::replace(&mut **right, Self::placeholder()));
            }
        }
    }
}
