#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// The divisor of a `/` evaluated to zero (positive or negative).
    DivisionByZero,
    /// An operator found fewer operands on the value stack than it needs.
    ///
    /// Never produced for a sequence built by the parser.
    StackUnderflow,
    /// The sequence did not leave exactly one value on the stack.
    ///
    /// Never produced for a sequence built by the parser.
    MalformedRpn {
        /// How many values were left on the stack.
        depth: usize,
    },
}

impl EvalError {
    /// Returns `true` for errors that indicate a parser/evaluator bug.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::StackUnderflow | Self::MalformedRpn { .. })
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::StackUnderflow => {
                write!(f, "Internal error: an operator ran out of operands.")
            },
            Self::MalformedRpn { depth } => {
                write!(f, "Internal error: evaluation left {depth} values instead of one.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
