#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens into postfix
/// order.
pub enum ParseError {
    /// Two operands follow each other with no operator between them, as in
    /// `2 3` or `(1) 2`.
    ConsecutiveExpressions,
    /// An infix operator appears where an operand was expected, as in `2 + * 3`
    /// or `* 2`.
    OperatorNeedsOperand {
        /// The symbol of the misplaced operator.
        operator: char,
    },
    /// A `)` has no matching `(`, or a `(` is never closed.
    UnmatchedParen,
    /// The input ended while an operand was still expected. Empty input ends
    /// this way too.
    IncompleteExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsecutiveExpressions => {
                write!(f, "Two expressions in a row. An operator is missing between them.")
            },
            Self::OperatorNeedsOperand { operator } => {
                write!(f, "Operator '{operator}' is missing its left operand.")
            },
            Self::UnmatchedParen => write!(f, "Unmatched parenthesis."),
            Self::IncompleteExpression => {
                write!(f, "Incomplete expression. An operand was expected.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
