use std::fmt;

/// Binary operators, written between their two operands.
///
/// All of them are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength relative to other infix operators.
    ///
    /// `*` and `/` bind tighter than `+` and `-`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary operators, written before their single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Unary `-`.
    Neg,
}

impl PrefixOperator {
    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Neg => '-',
        }
    }

    /// Binding strength, on the same scale as [`Operator::precedence`].
    ///
    /// Higher than every infix operator, so `-2 * 3` negates `2` before the
    /// multiplication.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Neg => 3,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `neg` keeps postfix listings unambiguous next to infix `-`.
        match self {
            Self::Neg => write!(f, "neg"),
        }
    }
}

/// A single step of a postfix (RPN) program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Push a number onto the value stack.
    Number(f64),
    /// Pop two operands and push the result of the operator.
    Infix(Operator),
    /// Pop one operand and push the result of the operator.
    Prefix(PrefixOperator),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Infix(op) => write!(f, "{op}"),
            Self::Prefix(op) => write!(f, "{op}"),
        }
    }
}
