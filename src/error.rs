/// Lexing errors.
///
/// Raised by the tokenizer when a fragment of the input contains text that is
/// neither a decimal numeral nor one of the recognized symbols.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while converting the token sequence
/// into postfix order: misplaced operands and operators, unbalanced
/// parentheses and expressions that end too early.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while running a postfix sequence. Division by
/// zero is the only one a user can trigger; the others signal a broken
/// invariant between the parser and the evaluator.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced by [`crate::evaluate`].
///
/// Wraps the error of whichever stage stopped first. Each stage error converts
/// into this type with `?`.
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The token sequence is not a well-formed expression.
    Parse(ParseError),
    /// The postfix sequence could not be reduced to a value.
    Eval(EvalError),
}

impl Error {
    /// Returns `true` when the error reports a broken internal invariant rather
    /// than a problem with the user's input.
    ///
    /// # Examples
    /// ```
    /// use yardcalc::error::{Error, EvalError, ParseError};
    ///
    /// assert!(Error::Eval(EvalError::StackUnderflow).is_internal());
    /// assert!(!Error::Eval(EvalError::DivisionByZero).is_internal());
    /// assert!(!Error::Parse(ParseError::UnmatchedParen).is_internal());
    /// ```
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        match self {
            Self::Eval(e) => e.is_internal(),
            Self::Lex(_) | Self::Parse(_) => false,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
