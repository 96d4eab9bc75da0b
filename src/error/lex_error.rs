#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A whitespace-delimited fragment contains text that is not a numeral or
    /// a recognized symbol.
    InvalidToken {
        /// The whole fragment the unrecognized text was found in.
        token: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token } => write!(f, "Invalid token: '{token}'."),
        }
    }
}

impl std::error::Error for LexError {}
