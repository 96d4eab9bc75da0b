use log::trace;
use logos::Logos;

use crate::{error::LexError, interpreter::operator::Operator};

/// Represents a lexical token in the source input.
///
/// Only the symbols themselves are recognized here. Whether a `-` is a prefix
/// or an infix operator is decided later by the parser, so every operator
/// symbol is scanned as its infix form.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Unsigned decimal numeral, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// One of `+`, `-`, `*` or `/`, recorded in its infix form.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Scans a line of text into tokens.
///
/// The input is split on ASCII spaces first, so spaces separate fragments but
/// never split a numeral. Other whitespace such as tabs, newlines or
/// non-breaking spaces is not a separator and is rejected like any other
/// foreign character. Inside a fragment tokens are matched greedily
/// from left to right.
///
/// # Errors
/// Returns `LexError::InvalidToken` carrying the whole fragment when any part
/// of it is not a numeral or one of `+ - * / ( )`.
///
/// # Examples
/// ```
/// use yardcalc::interpreter::{
///     lexer::{Token, scan},
///     operator::Operator,
/// };
///
/// let tokens = scan("-(1.5+2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::Sub),
///                 Token::LParen,
///                 Token::Number(1.5),
///                 Token::Operator(Operator::Add),
///                 Token::Number(2.0),
///                 Token::RParen]);
///
/// assert!(scan("2 $ 3").is_err());
/// assert!(scan("2\t+ 3").is_err());
/// assert!(scan("").unwrap().is_empty());
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for fragment in source.split(' ').filter(|fragment| !fragment.is_empty()) {
        for token in Token::lexer(fragment) {
            let Ok(token) = token else {
                return Err(LexError::InvalidToken { token: fragment.to_string() });
            };
            tokens.push(token);
        }
    }

    trace!("scanned {} tokens: {tokens:?}", tokens.len());
    Ok(tokens)
}
