//! # yardcalc
//!
//! yardcalc evaluates single-line arithmetic expressions built from decimal
//! numbers, the four operators `+ - * /`, parentheses and unary minus.
//!
//! Evaluation runs in three stages, each consuming the previous one's output:
//! the lexer scans the text into tokens, the parser converts them into postfix
//! order with the shunting-yard algorithm, and the evaluator reduces the
//! postfix program with a value stack. The first stage to fail stops the
//! pipeline and its error is returned.
//!
//! Every call is a pure function of its input. Nothing is shared between calls,
//! so [`evaluate`] may be used from several threads at once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::Error,
    interpreter::{evaluator, lexer, parser},
};

/// Provides unified error types for every stage.
///
/// This module defines the errors raised while lexing, parsing and evaluating
/// an expression, plus the top-level [`Error`] that wraps them.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Separates user input errors from internal invariant violations.
/// - Integrates with `std::error::Error` and `Display` for reporting.
pub mod error;
/// The lexer, parser and evaluator.
///
/// This module ties the three stages together and declares the token,
/// operator and instruction types that flow between them.
pub mod interpreter;
/// Log output for the command-line program.
///
/// The library itself only emits `log` records. This module installs a
/// `tracing-subscriber` writer on stderr and bridges those records into it.
pub mod logging;
/// The interactive read-evaluate-print loop.
///
/// Reads one expression per line, prints its result or error and keeps going
/// until an exit command or the end of input.
pub mod shell;

/// Evaluates an arithmetic expression and returns its value.
///
/// Leading, trailing and internal whitespace is insignificant, except that it
/// separates fragments and never splits a numeral.
///
/// # Errors
/// Returns [`Error::Lex`], [`Error::Parse`] or [`Error::Eval`] depending on the
/// stage that rejected the input. Empty input is an
/// [`error::ParseError::IncompleteExpression`].
///
/// # Examples
/// ```
/// use yardcalc::{
///     error::{Error, EvalError, ParseError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("--3").unwrap(), 3.0);
///
/// assert_eq!(evaluate("5 / 0"), Err(Error::Eval(EvalError::DivisionByZero)));
/// assert_eq!(evaluate("2 3"), Err(Error::Parse(ParseError::ConsecutiveExpressions)));
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    let result = run_stages(input);

    match &result {
        Ok(value) => debug!("evaluated {input:?} = {value}"),
        Err(e) => debug!("failed to evaluate {input:?}: {e:?}"),
    }
    result
}

fn run_stages(input: &str) -> Result<f64, Error> {
    let tokens = lexer::scan(input)?;
    let program = parser::parse(&tokens)?;
    Ok(evaluator::run(&program)?)
}
