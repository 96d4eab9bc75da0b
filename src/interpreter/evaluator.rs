use log::trace;

use crate::{
    error::EvalError,
    interpreter::operator::{Instruction, Operator, PrefixOperator},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Applies a binary operator to two operands.
///
/// # Errors
/// Returns `EvalError::DivisionByZero` when dividing by `0.0` or `-0.0`.
///
/// # Examples
/// ```
/// use yardcalc::interpreter::{evaluator::apply_infix, operator::Operator};
///
/// assert_eq!(apply_infix(Operator::Sub, 10.0, 4.0).unwrap(), 6.0);
/// assert!(apply_infix(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply_infix(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}

/// Applies a unary operator to its operand.
#[must_use]
pub fn apply_prefix(op: PrefixOperator, operand: f64) -> f64 {
    match op {
        PrefixOperator::Neg => -operand,
    }
}

/// Runs a postfix program and returns the single value it reduces to.
///
/// Numbers are pushed onto a value stack. An infix operator pops its right
/// operand first and its left operand second. A prefix operator pops one
/// operand.
///
/// # Errors
/// - `DivisionByZero` when a divisor evaluates to zero.
/// - `StackUnderflow` when an operator finds too few operands.
/// - `MalformedRpn` when the program leaves zero or several values behind.
///
/// The last two never happen for programs built by
/// [`crate::interpreter::parser::parse`].
///
/// # Examples
/// ```
/// use yardcalc::interpreter::{
///     evaluator::run,
///     operator::{Instruction, Operator, PrefixOperator},
/// };
///
/// // 10 - -4
/// let program = [Instruction::Number(10.0),
///                Instruction::Number(4.0),
///                Instruction::Prefix(PrefixOperator::Neg),
///                Instruction::Infix(Operator::Sub)];
/// assert_eq!(run(&program).unwrap(), 14.0);
/// ```
pub fn run(program: &[Instruction]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(program.len());

    for &instruction in program {
        match instruction {
            Instruction::Number(value) => stack.push(value),
            Instruction::Prefix(op) => {
                let operand = stack.pop().ok_or(EvalError::StackUnderflow)?;
                stack.push(apply_prefix(op, operand));
            },
            Instruction::Infix(op) => {
                let right = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let left = stack.pop().ok_or(EvalError::StackUnderflow)?;
                stack.push(apply_infix(op, left, right)?);
            },
        }
        trace!("{instruction} -> {stack:?}");
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedRpn { depth: stack.len() }),
    }
}
