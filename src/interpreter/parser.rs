use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        operator::{Instruction, Operator, PrefixOperator},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry of the pending-operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Infix(Operator),
    Prefix(PrefixOperator),
    LParen,
}

impl Pending {
    /// Precedence looked up in the table of the entry's own kind. Parentheses
    /// have none and act as a barrier.
    const fn precedence(self) -> Option<u8> {
        match self {
            Self::Infix(op) => Some(op.precedence()),
            Self::Prefix(op) => Some(op.precedence()),
            Self::LParen => None,
        }
    }

    const fn instruction(self) -> Option<Instruction> {
        match self {
            Self::Infix(op) => Some(Instruction::Infix(op)),
            Self::Prefix(op) => Some(Instruction::Prefix(op)),
            Self::LParen => None,
        }
    }
}

/// Working state of a single conversion.
///
/// `expects_operator` is `false` whenever the next token must start an operand.
/// It is what lets `-` act as either negation or subtraction without lookahead.
#[derive(Default)]
struct ShuntingYard {
    expects_operator: bool,
    stack:            Vec<Pending>,
    output:           Vec<Instruction>,
}

impl ShuntingYard {
    fn push(&mut self, token: Token) -> ParseResult<()> {
        match token {
            Token::Number(value) => {
                if self.expects_operator {
                    return Err(ParseError::ConsecutiveExpressions);
                }
                self.output.push(Instruction::Number(value));
                self.expects_operator = true;
            },
            Token::LParen => {
                // A group is an operand, so it cannot follow another one.
                if self.expects_operator {
                    return Err(ParseError::ConsecutiveExpressions);
                }
                self.stack.push(Pending::LParen);
            },
            Token::RParen => {
                if !self.stack.iter().any(|entry| matches!(entry, Pending::LParen)) {
                    return Err(ParseError::UnmatchedParen);
                }
                if !self.expects_operator {
                    return Err(ParseError::IncompleteExpression);
                }
                self.close_group()?;
            },
            Token::Operator(Operator::Sub) if !self.expects_operator => {
                // The operand of a prefix operator is still ahead, so nothing on
                // the stack can be complete yet and nothing is popped.
                self.stack.push(Pending::Prefix(PrefixOperator::Neg));
            },
            Token::Operator(op) => {
                if !self.expects_operator {
                    return Err(ParseError::OperatorNeedsOperand { operator: op.symbol() });
                }
                self.pop_while_binding(op.precedence());
                self.stack.push(Pending::Infix(op));
                self.expects_operator = false;
            },
        }
        Ok(())
    }

    /// Moves operators to the output while the stack top binds at least as
    /// tightly as `precedence`. Equal precedence pops, which makes every infix
    /// operator left-associative.
    fn pop_while_binding(&mut self, precedence: u8) {
        while let Some(&top) = self.stack.last()
              && let Some(top_precedence) = top.precedence()
              && top_precedence >= precedence
              && let Some(instruction) = top.instruction()
        {
            self.stack.pop();
            self.output.push(instruction);
        }
    }

    /// Pops operators up to and including the nearest `(`.
    fn close_group(&mut self) -> ParseResult<()> {
        loop {
            match self.stack.pop() {
                Some(Pending::LParen) => return Ok(()),
                Some(entry) => {
                    if let Some(instruction) = entry.instruction() {
                        self.output.push(instruction);
                    }
                },
                None => return Err(ParseError::UnmatchedParen),
            }
        }
    }

    fn finish(mut self) -> ParseResult<Vec<Instruction>> {
        if !self.expects_operator {
            return Err(ParseError::IncompleteExpression);
        }
        while let Some(entry) = self.stack.pop() {
            let Some(instruction) = entry.instruction() else {
                return Err(ParseError::UnmatchedParen);
            };
            self.output.push(instruction);
        }
        Ok(self.output)
    }
}

/// Converts a token sequence into postfix (RPN) instructions.
///
/// Tokens are processed strictly left to right with the shunting-yard
/// algorithm. A `-` in operand position becomes a prefix negation, which binds
/// tighter than any infix operator. `*` and `/` bind tighter than `+` and `-`,
/// and all infix operators are left-associative.
///
/// Every sequence returned here reduces to exactly one value when run by the
/// evaluator.
///
/// # Errors
/// - `ConsecutiveExpressions` when an operand follows another operand.
/// - `OperatorNeedsOperand` when an infix operator appears in operand position.
/// - `UnmatchedParen` for a stray `)` or an unclosed `(`.
/// - `IncompleteExpression` when the input, or a group, ends in operand position.
///
/// # Examples
/// ```
/// use yardcalc::interpreter::{
///     lexer::scan,
///     parser::{parse, to_postfix_string},
/// };
///
/// let program = parse(&scan("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(to_postfix_string(&program), "2 3 4 * +");
///
/// let program = parse(&scan("-(1 - 2) - 3").unwrap()).unwrap();
/// assert_eq!(to_postfix_string(&program), "1 2 - neg 3 -");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Instruction>> {
    let mut yard = ShuntingYard::default();
    for &token in tokens {
        yard.push(token)?;
    }
    let program = yard.finish()?;

    trace!("postfix: {}", to_postfix_string(&program));
    Ok(program)
}

/// Renders a postfix sequence as space-separated text, with prefix negation
/// written as `neg`.
#[must_use]
pub fn to_postfix_string(program: &[Instruction]) -> String {
    program.iter()
           .map(ToString::to_string)
           .collect::<Vec<_>>()
           .join(" ")
}
