use proptest::{collection::vec, prelude::*};
use yardcalc::{
    error::{Error, EvalError},
    evaluate,
    interpreter::{evaluator::run, lexer::Token, operator::Operator, parser::parse},
};

/// A generated expression together with a straightforward reference value.
#[derive(Debug, Clone)]
enum Expr {
    Num(String),
    Neg(Box<Expr>),
    Bin(Box<Expr>, char, Box<Expr>),
}

impl Expr {
    /// Renders the expression with every binary node in parentheses, putting
    /// `gap` between all tokens.
    fn render(&self, gap: &str) -> String {
        match self {
            Self::Num(n) => n.clone(),
            Self::Neg(e) => format!("-{gap}{}", e.render(gap)),
            Self::Bin(l, op, r) => {
                format!("({gap}{}{gap}{op}{gap}{}{gap})", l.render(gap), r.render(gap))
            },
        }
    }

    /// `None` when some division has a zero divisor.
    fn value(&self) -> Option<f64> {
        match self {
            Self::Num(n) => n.parse().ok(),
            Self::Neg(e) => e.value().map(|v| -v),
            Self::Bin(l, op, r) => {
                let (l, r) = (l.value()?, r.value()?);
                match op {
                    '+' => Some(l + r),
                    '-' => Some(l - r),
                    '*' => Some(l * r),
                    _ if r == 0.0 => None,
                    _ => Some(l / r),
                }
            },
        }
    }
}

fn operator_char() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn numeral() -> impl Strategy<Value = String> {
    (0u32..1000, proptest::option::of(0u32..100)).prop_map(|(whole, frac)| match frac {
                                                          Some(frac) => format!("{whole}.{frac}"),
                                                          None => whole.to_string(),
                                                      })
}

fn expr() -> impl Strategy<Value = Expr> {
    numeral().prop_map(Expr::Num).prop_recursive(4, 32, 2, |inner| {
                                     prop_oneof![
                                         inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
                                         (inner.clone(), operator_char(), inner).prop_map(|(l, op, r)| {
                                             Expr::Bin(Box::new(l), op, Box::new(r))
                                         }),
                                     ]
                                 })
}

fn token() -> impl Strategy<Value = Token> {
    prop_oneof![
        (0u32..10).prop_map(|n| Token::Number(f64::from(n))),
        Just(Token::Operator(Operator::Add)),
        Just(Token::Operator(Operator::Sub)),
        Just(Token::Operator(Operator::Sub)),
        Just(Token::Operator(Operator::Mul)),
        Just(Token::Operator(Operator::Div)),
        Just(Token::LParen),
        Just(Token::RParen),
    ]
}

/// Evaluates `first op n op n ...` with `*` and `/` folded into terms first,
/// then the terms folded left to right.
fn by_precedence(first: u32, rest: &[(char, u32)]) -> f64 {
    let mut terms = vec![('+', f64::from(first))];
    for &(op, n) in rest {
        let n = f64::from(n);
        match (op, terms.last_mut()) {
            ('*', Some(term)) => term.1 *= n,
            ('/', Some(term)) => term.1 /= n,
            _ => terms.push((op, n)),
        }
    }
    terms.iter()
         .skip(1)
         .fold(terms[0].1, |acc, &(op, v)| if op == '+' { acc + v } else { acc - v })
}

proptest! {
    #[test]
    fn parenthesized_expressions_match_the_reference(e in expr()) {
        let expected = e.value().ok_or(Error::Eval(EvalError::DivisionByZero));
        prop_assert_eq!(evaluate(&e.render(" ")), expected);
    }

    #[test]
    fn whitespace_between_tokens_does_not_matter(e in expr(), width in 1usize..4) {
        let spaced = evaluate(&e.render(&" ".repeat(width)));
        let compact = evaluate(&e.render(""));
        prop_assert_eq!(spaced, compact);
    }

    #[test]
    fn flat_expressions_follow_standard_precedence(first in 1u32..100,
                                                   rest in vec((operator_char(), 1u32..100), 0..8)) {
        let src = rest.iter().fold(first.to_string(), |acc, (op, n)| format!("{acc} {op} {n}"));
        prop_assert_eq!(evaluate(&src), Ok(by_precedence(first, &rest)));
    }

    #[test]
    fn evaluation_is_idempotent(src in "[0-9+*/() .-]{0,16}") {
        prop_assert_eq!(evaluate(&src), evaluate(&src));
    }

    #[test]
    fn accepted_programs_reduce_to_exactly_one_value(tokens in vec(token(), 0..24)) {
        if let Ok(program) = parse(&tokens) {
            match run(&program) {
                Ok(_) | Err(EvalError::DivisionByZero) => {},
                Err(e) => prop_assert!(false, "{tokens:?} parsed but failed with {e:?}"),
            }
        }
    }

    #[test]
    fn arbitrary_text_never_hits_an_internal_error(src in "\\PC{0,24}") {
        if let Err(e) = evaluate(&src) {
            prop_assert!(!e.is_internal(), "{src:?} failed with {e:?}");
        }
    }
}
