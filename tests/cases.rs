use std::fs;

use walkdir::WalkDir;
use yardcalc::{
    error::{Error, EvalError, LexError, ParseError},
    evaluate,
};

fn error_name(error: &Error) -> &'static str {
    match error {
        Error::Lex(LexError::InvalidToken { .. }) => "InvalidToken",
        Error::Parse(ParseError::ConsecutiveExpressions) => "ConsecutiveExpressions",
        Error::Parse(ParseError::OperatorNeedsOperand { .. }) => "OperatorNeedsOperand",
        Error::Parse(ParseError::UnmatchedParen) => "UnmatchedParen",
        Error::Parse(ParseError::IncompleteExpression) => "IncompleteExpression",
        Error::Eval(EvalError::DivisionByZero) => "DivisionByZero",
        Error::Eval(EvalError::StackUnderflow) => "StackUnderflow",
        Error::Eval(EvalError::MalformedRpn { .. }) => "MalformedRpn",
    }
}

fn check_case(input: &str, expected: &str) -> Result<(), String> {
    let actual = evaluate(input);
    match (expected.parse::<f64>(), actual) {
        (Ok(want), Ok(got)) if (want - got).abs() <= 1e-12 * want.abs().max(1.0) => Ok(()),
        (Err(_), Err(e)) if e.is_internal() => {
            Err(format!("`{input}` hit an internal error: {e:?}"))
        },
        (Err(_), Err(e)) if error_name(&e) == expected => Ok(()),
        (_, got) => Err(format!("`{input}`: expected {expected}, got {got:?}")),
    }
}

#[test]
fn case_files_evaluate_as_listed() {
    let mut count = 0;
    let mut failures = Vec::new();

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((input, expected)) = line.rsplit_once("=>") else {
                panic!("{path:?}:{} is not of the form `input => expected`", number + 1);
            };

            count += 1;
            if let Err(message) = check_case(input, expected.trim()) {
                failures.push(format!("{path:?}:{}: {message}", number + 1));
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
    assert!(failures.is_empty(), "{} case(s) failed:\n{}", failures.len(), failures.join("\n"));
}
