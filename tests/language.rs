use std::fs::{self};

use safecalc::{
    compute, compute_with,
    config::Limits,
    error::{Error, EvalError, ParseError},
    evaluate,
    interpreter::value::Number,
    parse,
};
use walkdir::WalkDir;

#[test]
fn fixture_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = match compute(&expression) {
                Ok(value) => value.to_string(),
                Err(e) => format!("!{}", error_kind(&e)),
            };
            assert_eq!(actual,
                       expected,
                       "Case {} in {:?} gave the wrong outcome: {}",
                       i + 1,
                       path,
                       expression);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once(" => "))
           .map(|(expression, expected)| (expression.to_string(), expected.trim().to_string()))
           .collect()
}

fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::Parse(ParseError::EmptyExpression) => "EmptyExpression",
        Error::Parse(ParseError::InputTooLong { .. }) => "InputTooLong",
        Error::Parse(ParseError::SyntaxError { .. }) => "SyntaxError",
        Error::Parse(ParseError::DisallowedConstruct { .. })
        | Error::Eval(EvalError::DisallowedConstruct { .. }) => "DisallowedConstruct",
        Error::Parse(ParseError::TooDeeplyNested { .. })
        | Error::Eval(EvalError::TooDeeplyNested { .. }) => "TooDeeplyNested",
        Error::Eval(EvalError::DivisionByZero { .. }) => "DivisionByZero",
        Error::Eval(EvalError::DomainError { .. }) => "DomainError",
        Error::Eval(EvalError::Overflow { .. }) => "Overflow",
    }
}

fn assert_value(src: &str, expected: Number) {
    match compute(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: &str) {
    match compute(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(error_kind(&e), kind, "Wrong error for {src:?}: {e}"),
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(compute(""), Err(Error::Parse(ParseError::EmptyExpression)));
    assert_eq!(compute("   "), Err(Error::Parse(ParseError::EmptyExpression)));
    assert_eq!(compute("\t\n"), Err(Error::Parse(ParseError::EmptyExpression)));
}

#[test]
fn incomplete_expressions_are_syntax_errors() {
    assert_failure("2+", "SyntaxError");
    assert_failure("(1+2", "SyntaxError");
    assert_failure("1..2", "SyntaxError");
}

#[test]
fn division_and_remainder_by_zero() {
    assert_failure("5/0", "DivisionByZero");
    assert_failure("5%0", "DivisionByZero");
    assert_failure("1 + 2 / (3 - 3)", "DivisionByZero");
}

#[test]
fn basic_arithmetic() {
    assert_value("42", Number::Integer(42));
    assert_value("-3+4", Number::Integer(1));
    assert_value("-(3+4)", Number::Integer(-7));
    assert_value("2+3*4", Number::Integer(14));
    assert_value("2**3**2", Number::Integer(512));
    assert_value("2**10", Number::Integer(1024));
}

#[test]
fn square_root_by_power() {
    let Ok(Number::Real(root)) = compute("2**0.5") else {
        panic!("expected a real result");
    };
    assert!((root - std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn non_arithmetic_is_disallowed() {
    assert_failure("__import__('os')", "DisallowedConstruct");
    assert_failure("a.b", "DisallowedConstruct");
    assert_failure("abs(1)", "DisallowedConstruct");
    assert_failure("1 if 1 else 2", "DisallowedConstruct");
    assert_failure("(x)", "DisallowedConstruct");
}

#[test]
fn nesting_limit_is_enforced() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(100), Number::Integer(1));
    assert_eq!(compute(&nested(101)),
               Err(Error::Parse(ParseError::TooDeeplyNested { limit: 100, position: 100 })));
}

#[test]
fn long_power_chains_count_towards_nesting() {
    let chain = vec!["1"; 150].join("**");
    assert_failure(&chain, "TooDeeplyNested");
}

#[test]
fn custom_limits_apply() {
    let limits = Limits { max_nesting: 2,
                          ..Limits::default() };
    assert_eq!(compute_with("((1))", &limits), Ok(Number::Integer(1)));
    assert!(matches!(compute_with("(((1)))", &limits),
                     Err(Error::Parse(ParseError::TooDeeplyNested { limit: 2, .. }))));

    let limits = Limits { max_length: 8,
                          ..Limits::default() };
    assert_eq!(compute_with("1 + 2 + 3", &limits),
               Err(Error::Parse(ParseError::InputTooLong { length: 9, limit: 8 })));
}

#[test]
fn long_flat_sums_evaluate() {
    let sum = vec!["1"; 1000].join(" + ");
    assert_value(&sum, Number::Integer(1000));
}

#[test]
fn flat_chains_up_to_the_length_limit_evaluate() {
    let sum = vec!["1"; 4999].join("+");
    assert!(sum.len() <= Limits::default().max_length);
    assert_value(&sum, Number::Integer(4999));

    let difference = vec!["1"; 4999].join("-");
    assert_value(&difference, Number::Integer(-4997));
}

#[test]
fn raised_length_limit_handles_very_long_chains() {
    let terms = 200_000;
    let sum = vec!["1"; terms].join("+");
    let limits = Limits { max_length: sum.len(),
                          ..Limits::default() };
    assert_eq!(compute_with(&sum, &limits), Ok(Number::Integer(200_000)));
}

#[test]
fn negative_base_with_fractional_exponent() {
    assert_failure("(-8)**(1/3)", "DomainError");
}

#[test]
fn parsed_trees_evaluate_repeatedly() {
    let tree = parse("(1 + 2.5) * 4 % 3").unwrap();
    let first = evaluate(&tree);
    assert_eq!(first, Ok(Number::Real(2.0)));
    assert_eq!(evaluate(&tree), first);
}

#[test]
fn errors_report_positions() {
    let Err(e) = compute("1 + 2 / 0") else {
        panic!("expected a failure");
    };
    assert_eq!(e.position(), Some(6));
    assert_eq!(e.to_string(), "Division by zero at position 6.");
}
