use crate::rpneval::EvalError;
use crate::{eval, evaluate, ShuntingParser};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval("1/3").unwrap(), 0.3333333333333333);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval("(2+3)*(4+5.0)").unwrap(), 45.0);
    fuzzy_eq!(eval("30/(3*2)").unwrap(), 5.0);
    fuzzy_eq!(eval("5.25-4.50").unwrap(), 0.75);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(eval("3^2").unwrap(), 9.0);
    fuzzy_eq!(eval("(2*2)^(2*2)").unwrap(), 256.0);
}

#[test]
fn left_assoc_minus() {
    // (8-4)-2, not 8-(4-2)
    fuzzy_eq!(eval("8-4-2").unwrap(), 2.0);
}

// known quirk: '^' is evaluated left-associatively, so 2^3^2 is
// (2^3)^2 = 64 rather than the mathematical 2^(3^2) = 512
#[test]
fn pow_left_assoc_quirk() {
    fuzzy_eq!(eval("2^3^2").unwrap(), 64.0);
}

#[test]
fn whitespace_insensitive() {
    assert_eq!(eval("1 + 2"), eval("1+2"));
}

// spaces are stripped before tokenizing, so a spaced-out digit run is
// one number, not two operands
#[test]
fn space_inside_number_run() {
    assert_eq!(eval("1 2"), Ok(12.0));
}

// a lone '.' is the number 0.0, end to end
#[test]
fn lone_dot_evaluates() {
    fuzzy_eq!(eval(".+1").unwrap(), 1.0);
    fuzzy_eq!(eval(".").unwrap(), 0.0);
}

#[test]
fn division_by_zero() {
    assert!(eval("1/0").unwrap().is_infinite());
    assert!(eval("0/0").unwrap().is_nan());
}

#[test]
fn idempotent() {
    let a = eval("1/3").unwrap();
    let b = eval("1/3").unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn unbalanced_paren() {
    assert_eq!(eval("(2+3)*(4+ 5.0"), Err(EvalError::MalformedExpression));
}

#[test]
fn missing_operand() {
    assert_eq!(eval("3+*4"), Err(EvalError::MalformedExpression));
    assert_eq!(eval("+"), Err(EvalError::MalformedExpression));
}

#[test]
fn leftover_operands() {
    // a trailing number with nothing to consume it
    assert_eq!(eval("(2+3) 4"), Err(EvalError::MalformedExpression));
}

#[test]
fn empty_input() {
    assert_eq!(eval(""), Err(EvalError::MalformedExpression));
}

#[test]
fn lex_errors_surface() {
    assert_eq!(
        eval("2#3"),
        Err(EvalError::UnrecognizedInput("#".to_string()))
    );
    assert_eq!(
        eval("1.2.3+1"),
        Err(EvalError::UnrecognizedInput("1.2.3".to_string()))
    );
}

#[test]
fn evaluate_postfix_directly() {
    let expr = ShuntingParser::parse_str("3+4*2").unwrap();
    fuzzy_eq!(evaluate(&expr).unwrap(), 11.0);
}
