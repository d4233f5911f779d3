use equate::equation::build;
use equate::error::{Side, SolveError};
use equate::parse_expr;

#[test]
fn zero_form_subtracts_parenthesized_rhs() {
    let eq = build("x+2=5", "x").expect("build equation");
    let expected = parse_expr("x+2-(5)").expect("parse expected");
    assert_eq!(eq.zero_form, expected);
    assert_eq!(eq.unknown, "x");
}

#[test]
fn rhs_precedence_is_preserved() {
    // Without the mandatory parenthesis the rhs signs would flip.
    let eq = build("x=1-2", "x").expect("build equation");
    let expected = parse_expr("x-(1-2)").expect("parse expected");
    assert_eq!(eq.zero_form, expected);
}

#[test]
fn missing_equality_sign_is_malformed() {
    let err = build("x+2", "x").expect_err("no equality sign");
    assert!(matches!(err, SolveError::MalformedEquation(_)), "got {err:?}");
}

#[test]
fn multiple_equality_signs_are_malformed() {
    let err = build("x=2=3", "x").expect_err("two equality signs");
    assert!(matches!(err, SolveError::MalformedEquation(_)), "got {err:?}");
}

#[test]
fn empty_sides_are_rejected() {
    assert_eq!(
        build("=5", "x").expect_err("empty lhs"),
        SolveError::EmptySide(Side::Left)
    );
    assert_eq!(
        build("x+2=", "x").expect_err("empty rhs"),
        SolveError::EmptySide(Side::Right)
    );
}

#[test]
fn undeclared_symbol_is_a_parse_error() {
    let err = build("y+2=5", "x").expect_err("foreign symbol");
    assert!(matches!(err, SolveError::Parse(_)), "got {err:?}");

    let err = build("x+y=5", "x").expect_err("extra symbol");
    assert!(matches!(err, SolveError::Parse(_)), "got {err:?}");
}

#[test]
fn unbalanced_parentheses_fail_to_parse() {
    let err = build("(x+2=5", "x").expect_err("unbalanced parenthesis");
    assert!(matches!(err, SolveError::Parse(_)), "got {err:?}");
}
