use equate::equation::build;
use equate::error::SolveError;
use equate::format::solution_strings;
use equate::normalize::normalize;
use equate::solver::{solve, Solution};

fn solved(input: &str) -> Solution {
    let eq = build(&normalize(input), "x").expect("build equation");
    solve(&eq).expect("solve equation")
}

fn solutions(input: &str) -> Vec<String> {
    solution_strings(&solved(input))
}

#[test]
fn linear_equations() {
    assert_eq!(solutions("x+2=5"), vec!["3"]);
    assert_eq!(solutions("2x+4=10"), vec!["3"]);
    assert_eq!(solutions("2x+1=0"), vec!["-1/2"]);
    assert_eq!(solutions("x/3=2"), vec!["6"]);
}

#[test]
fn quadratic_with_rational_roots() {
    assert_eq!(solutions("x**2-4=0"), vec!["-2", "2"]);
    assert_eq!(solutions("x^2+3x+2=0"), vec!["-2", "-1"]);
    assert_eq!(solutions("4x^2-1=0"), vec!["-1/2", "1/2"]);
}

#[test]
fn quadratic_with_radical_roots() {
    assert_eq!(solutions("x**2-2=0"), vec!["-sqrt(2)", "sqrt(2)"]);
    assert_eq!(solutions("x**2-12=0"), vec!["-2*sqrt(3)", "2*sqrt(3)"]);
    // Radicals sort by rendered form, which puts '+' before '-'.
    assert_eq!(
        solutions("x**2-x-1=0"),
        vec!["1/2+1/2*sqrt(5)", "1/2-1/2*sqrt(5)"]
    );
}

#[test]
fn repeated_root_reported_once() {
    assert_eq!(solutions("x**2-2*x+1=0"), vec!["1"]);
}

#[test]
fn identity_is_unbounded() {
    assert_eq!(solved("x=x"), Solution::Unbounded);
    assert_eq!(solved("2x+2=2(x+1)"), Solution::Unbounded);
}

#[test]
fn contradiction_is_empty() {
    assert_eq!(solved("x=x+1"), Solution::Empty);
    assert_eq!(solved("0=5"), Solution::Empty);
}

#[test]
fn negative_discriminant_has_no_real_roots() {
    assert_eq!(solved("x**2+1=0"), Solution::Empty);
}

#[test]
fn cubic_with_rational_roots() {
    assert_eq!(solutions("x**3-x=0"), vec!["-1", "0", "1"]);
    assert_eq!(solutions("x**3-6*x**2+11*x-6=0"), vec!["1", "2", "3"]);
}

#[test]
fn quartic_via_deflation() {
    assert_eq!(solutions("x**4-5*x**2+4=0"), vec!["-2", "-1", "1", "2"]);
}

#[test]
fn rational_function_cancels_denominator_roots() {
    // (x^2 - 4)/(x - 2) = 0: x = 2 would divide by zero, only -2 remains.
    assert_eq!(solutions("(x**2-4)/(x-2)=0"), vec!["-2"]);
    assert_eq!(solved("1/x=0"), Solution::Empty);
    assert_eq!(solved("x+1/x=0"), Solution::Empty);
}

#[test]
fn solution_order_is_canonical() {
    // Rational roots ascending, radicals after, by rendered form.
    assert_eq!(solutions("(x**2-9)*(x-1)=0"), vec!["-3", "1", "3"]);
    assert_eq!(
        solutions("(x-1)*(x**2-2)=0"),
        vec!["1", "-sqrt(2)", "sqrt(2)"]
    );
}

#[test]
fn irreducible_cubic_is_unsupported() {
    let eq = build(&normalize("x**3-2=0"), "x").expect("build equation");
    let err = solve(&eq).expect_err("no closed form in the supported theory");
    assert!(matches!(err, SolveError::UnsupportedForm(_)), "got {err:?}");
}

#[test]
fn fractional_exponent_is_unsupported() {
    let eq = build(&normalize("x**(1/2)=2"), "x").expect("build equation");
    let err = solve(&eq).expect_err("fractional exponent");
    assert!(matches!(err, SolveError::UnsupportedForm(_)), "got {err:?}");
}
