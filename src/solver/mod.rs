//! Symbolic solving: root sets of a canonical zero-form over one unknown.
//!
//! The supported theory is rational functions of the unknown with exact
//! rational coefficients. Roots are exact rationals or quadratic radicals;
//! an irreducible factor of degree three or higher is reported as an
//! unsupported form rather than approximated.

use crate::equation::CanonicalEquation;
use crate::error::{Result, SolveError};
use crate::expr::{Expr, Rational};
use crate::format::pretty;
use crate::polynomial::Poly;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Classified solution set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// Finite nonempty set of exact values, in canonical order: rational
    /// roots ascending by value, then radical roots by rendered form.
    Values(Vec<Expr>),
    /// Provably no root in the supported domain.
    Empty,
    /// The zero-form vanishes identically; every value of the unknown works.
    Unbounded,
}

/// Compute the set of values of the unknown that make the zero-form vanish.
pub fn solve(eq: &CanonicalEquation) -> Result<Solution> {
    let (numer, denom) = Poly::rational_form(&eq.zero_form, &eq.unknown).ok_or_else(|| {
        SolveError::UnsupportedForm(format!(
            "expression is not a rational function of '{}'",
            eq.unknown
        ))
    })?;

    if numer.is_zero() {
        return Ok(Solution::Unbounded);
    }

    // Cancel common factors so roots of the denominator never survive.
    let common = Poly::gcd(&numer, &denom);
    let reduced = numer
        .div_exact(&common)
        .ok_or_else(|| SolveError::Engine("gcd division left a remainder".to_string()))?;

    match reduced.degree() {
        None => Ok(Solution::Unbounded),
        Some(0) => Ok(Solution::Empty),
        Some(_) => {
            let mut roots = Vec::new();
            for (factor, _multiplicity) in reduced.square_free_decomposition() {
                roots.extend(roots_of_factor(&factor)?);
            }
            roots.sort_by_cached_key(sort_key);
            roots.dedup();
            if roots.is_empty() {
                Ok(Solution::Empty)
            } else {
                Ok(Solution::Values(roots))
            }
        }
    }
}

/// Roots of one square-free factor: rational-root deflation down to the
/// quadratic or linear base cases.
fn roots_of_factor(factor: &Poly) -> Result<Vec<Expr>> {
    let mut roots = Vec::new();
    let mut current = factor.clone();
    loop {
        match current.degree() {
            None | Some(0) => break,
            Some(1) => {
                let root = current
                    .linear_root()
                    .ok_or_else(|| SolveError::Engine("degenerate linear factor".to_string()))?;
                roots.push(Expr::Constant(root));
                break;
            }
            Some(2) => {
                roots.extend(quadratic_roots(&current));
                break;
            }
            Some(degree) => match find_rational_root(&current) {
                Some(root) => {
                    let divider = Poly::linear_factor(&root);
                    current = current.div_exact(&divider).ok_or_else(|| {
                        SolveError::Engine("deflation by a verified root failed".to_string())
                    })?;
                    roots.push(Expr::Constant(root));
                }
                None => {
                    return Err(SolveError::UnsupportedForm(format!(
                        "irreducible factor of degree {degree}"
                    )));
                }
            },
        }
    }
    Ok(roots)
}

/// Real roots of a quadratic, exact: rational when the discriminant is a
/// perfect square, otherwise `q ± r*sqrt(m)` with a square-free `m`.
fn quadratic_roots(poly: &Poly) -> Vec<Expr> {
    let a = poly.coeff(2);
    let b = poly.coeff(1);
    let c = poly.coeff(0);
    let two = Rational::from_integer(BigInt::from(2));
    let four = Rational::from_integer(BigInt::from(4));

    let discriminant = b.clone() * b.clone() - four * a.clone() * c;
    if discriminant.is_negative() {
        return Vec::new();
    }
    if discriminant.is_zero() {
        return vec![Expr::Constant(-b / (two * a))];
    }
    if let Some(s) = perfect_square_rational(&discriminant) {
        let lo = (-b.clone() - s.clone()) / (two.clone() * a.clone());
        let hi = (-b + s) / (two * a);
        return vec![Expr::Constant(lo), Expr::Constant(hi)];
    }

    // sqrt(p/q) = (k/q) * sqrt(m) with p*q = k^2 * m and m square-free.
    let (outside, inside) = extract_square(&(discriminant.numer() * discriminant.denom()));
    let radical_coeff = Rational::new(outside, discriminant.denom().clone());
    let offset = -b / (two.clone() * a.clone());
    let scale = (radical_coeff / (two * a)).abs();

    let radical = Expr::sqrt(Expr::integer(inside));
    let term = if scale.is_one() {
        radical
    } else {
        Expr::Mul(Expr::Constant(scale).boxed(), radical.boxed())
    };
    if offset.is_zero() {
        vec![Expr::Neg(term.clone().boxed()), term]
    } else {
        vec![
            Expr::Sub(Expr::Constant(offset.clone()).boxed(), term.clone().boxed()),
            Expr::Add(Expr::Constant(offset).boxed(), term.boxed()),
        ]
    }
}

/// Rational-root-theorem search over divisors of the integer-scaled constant
/// and leading coefficients.
fn find_rational_root(poly: &Poly) -> Option<Rational> {
    let degree = poly.degree()?;
    if degree == 0 {
        return None;
    }
    if degree == 1 {
        return poly.linear_root();
    }

    let int_coeffs = integer_coeffs(poly);
    let leading = int_coeffs.last()?.clone();
    let constant = int_coeffs.first()?.clone();

    let mut candidates = Vec::new();
    for p in divisors(&constant) {
        for q in divisors(&leading) {
            if q.is_zero() {
                continue;
            }
            let candidate = Rational::new(p.clone(), q);
            candidates.push(candidate.clone());
            candidates.push(-candidate);
        }
    }
    candidates.sort();
    candidates.dedup();

    candidates
        .into_iter()
        .find(|candidate| poly.evaluate(candidate).is_zero())
}

fn integer_coeffs(poly: &Poly) -> Vec<BigInt> {
    let mut lcm = BigInt::one();
    for (_, coeff) in poly.coeff_entries() {
        lcm = num_integer::lcm(lcm, coeff.denom().clone());
    }
    let degree = poly.degree().unwrap_or(0);
    let mut coeffs = vec![BigInt::zero(); degree + 1];
    for (exp, coeff) in poly.coeff_entries() {
        let scaled = coeff * Rational::from_integer(lcm.clone());
        coeffs[exp] = scaled.numer().clone();
    }
    coeffs
}

fn divisors(n: &BigInt) -> Vec<BigInt> {
    let abs_n = n.abs();
    if abs_n.is_zero() {
        return vec![BigInt::zero()];
    }
    let mut result = Vec::new();
    let mut d = BigInt::one();
    while &d * &d <= abs_n {
        if (&abs_n % &d).is_zero() {
            result.push(d.clone());
            let other = &abs_n / &d;
            if other != d {
                result.push(other);
            }
        }
        d += 1;
    }
    result.sort();
    result
}

fn perfect_square_rational(r: &Rational) -> Option<Rational> {
    if r.is_negative() {
        return None;
    }
    let num_root = integer_sqrt_exact(r.numer())?;
    let den_root = integer_sqrt_exact(r.denom())?;
    Some(Rational::new(num_root, den_root))
}

fn integer_sqrt_exact(n: &BigInt) -> Option<BigInt> {
    if n.is_negative() {
        return None;
    }
    let root = n.sqrt();
    if &root * &root == *n {
        Some(root)
    } else {
        None
    }
}

/// Split `n` as `k^2 * m` with `m` square-free; returns `(k, m)`.
fn extract_square(n: &BigInt) -> (BigInt, BigInt) {
    let mut outside = BigInt::one();
    let mut inside = n.clone();
    let mut d = BigInt::from(2);
    while &d * &d <= inside {
        let dd = &d * &d;
        while (&inside % &dd).is_zero() {
            inside /= &dd;
            outside *= &d;
        }
        d += 1;
    }
    (outside, inside)
}

fn sort_key(expr: &Expr) -> (u8, Option<Rational>, String) {
    match expr {
        Expr::Constant(r) => (0, Some(r.clone()), String::new()),
        other => (1, None, pretty(other)),
    }
}
