//! Sparse univariate polynomials with exact rational coefficients.

use std::collections::BTreeMap;

use crate::expr::{Expr, Rational};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly {
    coeffs: BTreeMap<usize, Rational>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly {
            coeffs: BTreeMap::new(),
        }
    }

    pub fn one() -> Self {
        Poly::from_constant(Rational::one())
    }

    pub fn from_constant(c: Rational) -> Self {
        let mut coeffs = BTreeMap::new();
        if !c.is_zero() {
            coeffs.insert(0, c);
        }
        Poly { coeffs }
    }

    /// The polynomial `x`.
    pub fn variable() -> Self {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(1, Rational::one());
        Poly { coeffs }
    }

    /// The polynomial `x - r`.
    pub fn linear_factor(root: &Rational) -> Self {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(1, Rational::one());
        if !root.is_zero() {
            coeffs.insert(0, -root.clone());
        }
        Poly { coeffs }
    }

    /// Convert an expression tree to a polynomial in `var`, or `None` when
    /// the expression is not polynomial (nonconstant denominators, negative
    /// or fractional exponents, foreign symbols).
    pub fn from_expr(expr: &Expr, var: &str) -> Option<Self> {
        let (numer, denom) = Poly::rational_form(expr, var)?;
        match denom.degree() {
            Some(0) => Some(numer.scale(&(Rational::one() / denom.coeff(0)))),
            _ => None,
        }
    }

    /// Express the tree as a quotient of two polynomials in `var`. `None`
    /// when the unknown sits in an unsupported position (fractional
    /// exponent, foreign symbol, identically zero denominator).
    pub fn rational_form(expr: &Expr, var: &str) -> Option<(Poly, Poly)> {
        match expr {
            Expr::Variable(v) if v == var => Some((Poly::variable(), Poly::one())),
            Expr::Variable(_) => None,
            Expr::Constant(c) => Some((Poly::from_constant(c.clone()), Poly::one())),
            Expr::Add(a, b) => {
                let (na, da) = Poly::rational_form(a, var)?;
                let (nb, db) = Poly::rational_form(b, var)?;
                Some((na * db.clone() + nb * da.clone(), da * db))
            }
            Expr::Sub(a, b) => {
                let (na, da) = Poly::rational_form(a, var)?;
                let (nb, db) = Poly::rational_form(b, var)?;
                Some((na * db.clone() - nb * da.clone(), da * db))
            }
            Expr::Mul(a, b) => {
                let (na, da) = Poly::rational_form(a, var)?;
                let (nb, db) = Poly::rational_form(b, var)?;
                Some((na * nb, da * db))
            }
            Expr::Div(a, b) => {
                let (na, da) = Poly::rational_form(a, var)?;
                let (nb, db) = Poly::rational_form(b, var)?;
                if nb.is_zero() {
                    return None;
                }
                Some((na * db, da * nb))
            }
            Expr::Neg(inner) => {
                let (n, d) = Poly::rational_form(inner, var)?;
                Some((-n, d))
            }
            Expr::Pow(base, exp) => {
                let k = extract_integer(exp)?;
                let (n, d) = Poly::rational_form(base, var)?;
                if k >= 0 {
                    Some((n.pow(k as usize), d.pow(k as usize)))
                } else if n.is_zero() {
                    None
                } else {
                    Some((d.pow(-k as usize), n.pow(-k as usize)))
                }
            }
        }
    }

    pub fn degree(&self) -> Option<usize> {
        self.coeffs.keys().next_back().cloned()
    }

    pub fn leading_coeff(&self) -> Rational {
        self.degree()
            .and_then(|d| self.coeffs.get(&d).cloned())
            .unwrap_or_else(Rational::zero)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs.get(&0).map(|c| c.is_one()).unwrap_or(false)
    }

    pub fn coeff(&self, power: usize) -> Rational {
        self.coeffs
            .get(&power)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    pub fn coeff_entries(&self) -> impl Iterator<Item = (usize, Rational)> + '_ {
        self.coeffs.iter().map(|(e, c)| (*e, c.clone()))
    }

    pub fn pow(&self, exp: usize) -> Self {
        if exp == 0 {
            return Poly::one();
        }
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n % 2 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            n /= 2;
        }
        result
    }

    pub fn scale(&self, k: &Rational) -> Self {
        if k.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = BTreeMap::new();
        for (exp, coeff) in &self.coeffs {
            coeffs.insert(*exp, coeff.clone() * k.clone());
        }
        Poly { coeffs }
    }

    pub fn derivative(&self) -> Self {
        let mut coeffs = BTreeMap::new();
        for (exp, coeff) in &self.coeffs {
            if *exp == 0 {
                continue;
            }
            let factor = Rational::from_integer(BigInt::from(*exp as i64));
            coeffs.insert(exp - 1, coeff.clone() * factor);
        }
        Poly { coeffs }
    }

    pub fn monic(&self) -> Self {
        let lc = self.leading_coeff();
        if lc.is_zero() {
            return self.clone();
        }
        self.scale(&(Rational::one() / lc))
    }

    pub fn evaluate(&self, x: &Rational) -> Rational {
        let mut acc = Rational::zero();
        let mut pow = Rational::one();
        for exp in 0..=self.degree().unwrap_or(0) {
            if let Some(coeff) = self.coeffs.get(&exp) {
                acc += coeff * pow.clone();
            }
            pow *= x.clone();
        }
        acc
    }

    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        if divisor.is_zero() {
            return (Poly::zero(), self.clone());
        }
        let mut remainder = self.clone();
        let mut quotient = Poly::zero();
        let divisor_lc = divisor.leading_coeff();

        while let (Some(r_deg), Some(div_deg)) = (remainder.degree(), divisor.degree()) {
            if r_deg < div_deg {
                break;
            }
            let power = r_deg - div_deg;
            let coeff = remainder.leading_coeff() / divisor_lc.clone();
            let mut term = BTreeMap::new();
            term.insert(power, coeff);
            let term_poly = Poly { coeffs: term };
            quotient = quotient + term_poly.clone();
            remainder = remainder - &(term_poly * divisor.clone());
        }

        (quotient, remainder)
    }

    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let (q, r) = self.div_rem(divisor);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    pub fn linear_root(&self) -> Option<Rational> {
        if self.degree()? != 1 {
            return None;
        }
        let a = self.coeff(1);
        let b = self.coeff(0);
        if a.is_zero() {
            None
        } else {
            Some(-b / a)
        }
    }

    pub fn gcd(a: &Poly, b: &Poly) -> Poly {
        if b.is_zero() {
            return a.monic();
        }
        let (_, r) = a.div_rem(b);
        if r.is_zero() {
            return b.monic();
        }
        Poly::gcd(b, &r)
    }

    /// Yun-style square-free decomposition: distinct square-free parts with
    /// their multiplicities.
    pub fn square_free_decomposition(&self) -> Vec<(Poly, usize)> {
        if self.is_zero() || self.degree().unwrap_or(0) == 0 {
            return Vec::new();
        }

        let mut result = Vec::new();
        let mut i = 1;
        let mut g = Poly::gcd(self, &self.derivative());
        let mut y = self.div_exact(&g).unwrap_or_else(Poly::zero);

        while !y.is_one() {
            let z = Poly::gcd(&y, &g);
            let factor = y.div_exact(&z).unwrap_or_else(Poly::zero);
            if !factor.is_one() {
                result.push((factor, i));
            }
            y = z.clone();
            g = g.div_exact(&z).unwrap_or_else(Poly::zero);
            i += 1;
        }

        if !g.is_one() {
            for (part, mult) in g.square_free_decomposition() {
                result.push((part, mult + i - 1));
            }
        }

        result
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        let mut coeffs = self.coeffs;
        for (exp, coeff) in rhs.coeffs {
            let entry = coeffs.entry(exp).or_insert_with(Rational::zero);
            *entry += coeff;
            if entry.is_zero() {
                coeffs.remove(&exp);
            }
        }
        Poly { coeffs }
    }
}

impl std::ops::Add<&Poly> for Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        self + rhs.clone()
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        let mut coeffs = self.coeffs;
        for (exp, coeff) in rhs.coeffs {
            let entry = coeffs.entry(exp).or_insert_with(Rational::zero);
            *entry -= coeff;
            if entry.is_zero() {
                coeffs.remove(&exp);
            }
        }
        Poly { coeffs }
    }
}

impl std::ops::Sub<&Poly> for Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        self - rhs.clone()
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        let mut coeffs = BTreeMap::new();
        for (exp_a, coeff_a) in self.coeffs {
            for (exp_b, coeff_b) in &rhs.coeffs {
                let exp = exp_a + exp_b;
                let entry = coeffs.entry(exp).or_insert_with(Rational::zero);
                *entry += coeff_a.clone() * coeff_b.clone();
                if entry.is_zero() {
                    coeffs.remove(&exp);
                }
            }
        }
        Poly { coeffs }
    }
}

impl std::ops::Mul<&Poly> for Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        self * rhs.clone()
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        let mut coeffs = BTreeMap::new();
        for (exp, coeff) in self.coeffs {
            coeffs.insert(exp, -coeff);
        }
        Poly { coeffs }
    }
}

fn extract_integer(exp: &Expr) -> Option<i64> {
    match exp {
        Expr::Constant(c) if c.is_integer() => c.to_integer().to_i64(),
        Expr::Neg(inner) => extract_integer(inner).map(|k| -k),
        _ => None,
    }
}
