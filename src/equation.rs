//! Equation building: split a normalized string on its equality sign and
//! produce the canonical zero-form `lhs - (rhs)` over one designated unknown.

use crate::error::{Result, Side, SolveError};
use crate::expr::Expr;
use crate::parser::parse_expr;

/// An equation rewritten as `zero_form = 0`, to be solved for `unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalEquation {
    pub zero_form: Expr,
    pub unknown: String,
}

/// Build a canonical equation from a normalized string.
///
/// Fails when the string does not contain exactly one `=`, when either side
/// is empty, when the zero-form does not parse, or when a free symbol other
/// than the unknown appears. The right-hand side is parenthesized so its
/// top-level additions and subtractions keep their sign under subtraction.
pub fn build(normalized: &str, unknown: &str) -> Result<CanonicalEquation> {
    let parts: Vec<&str> = normalized.split('=').collect();
    if parts.len() != 2 {
        return Err(SolveError::MalformedEquation(format!(
            "expected exactly one '=', found {} in {normalized:?}",
            parts.len() - 1
        )));
    }

    let lhs = parts[0].trim();
    let rhs = parts[1].trim();
    if lhs.is_empty() {
        return Err(SolveError::EmptySide(Side::Left));
    }
    if rhs.is_empty() {
        return Err(SolveError::EmptySide(Side::Right));
    }

    let zero_form = parse_expr(&format!("{lhs}-({rhs})"))?;
    for symbol in zero_form.variables() {
        if symbol != unknown {
            return Err(SolveError::Parse(format!(
                "undeclared symbol '{symbol}' (solving for '{unknown}')"
            )));
        }
    }

    Ok(CanonicalEquation {
        zero_form,
        unknown: unknown.to_string(),
    })
}
