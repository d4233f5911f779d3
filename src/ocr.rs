//! Selection of equation-bearing fragments from OCR output.
//!
//! The recognition engine itself is an external collaborator; the only logic
//! owned here is the predicate deciding which recognized fragments are worth
//! handing to the solving pipeline.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// The letter x doubles as a multiplication sign in photographed arithmetic.
static RE_OPERATOR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[=+\-*/xX]\s*-?[0-9]").expect("valid regex literal"));

/// One recognized region, as reported by the OCR engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl Fragment {
    /// Whether this fragment should be treated as an equation: formula-tagged
    /// fragments always qualify; text-like fragments qualify when they contain
    /// an equality or operator character followed by an optionally negative
    /// digit.
    pub fn is_equation(&self) -> bool {
        if self.kind == "formula" {
            return true;
        }
        is_text_like(&self.kind) && RE_OPERATOR_DIGIT.is_match(self.text.trim())
    }
}

fn is_text_like(kind: &str) -> bool {
    kind == "isolated" || kind.contains("text")
}

/// Trimmed text of every fragment that passes the selection predicate, in
/// the order the engine reported them.
pub fn select_equations(fragments: &[Fragment]) -> Vec<&str> {
    fragments
        .iter()
        .filter(|f| f.is_equation())
        .map(|f| f.text.trim())
        .collect()
}
