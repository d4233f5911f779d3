//! Text normalization: rewrite loose equation strings into strict algebraic syntax.
//!
//! The pipeline is a fixed sequence of pure rewrite rules. Order matters: the
//! implicit-multiplication insertions run on space-collapsed text, the LaTeX
//! exponent rewrite runs before the bare-caret rewrite, and whitespace is only
//! stripped at the very end. The composed function is idempotent.

use std::sync::LazyLock;

use regex::Regex;

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex literal"));
static RE_DIGIT_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)\s*([a-zA-Z(])").expect("valid regex literal"));
static RE_CLOSE_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\))\s*([0-9a-zA-Z])").expect("valid regex literal"));
static RE_LETTER_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z])\s*([0-9(])").expect("valid regex literal"));

/// Rewrite a raw equation string into unambiguous algebraic syntax.
///
/// Total: odd input degrades to odd output rather than an error; the parser
/// is the validation gate.
pub fn normalize(input: &str) -> String {
    let s = strip_delimiters(input);
    let s = collapse_whitespace(&s);
    let s = insert_explicit_mul(&s);
    let s = rewrite_braced_pow(&s);
    let s = rewrite_caret(&s);
    strip_spaces(&s)
}

/// Trim surrounding whitespace and math-mode `$` markers.
pub fn strip_delimiters(s: &str) -> String {
    s.trim_matches(|c: char| c == '$' || c.is_whitespace())
        .to_string()
}

/// Collapse internal whitespace runs to single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    RE_WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Insert `*` where juxtaposition means multiplication.
///
/// Three non-reflexive passes in fixed order: digit before letter or `(`,
/// then `)` before digit or letter, then letter before digit or `(`. A
/// three-way adjacency such as `2x(` is fully resolved by the end.
pub fn insert_explicit_mul(s: &str) -> String {
    let s = RE_DIGIT_SYMBOL.replace_all(s, "${1}*${2}");
    let s = RE_CLOSE_SYMBOL.replace_all(&s, "${1}*${2}");
    RE_LETTER_SYMBOL.replace_all(&s, "${1}*${2}").to_string()
}

/// Rewrite each LaTeX exponent `^{...}` to `**(...)`, left to right,
/// matching the first `}` after each `^{`. An occurrence with no closing
/// brace is left untouched.
pub fn rewrite_braced_pow(s: &str) -> String {
    let mut out = s.to_string();
    loop {
        let Some(start) = out.find("^{") else {
            break;
        };
        let Some(offset) = out[start + 2..].find('}') else {
            break;
        };
        let end = start + 2 + offset;
        let power = out[start + 2..end].to_string();
        out = format!("{}**({}){}", &out[..start], power, &out[end + 1..]);
    }
    out
}

/// Rewrite any remaining bare `^` to the canonical power operator.
pub fn rewrite_caret(s: &str) -> String {
    s.replace('^', "**")
}

/// Remove all whitespace.
pub fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
