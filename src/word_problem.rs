//! Word-problem extraction: a narrow heuristic that turns short arithmetic
//! questions such as "what plus 5 equals 10" into equation strings.
//!
//! This is pattern matching over a fixed vocabulary, not a grammar. Anything
//! it cannot handle passes through unchanged and fails later in the pipeline.

use std::sync::LazyLock;

use regex::Regex;

static RE_PROSE_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(what|find|solve|how many)\b").expect("valid regex literal"));

/// Whether the raw input reads like prose rather than symbols.
pub fn looks_like_word_problem(s: &str) -> bool {
    RE_PROSE_MARKERS.is_match(s)
}

/// Convert a short natural-language arithmetic question into an equation
/// string. Never fails: inputs that do not match the heuristic are returned
/// unchanged.
///
/// Tokens are lowercased words with surrounding punctuation trimmed. Numeric
/// tokens and arithmetic operation words are collected independently, each
/// preserving its own relative order, and zipped positionally. The trailing
/// `= n` is only emitted when numbers outnumber operations; otherwise the
/// result has no right-hand side and the equation builder rejects it.
pub fn extract(s: &str) -> String {
    let lowered = s.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .collect();

    let numbers: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| t.chars().all(|c| c.is_ascii_digit()))
        .collect();
    let ops: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| matches!(*t, "plus" | "minus" | "times" | "divided"))
        .collect();

    if !(tokens.contains(&"what") && tokens.contains(&"equals")) {
        return s.to_string();
    }

    let mut eq = String::from("x");
    for (op, num) in ops.iter().zip(numbers.iter()) {
        match *op {
            "plus" => eq.push('+'),
            "minus" => eq.push('-'),
            "times" => eq.push('*'),
            "divided" => eq.push('/'),
            _ => unreachable!(),
        }
        eq.push_str(num);
    }
    if numbers.len() > ops.len() {
        if let Some(last) = numbers.last() {
            eq.push('=');
            eq.push_str(last);
        }
    }
    eq
}
