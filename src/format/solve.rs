use crate::equation::CanonicalEquation;
use crate::solver::Solution;

use super::pretty;

/// String-rendered solution values in their canonical order. The empty and
/// unbounded classifications render to an empty list; the step trace carries
/// the distinction for human readers.
pub fn solution_strings(solution: &Solution) -> Vec<String> {
    match solution {
        Solution::Values(values) => values.iter().map(pretty).collect(),
        Solution::Empty | Solution::Unbounded => Vec::new(),
    }
}

/// Human-readable derivation trace: input, canonical zero-form, solution
/// set, and a fixed verification reminder. Display only, never consumed by
/// control flow.
pub fn step_trace(input: &str, eq: &CanonicalEquation, solution: &Solution) -> Vec<String> {
    let solutions_line = match solution {
        Solution::Values(_) => format!("Solutions: {}", solution_strings(solution).join(", ")),
        Solution::Empty => "Solutions: no solution".to_string(),
        Solution::Unbounded => format!("Solutions: every value of {} (identity)", eq.unknown),
    };
    vec![
        format!("Original: {input}"),
        format!("Rewritten: {} = 0", pretty(&eq.zero_form)),
        solutions_line,
        "Verify: Plug values back in.".to_string(),
    ]
}
