//! End-to-end solving pipeline behind an explicitly constructed context.
//!
//! The context carries the per-process configuration and is constructed once
//! at startup, then shared by reference across request handlers; there is no
//! ambient global state. Each call is an independent pure computation.

use tracing::debug;

use crate::equation;
use crate::error::Result;
use crate::format;
use crate::normalize::normalize;
use crate::solver;
use crate::wire::SolveReply;
use crate::word_problem;

#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol the solver treats as the variable; any other free symbol in the
    /// input is rejected.
    pub unknown: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            unknown: "x".to_string(),
        }
    }
}

/// Stateless solving context, safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Context {
    config: Config,
}

impl Context {
    pub fn new() -> Self {
        Context::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Context { config }
    }

    pub fn unknown(&self) -> &str {
        &self.config.unknown
    }

    /// Solve a raw equation or word-problem string, returning the structured
    /// reply for the service boundary. Any stage failure short-circuits into
    /// a single error reply.
    pub fn solve_text(&self, raw: &str) -> SolveReply {
        match self.solve_inner(raw) {
            Ok(reply) => reply,
            Err(e) => SolveReply::Failed {
                error: e.to_string(),
            },
        }
    }

    fn solve_inner(&self, raw: &str) -> Result<SolveReply> {
        let input = if word_problem::looks_like_word_problem(raw) {
            let extracted = word_problem::extract(raw);
            debug!(raw = raw, extracted = extracted.as_str(), "word problem extracted");
            extracted
        } else {
            raw.to_string()
        };

        let normalized = normalize(&input);
        debug!(normalized = normalized.as_str(), "input normalized");

        let eq = equation::build(&normalized, &self.config.unknown)?;
        let solution = solver::solve(&eq)?;
        debug!(?solution, "equation solved");

        Ok(SolveReply::Solved {
            solutions: format::solution_strings(&solution),
            steps: format::step_trace(&input, &eq, &solution),
        })
    }
}
