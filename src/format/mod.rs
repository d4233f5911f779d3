//! Formatting helpers for rendering expressions and solver output.

pub mod expr;
pub mod solve;

pub use expr::pretty;
pub use solve::{solution_strings, step_trace};
