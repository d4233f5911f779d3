//! Equation normalization and solving core: turns loosely-formatted
//! mathematical input (informal algebra, LaTeX fragments, short arithmetic
//! word problems) into a canonical symbolic equation, solves it for a single
//! unknown, and reports exact solutions with a human-readable derivation
//! trace.

pub mod equation;
pub mod error;
pub mod expr;
pub mod format;
pub mod normalize;
pub mod ocr;
pub mod parser;
pub mod pipeline;
pub mod polynomial;
pub mod solver;
pub mod wire;
pub mod word_problem;

pub use equation::{build, CanonicalEquation};
pub use error::{Result, Side, SolveError};
pub use expr::{add, div, mul, neg, one, pow, rational, sub, zero, Expr, Rational};
pub use format::{pretty, solution_strings, step_trace};
pub use normalize::normalize;
pub use ocr::{select_equations, Fragment};
pub use parser::parse_expr;
pub use pipeline::{Config, Context};
pub use polynomial::Poly;
pub use solver::{solve, Solution};
pub use wire::SolveReply;
