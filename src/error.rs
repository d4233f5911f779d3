use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

/// Which side of the equality sign turned out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("malformed equation: {0}")]
    MalformedEquation(String),
    #[error("empty {0} side of equation")]
    EmptySide(Side),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported form: {0}")]
    UnsupportedForm(String),
    #[error("solve error: {0}")]
    Engine(String),
}
