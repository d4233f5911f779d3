//! Serializable boundary payloads for the solving pipeline.

use serde::{Deserialize, Serialize};

/// Structured result handed to the surrounding service layer. Serializes to
/// `{"solutions": [...], "steps": [...]}` on success and `{"error": "..."}`
/// on failure; no partial results ever accompany an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SolveReply {
    Solved {
        solutions: Vec<String>,
        steps: Vec<String>,
    },
    Failed {
        error: String,
    },
}

impl SolveReply {
    pub fn is_error(&self) -> bool {
        matches!(self, SolveReply::Failed { .. })
    }
}
