//! Small status bodies.

use serde::{Deserialize, Serialize};

/// Body returned when a process succeeds without output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

impl StatusMessage {
    pub fn no_output() -> Self {
        Self {
            status: "success".to_string(),
            message: "no output".to_string(),
        }
    }
}

/// Body of `GET /healthz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: bool,
}
