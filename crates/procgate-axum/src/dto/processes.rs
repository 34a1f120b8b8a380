//! Process listing DTOs.

use serde::{Deserialize, Serialize};

/// One registered process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Process {
    pub name: String,
}

/// Response body of `GET /api/processes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Processes {
    pub processes: Vec<Process>,
}
