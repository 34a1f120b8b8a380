//! Server description DTOs.

use serde::{Deserialize, Serialize};

/// Declared inputs and outputs shown on the index page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interface {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

/// Response body of `GET /api/config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub version: String,
    pub description: String,
    pub copyright: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<Interface>,
}
