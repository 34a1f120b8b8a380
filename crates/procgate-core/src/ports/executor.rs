//! Process executor trait definition.
//!
//! The executor is the single seam between the HTTP adapter and the process
//! runtime. Adapters never call a [`super::Process`] directly.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ProcessError;
use crate::{Context, Payload};

/// Execution settings derived from the request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOptions {
    pub mode: String,
    /// Absolute configuration path.
    pub config_path: PathBuf,
    pub verbose: bool,
    pub debug_mode: bool,
}

impl ExecutionOptions {
    pub fn from_context(ctx: &Context) -> Self {
        Self {
            mode: ctx.mode().to_string(),
            config_path: ctx.config().absolute_path(),
            verbose: ctx.verbose(),
            debug_mode: ctx.debug_mode(),
        }
    }
}

/// Runs a named process with an input payload.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    async fn execute(
        &self,
        name: &str,
        input: Payload,
        options: &ExecutionOptions,
    ) -> Result<Payload, ProcessError>;
}
