//! `ProcessExecutor` implementation backed by an in-process registry.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use procgate_core::{ExecutionOptions, Payload, ProcessError, ProcessExecutor, ProcessRegistry};
use tracing::{debug, info};

/// Runs registered processes on tokio's blocking thread pool.
///
/// Processes are synchronous and may do heavy work, so they never run on the
/// async worker threads. The executor does no admission control; concurrent
/// requests run concurrently up to the blocking pool's limit.
pub struct LocalProcessExecutor {
    registry: Arc<ProcessRegistry>,
}

impl LocalProcessExecutor {
    pub const fn new(registry: Arc<ProcessRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ProcessExecutor for LocalProcessExecutor {
    async fn execute(
        &self,
        name: &str,
        input: Payload,
        options: &ExecutionOptions,
    ) -> Result<Payload, ProcessError> {
        let process = self
            .registry
            .get(name)
            .ok_or_else(|| ProcessError::NotFound(name.to_string()))?;

        debug!(process = %name, inputs = input.len(), mode = %options.mode, "Executing process");
        let started = Instant::now();

        let options = options.clone();
        let output = tokio::task::spawn_blocking(move || process.execute(input, &options))
            .await
            .map_err(|e| ProcessError::Aborted(e.to_string()))??;

        info!(
            process = %name,
            outputs = output.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Process finished"
        );
        Ok(output)
    }
}
