//! Port definitions (trait abstractions) for the host runtime.
//!
//! Ports define the interfaces the HTTP adapter expects from the process
//! runtime. They contain no execution details and use only domain types.

pub mod executor;
pub mod process;

use thiserror::Error;

pub use executor::{ExecutionOptions, ProcessExecutor};
pub use process::{Process, ProcessInterface};

/// Domain-specific errors for process execution.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// No process is registered under the given name.
    #[error("Process {0} not found")]
    NotFound(String),

    /// The process rejected its input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The process ran and failed.
    #[error("Process failed: {0}")]
    Failed(String),

    /// The process panicked or its task was cancelled.
    #[error("Process aborted: {0}")]
    Aborted(String),
}

impl From<crate::ObjectError> for ProcessError {
    fn from(err: crate::ObjectError) -> Self {
        Self::Failed(err.to_string())
    }
}
