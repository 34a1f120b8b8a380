//! Process trait definition.

use serde::{Deserialize, Serialize};

use super::{ExecutionOptions, ProcessError};
use crate::Payload;

/// Declared inputs and outputs of a process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessInterface {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

impl ProcessInterface {
    pub fn new<I, O>(input: I, output: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: output.into_iter().map(Into::into).collect(),
        }
    }
}

/// A named unit of work: consumes a payload and produces a payload.
///
/// Implementations are synchronous and may block; executors are expected to
/// run them off the async worker threads.
pub trait Process: Send + Sync {
    /// Interface descriptor shown to clients.
    fn interface(&self) -> ProcessInterface;

    /// Run the process.
    fn execute(&self, input: Payload, options: &ExecutionOptions) -> Result<Payload, ProcessError>;
}
