//! `noop`: ignores its input and produces nothing.

use procgate_core::{ExecutionOptions, Payload, Process, ProcessError, ProcessInterface};

pub struct Noop;

impl Process for Noop {
    fn interface(&self) -> ProcessInterface {
        ProcessInterface::default()
    }

    fn execute(&self, _input: Payload, _options: &ExecutionOptions) -> Result<Payload, ProcessError> {
        Ok(Payload::new())
    }
}
