//! `echo`: hands the input back unchanged.

use procgate_core::{ExecutionOptions, Payload, Process, ProcessError, ProcessInterface};

pub struct Echo;

impl Process for Echo {
    fn interface(&self) -> ProcessInterface {
        ProcessInterface::new(["any"], ["any"])
    }

    fn execute(&self, input: Payload, _options: &ExecutionOptions) -> Result<Payload, ProcessError> {
        Ok(input)
    }
}
