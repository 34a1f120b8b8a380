//! `procgate` command-line interface.
//!
//! The binary parses arguments, initialises logging, builds the tokio runtime
//! and hands over to the matching command handler.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs
use dotenvy as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use commands::{Commands, HttpArgs};
pub use parser::Cli;
