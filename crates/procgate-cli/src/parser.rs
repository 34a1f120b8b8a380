//! Main CLI parser.

use clap::Parser;

use crate::commands::Commands;

/// Serve host processes over HTTP.
#[derive(Debug, Parser)]
#[command(name = "procgate")]
#[command(about = "Expose configured processes through an HTTP API")]
#[command(version = procgate_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
