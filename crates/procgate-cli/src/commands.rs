//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the configured processes over HTTP
    Http(HttpArgs),
}

#[derive(Debug, Clone, Args)]
pub struct HttpArgs {
    /// Verbose mode (also raises the log level to debug)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Debug mode
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Address to bind
    #[arg(short = 'H', long, env = "PROCGATE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(short = 'p', long, env = "PROCGATE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Worker threads; zero or less uses the runtime default
    #[arg(
        short = 'w',
        long,
        env = "PROCGATE_WORKERS",
        default_value_t = 4,
        allow_negative_numbers = true
    )]
    pub workers: i32,

    /// Configuration file or directory
    #[arg(short = 'c', long, env = "PROCGATE_CONFIG", default_value = "")]
    pub config: String,
}

impl HttpArgs {
    /// Worker thread count for the runtime, if one was requested.
    pub fn worker_threads(&self) -> Option<usize> {
        usize::try_from(self.workers).ok().filter(|n| *n > 0)
    }

    pub fn config_path(&self) -> PathBuf {
        PathBuf::from(&self.config)
    }
}
