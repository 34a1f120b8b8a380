//! CLI entry point.
//!
//! The runtime is built by hand so the worker count can come from the
//! command line.

use anyhow::Result;
use clap::Parser;

use procgate_cli::{Cli, Commands, handlers, logging};

fn build_runtime(worker_threads: Option<usize>) -> Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = worker_threads {
        builder.worker_threads(threads);
    }
    Ok(builder.build()?)
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Http(args) => {
            logging::init(args.verbose, args.debug);
            let runtime = build_runtime(args.worker_threads())?;
            runtime.block_on(handlers::http::execute(args))
        }
    }
}
