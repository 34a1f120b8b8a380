//! `procgate http`: the composition root for the HTTP server.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use procgate_axum::{AxumContext, ServerConfig, start_server};
use procgate_core::{HostConfig, ProcessExecutor, ProcessRegistry, ServerContext};
use procgate_runtime::{LocalProcessExecutor, bootstrap};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::commands::HttpArgs;

/// Build the server from `args` and serve until interrupted.
pub async fn execute(args: HttpArgs) -> Result<()> {
    let host_config = HostConfig::load(&args.config_path())
        .with_context(|| format!("Failed to load configuration from '{}'", args.config))?;
    info!(config = %host_config.absolute_path().display(), "Loaded configuration");

    let mut registry = ProcessRegistry::new();
    bootstrap(&mut registry);
    let registry = Arc::new(registry);
    info!(processes = registry.len(), "Registered processes");

    let server = ServerContext::new(host_config, Arc::clone(&registry))?
        .with_verbose(args.verbose)
        .with_debug_mode(args.debug);
    let executor: Arc<dyn ProcessExecutor> = Arc::new(LocalProcessExecutor::new(registry));

    let config = ServerConfig::new(args.host.clone(), args.port).with_host_config(server.config());
    let ctx = AxumContext::new(server, executor);

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on_signal(cancel.clone()));

    start_server(ctx, config, cancel).await
}

async fn shutdown_on_signal(cancel: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!("Failed to listen for Ctrl-C: {e}");
                return;
            }
        }
        () = terminate() => {}
    }
    info!("Shutting down...");
    cancel.cancel();
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            warn!("Failed to listen for SIGTERM: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
