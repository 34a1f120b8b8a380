//! Axum server bootstrap.
//!
//! Holds the adapter's own settings and the context shared with every
//! handler, and runs the server until the cancellation token fires.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use procgate_core::{HostConfig, ProcessExecutor, ServerContext};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config_keys;

/// Default cap on request bodies (512 MiB).
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 512 * 1024 * 1024;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Reflect any origin, with credentials.
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Largest request body accepted, in bytes.
    pub max_upload_size: usize,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            static_dir: default_static_dir(),
            cors: CorsConfig::default(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    /// Apply the adapter keys found in the host configuration.
    ///
    /// A relative `static_dir` is resolved against the configuration's
    /// location.
    #[must_use]
    pub fn with_host_config(mut self, config: &HostConfig) -> Self {
        if let Some(dir) = config.get_string(config_keys::STATIC_DIR) {
            let dir = PathBuf::from(dir);
            self.static_dir = if dir.is_relative() {
                config_base_dir(config).join(dir)
            } else {
                dir
            };
        }
        if let Some(origins) = config.get_string_list(config_keys::CORS_ORIGINS) {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        if let Some(size) = config
            .get(config_keys::MAX_UPLOAD_SIZE)
            .and_then(serde_json::Value::as_u64)
            .and_then(|size| usize::try_from(size).ok())
        {
            self.max_upload_size = size;
        }
        self
    }

    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub const fn with_max_upload_size(mut self, bytes: usize) -> Self {
        self.max_upload_size = bytes;
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

fn config_base_dir(config: &HostConfig) -> PathBuf {
    let path = config.absolute_path();
    if path.is_dir() {
        path
    } else {
        path.parent().map(PathBuf::from).unwrap_or(path)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Configuration, registry and temporary root.
    pub server: ServerContext,
    /// Runs processes on behalf of the handlers.
    pub executor: Arc<dyn ProcessExecutor>,
}

impl AxumContext {
    pub fn new(server: ServerContext, executor: Arc<dyn ProcessExecutor>) -> Self {
        Self { server, executor }
    }
}

/// Serve the adapter until `cancel` is triggered.
pub async fn start_server(
    ctx: AxumContext,
    config: ServerConfig,
    cancel: CancellationToken,
) -> Result<()> {
    let app = crate::routes::create_router(ctx, &config);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        static_dir = %config.static_dir.display(),
        max_upload_size = config.max_upload_size,
        "procgate listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("procgate server shut down");
    Ok(())
}
