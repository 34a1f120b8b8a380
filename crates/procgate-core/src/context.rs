//! Server-level and per-request contexts.
//!
//! A [`ServerContext`] is built once at startup and shared behind an `Arc`.
//! Every request derives its own [`Context`] from it; request contexts are
//! never shared and need no locking.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;
use thiserror::Error;

use crate::config::HostConfig;
use crate::registry::ProcessRegistry;

/// Mode string reported to processes run through the HTTP command.
pub const HTTP_MODE: &str = "http";

/// Errors raised while managing context resources.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Creating the temporary directory tree failed.
    #[error("Failed to create temporary directory {path}: {source}")]
    TemporaryDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Long-lived context shared by all requests.
#[derive(Debug, Clone)]
pub struct ServerContext {
    mode: String,
    config: Arc<HostConfig>,
    verbose: bool,
    debug_mode: bool,
    version: String,
    processes: Arc<ProcessRegistry>,
    temp_root: Arc<TempDir>,
}

impl ServerContext {
    /// Create a server context with a fresh temporary root directory.
    ///
    /// The directory is removed when the last clone of the context (and the
    /// last request context derived from it) is dropped.
    pub fn new(
        config: HostConfig,
        processes: Arc<ProcessRegistry>,
    ) -> Result<Self, ContextError> {
        let temp_root = tempfile::Builder::new()
            .prefix("procgate-")
            .tempdir()
            .map_err(|source| ContextError::TemporaryDirectory {
                path: std::env::temp_dir(),
                source,
            })?;
        tracing::debug!(path = %temp_root.path().display(), "Created temporary root");

        Ok(Self {
            mode: HTTP_MODE.to_string(),
            config: Arc::new(config),
            verbose: false,
            debug_mode: false,
            version: crate::VERSION.to_string(),
            processes,
            temp_root: Arc::new(temp_root),
        })
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn processes(&self) -> &ProcessRegistry {
        &self.processes
    }

    pub const fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn temporary_root(&self) -> &Path {
        self.temp_root.path()
    }

    /// Derive a context for one request.
    ///
    /// `process_name` is only set when the process was resolved from
    /// configuration rather than from the request path.
    pub fn request_context(&self, process_name: Option<String>) -> Context {
        let dir = self
            .temp_root
            .path()
            .join(uuid::Uuid::new_v4().simple().to_string());
        Context {
            mode: self.mode.clone(),
            process_name,
            config: Arc::clone(&self.config),
            verbose: self.verbose,
            debug_mode: self.debug_mode,
            version: self.version.clone(),
            processes: Arc::clone(&self.processes),
            files: TemporaryArea {
                dir,
                counter: AtomicUsize::new(0),
                _root: Arc::clone(&self.temp_root),
            },
        }
    }
}

/// Per-request context.
#[derive(Debug)]
pub struct Context {
    mode: String,
    process_name: Option<String>,
    config: Arc<HostConfig>,
    verbose: bool,
    debug_mode: bool,
    version: String,
    processes: Arc<ProcessRegistry>,
    files: TemporaryArea,
}

impl Context {
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    pub const fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn processes(&self) -> &ProcessRegistry {
        &self.processes
    }

    /// Directory holding this request's temporary files.
    pub fn temporary_directory(&self) -> &Path {
        &self.files.dir
    }

    /// Reserve a path for a temporary file called `name`.
    ///
    /// Only the final component of `name` is used. Each call gets its own
    /// sub-directory, so repeated names within a request never collide.
    pub async fn temporary_file(&self, name: &str) -> Result<PathBuf, ContextError> {
        self.files.reserve(name).await
    }
}

#[derive(Debug)]
struct TemporaryArea {
    dir: PathBuf,
    counter: AtomicUsize,
    _root: Arc<TempDir>,
}

impl TemporaryArea {
    async fn reserve(&self, name: &str) -> Result<PathBuf, ContextError> {
        let file_name = Path::new(name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("file");

        let slot = self.dir.join(self.counter.fetch_add(1, Ordering::Relaxed).to_string());
        tokio::fs::create_dir_all(&slot)
            .await
            .map_err(|source| ContextError::TemporaryDirectory {
                path: slot.clone(),
                source,
            })?;
        Ok(slot.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> ServerContext {
        ServerContext::new(HostConfig::empty("."), Arc::new(ProcessRegistry::new()))
            .unwrap()
            .with_verbose(true)
    }

    #[test]
    fn test_request_context_inherits_flags() {
        let server = server().with_debug_mode(true);
        let ctx = server.request_context(Some("echo".to_string()));

        assert_eq!(ctx.mode(), HTTP_MODE);
        assert!(ctx.verbose());
        assert!(ctx.debug_mode());
        assert_eq!(ctx.process_name(), Some("echo"));
        assert_eq!(ctx.version(), crate::VERSION);
        assert!(ctx.temporary_directory().starts_with(server.temporary_root()));
    }

    #[test]
    fn test_request_contexts_use_distinct_directories() {
        let server = server();
        let a = server.request_context(None);
        let b = server.request_context(None);
        assert_ne!(a.temporary_directory(), b.temporary_directory());
    }

    #[tokio::test]
    async fn test_temporary_file_strips_directories() {
        let server = server();
        let ctx = server.request_context(None);

        let path = ctx.temporary_file("../../etc/passwd").await.unwrap();
        assert_eq!(path.file_name().unwrap(), "passwd");
        assert!(path.starts_with(ctx.temporary_directory()));
        assert!(path.parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn test_same_name_gets_separate_slots() {
        let server = server();
        let ctx = server.request_context(None);

        let first = ctx.temporary_file("a.png").await.unwrap();
        let second = ctx.temporary_file("a.png").await.unwrap();
        assert_ne!(first, second);
        assert_eq!(first.file_name(), second.file_name());
    }

    #[tokio::test]
    async fn test_empty_name_falls_back() {
        let server = server();
        let ctx = server.request_context(None);
        let path = ctx.temporary_file("").await.unwrap();
        assert_eq!(path.file_name().unwrap(), "file");
    }
}
