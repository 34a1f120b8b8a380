//! Core domain types and port definitions for procgate.
//!
//! This crate owns the host-side model the HTTP adapter works against:
//! typed [`Object`]s collected in a [`Payload`], the read-only
//! [`HostConfig`], the [`ServerContext`] / [`Context`] pair, the
//! [`ProcessRegistry`], and the [`ProcessExecutor`] port through which
//! processes are run.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod context;
pub mod object;
pub mod payload;
pub mod ports;
pub mod registry;

/// Version reported by `/api/config`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{ConfigError, HostConfig};
pub use context::{Context, ContextError, HTTP_MODE, ServerContext};
pub use object::{Object, ObjectData, ObjectError, ObjectKind};
pub use payload::Payload;
pub use ports::{ExecutionOptions, Process, ProcessError, ProcessExecutor, ProcessInterface};
pub use registry::ProcessRegistry;
