//! Axum HTTP adapter exposing a process registry.
//!
//! Clients discover the configured processes under `/api`, submit multipart
//! forms to run them and receive the selected output as a file.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use procgate_runtime as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod config_keys;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod intake;
pub mod routes;
pub mod state;

pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
