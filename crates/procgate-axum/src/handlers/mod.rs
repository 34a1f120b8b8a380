//! HTTP request handlers for the Axum web server.
//!
//! Each submodule exposes a framework-free `handle` function carrying the
//! logic plus the thin Axum route functions that build a per-request
//! [`procgate_core::Context`] and delegate to it.

pub mod config;
pub mod process;
pub mod processes;
