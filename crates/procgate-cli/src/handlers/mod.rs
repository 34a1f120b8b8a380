//! Command handlers.

pub mod http;
