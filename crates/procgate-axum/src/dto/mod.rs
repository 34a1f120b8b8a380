//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! These types define the JSON shapes returned to clients. They decouple the
//! host configuration and registry from the external representation.

pub mod config;
pub mod processes;
pub mod status;

pub use config::{Config, Interface};
pub use processes::{Process, Processes};
pub use status::{Health, StatusMessage};
