//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Holds the server context (configuration, registry, temporary root) and
/// the executor that runs processes.
pub type AppState = Arc<AxumContext>;
