//! Built-in processes.
//!
//! These are always available so a freshly started server has something to
//! execute. Hosts embedding procgate register their own processes next to
//! them.

mod echo;
mod inspect;
mod noop;

use std::sync::Arc;

use procgate_core::ProcessRegistry;

pub use echo::Echo;
pub use inspect::Inspect;
pub use noop::Noop;

/// Register the built-in processes, in the order they are listed to clients.
pub fn bootstrap(registry: &mut ProcessRegistry) {
    registry.register("echo", Arc::new(Echo));
    registry.register("inspect", Arc::new(Inspect));
    registry.register("noop", Arc::new(Noop));
}
