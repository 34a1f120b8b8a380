//! Local process runtime for procgate.
//!
//! Provides [`LocalProcessExecutor`], which runs processes from a
//! [`procgate_core::ProcessRegistry`] on tokio's blocking pool, and the
//! built-in processes registered by [`bootstrap`].
#![deny(unsafe_code)]

mod executor;
pub mod processes;

pub use executor::LocalProcessExecutor;
pub use processes::bootstrap;
