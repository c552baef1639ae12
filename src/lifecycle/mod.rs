//! System wiring and observability.

pub mod system;
pub mod tracing;

pub use system::{InteractionSystem, StartupError};
pub use tracing::setup_tracing;
