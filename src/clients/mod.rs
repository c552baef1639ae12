//! Domain-specific client wrappers.
//!
//! The raw [`WorldClient`](crate::world::WorldClient) speaks wire-shaped
//! requests (stringly-typed operation kinds, raw amounts). The wrappers here
//! give application code a typed API and map transport errors into the
//! domain's error types.

pub mod atm_client;

pub use atm_client::AtmClient;
