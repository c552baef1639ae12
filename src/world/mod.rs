//! # World Runtime
//!
//! The server side of the subsystem: a single actor task owning all session
//! state, plus the cloneable client used to reach it.
//!
//! Processing is strictly sequential - each request (interaction dispatch or
//! a full transaction pipeline) completes before the next one is received,
//! which is what makes transactions atomic without any locking.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::WorldActor;
pub use client::WorldClient;
pub use error::WorldError;
pub use message::{ConnectParams, Response, WorldRequest};
pub use store::{Session, SessionStore};
