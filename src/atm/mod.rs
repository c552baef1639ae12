//! # ATM Feature
//!
//! The one transaction-capable interaction category shipped with the crate.
//!
//! ## Structure
//!
//! - [`actions`] - wire-level operation kinds and raw inbound values
//! - [`error`] - [`TransactionError`] for type-safe rejection reasons
//! - [`handlers`] - the validation pipeline and balance mutations
//! - [`register`] - startup hook installing the `"atm"` category
//!
//! ## Flow
//!
//! An actor interacting with the `"atm"` category is delegated back to its
//! own execution context via [`OPEN_ATM`] (the client opens the ATM UI at
//! the resolved position). The UI then submits transaction requests, which
//! land in [`handlers::handle_action`] inside the world actor's event loop.

pub mod actions;
pub mod error;
pub mod handlers;

pub use actions::{RawAmount, RawTargetId, TransactionKind};
pub use error::TransactionError;
pub use handlers::{handle_action, ActorDirectory};

use crate::registry::{EventName, InteractionDescriptor, InteractionRegistry, RegistryError};

/// Category key clients send to interact with an ATM.
pub const ATM_CATEGORY: &str = "atm";

/// Client event that opens the ATM UI at the resolved position.
pub const OPEN_ATM: EventName = EventName("interaction:atm:open");

/// Installs the ATM category into the registry. Called once at startup.
pub fn register(registry: &mut InteractionRegistry) -> Result<(), RegistryError> {
    registry.register(ATM_CATEGORY, InteractionDescriptor::RemoteActor(OPEN_ATM))
}
