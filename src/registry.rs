//! # Interaction Registry
//!
//! The category → handler table. Feature modules (the ATM, a fuel pump, a
//! shop front) register themselves here during startup; at request time the
//! dispatcher looks the category up and routes per descriptor.
//!
//! Registration is a bounded startup phase. Once [`InteractionRegistry::seal`]
//! is called, further registration is a hard error - a descriptor appearing
//! late is a wiring bug, and failing fast beats silently misrouting requests
//! for the rest of the process lifetime.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{ActorId, Category, Vec3};
use crate::notify::Notifier;

/// Identifier of an event routed to a client or raised in-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct EventName(pub &'static str);

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Everything an inline callback gets to work with: who interacted, where
/// the resolved object sits, and the outbound sink.
pub struct InteractionCtx<'a> {
    pub actor: ActorId,
    pub position: Vec3,
    pub notifier: &'a dyn Notifier,
}

pub type InteractionCallback = Box<dyn Fn(InteractionCtx<'_>) + Send + Sync>;

/// How a resolved interaction of a category is executed. Exactly one variant
/// per entry; the dispatcher matches exhaustively.
pub enum InteractionDescriptor {
    /// Run a callback inline, in the world actor's execution context.
    LocalCallback(InteractionCallback),
    /// Delegate back to the originating actor's own execution context
    /// (client-side follow-up, e.g. opening a UI at the resolved position).
    RemoteActor(EventName),
    /// Raise a same-process event on the dispatcher's server bus.
    ServerEvent(EventName),
}

impl fmt::Debug for InteractionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalCallback(_) => f.write_str("LocalCallback(..)"),
            Self::RemoteActor(event) => f.debug_tuple("RemoteActor").field(event).finish(),
            Self::ServerEvent(event) => f.debug_tuple("ServerEvent").field(event).finish(),
        }
    }
}

/// Errors raised at registration time.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// Registration attempted after the startup phase closed.
    #[error("registry is sealed; cannot register category '{0}'")]
    Sealed(String),
}

/// Mutable category → descriptor table, populated during startup and
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    entries: HashMap<Category, InteractionDescriptor>,
    sealed: bool,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for a category. Keys are
    /// case-insensitive; last write wins, with a warning on overwrite.
    pub fn register(
        &mut self,
        raw_category: &str,
        descriptor: InteractionDescriptor,
    ) -> Result<(), RegistryError> {
        let category = Category::normalize(raw_category);
        if self.sealed {
            return Err(RegistryError::Sealed(category.to_string()));
        }
        if let Some(previous) = self.entries.insert(category.clone(), descriptor) {
            warn!(%category, ?previous, "Interaction descriptor overwritten");
        } else {
            debug!(%category, "Interaction registered");
        }
        Ok(())
    }

    pub fn lookup(&self, category: &Category) -> Option<&InteractionDescriptor> {
        self.entries.get(category)
    }

    /// Closes the startup phase. Lookups continue; registration errors.
    pub fn seal(&mut self) {
        self.sealed = true;
        debug!(entries = self.entries.len(), "Interaction registry sealed");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut registry = InteractionRegistry::new();
        registry
            .register("AtM", InteractionDescriptor::RemoteActor(EventName("open")))
            .unwrap();

        assert!(registry.lookup(&Category::normalize("atm")).is_some());
        assert!(registry.lookup(&Category::normalize(" ATM ")).is_some());
    }

    #[test]
    fn last_write_wins_on_overwrite() {
        let mut registry = InteractionRegistry::new();
        registry
            .register("atm", InteractionDescriptor::RemoteActor(EventName("first")))
            .unwrap();
        registry
            .register("atm", InteractionDescriptor::RemoteActor(EventName("second")))
            .unwrap();

        assert_eq!(registry.len(), 1);
        match registry.lookup(&Category::normalize("atm")) {
            Some(InteractionDescriptor::RemoteActor(event)) => assert_eq!(event.0, "second"),
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn sealed_registry_rejects_registration() {
        let mut registry = InteractionRegistry::new();
        registry.seal();

        let result = registry.register(
            "atm",
            InteractionDescriptor::ServerEvent(EventName("late")),
        );
        assert_eq!(result, Err(RegistryError::Sealed("atm".to_string())));
        assert!(registry.is_empty());
    }
}
