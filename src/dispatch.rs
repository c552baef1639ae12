//! # Interaction Dispatcher
//!
//! The request path for "actor pressed interact": normalize the category,
//! find the nearest qualifying object in the actor's zone, gate on distance,
//! then route through the registry.
//!
//! Failure taxonomy, in order:
//! - no objects / unknown category → silent no-op ("nothing nearby");
//! - beyond the configured range → one "too far away" message, and the
//!   registry is never consulted;
//! - unregistered category → one "does not exist" message.
//!
//! Every path is terminal for the request; there are no retries and at most
//! one actor-visible message.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::InteractionConfig;
use crate::locale::Locale;
use crate::model::{ActorId, Category, Vec3, WorldMap};
use crate::notify::Notifier;
use crate::registry::{EventName, InteractionCtx, InteractionDescriptor, InteractionRegistry};
use crate::spatial;
use crate::world::Session;

/// A same-process event raised for descriptors that resolve server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEvent {
    pub event: EventName,
    pub actor: ActorId,
    pub position: Vec3,
}

/// Routes interaction requests. Owns the sealed registry, the locale
/// catalog, and the sending half of the server event bus.
pub struct InteractionDispatcher {
    registry: InteractionRegistry,
    locale: Locale,
    max_distance: f64,
    server_events: mpsc::UnboundedSender<ServerEvent>,
}

impl InteractionDispatcher {
    /// Builds the dispatcher and hands back the receiving half of the server
    /// event bus for feature modules to consume.
    pub fn new(
        registry: InteractionRegistry,
        locale: Locale,
        config: &InteractionConfig,
    ) -> (Self, mpsc::UnboundedReceiver<ServerEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let dispatcher = Self {
            registry,
            locale,
            max_distance: config.max_interaction_distance,
            server_events: sender,
        };
        (dispatcher, receiver)
    }

    /// Handles one interaction request from a connected actor.
    pub fn handle_interaction(
        &self,
        zones: &WorldMap,
        session: &Session,
        raw_category: &str,
        notifier: &dyn Notifier,
    ) {
        let category = Category::normalize(raw_category);

        let Some(zone) = zones.zone(session.zone) else {
            debug!(id = %session.id, zone = %session.zone, "No data for zone");
            return;
        };
        if zone.of_category(&category).is_empty() {
            debug!(id = %session.id, %category, "Nothing to interact with");
            return;
        }

        let Some(position) = spatial::nearest(zone, &category, session.position) else {
            debug!(id = %session.id, %category, "No object resolved");
            return;
        };

        let distance = spatial::distance2d(session.position, position);
        if distance > self.max_distance {
            debug!(id = %session.id, %category, distance, "Out of range");
            notifier.message(session.id, self.locale.too_far_away.clone());
            return;
        }

        let Some(descriptor) = self.registry.lookup(&category) else {
            debug!(id = %session.id, %category, "Category not registered");
            notifier.message(session.id, self.locale.interaction_not_found.clone());
            return;
        };

        info!(id = %session.id, %category, distance, "Interaction resolved");
        match descriptor {
            InteractionDescriptor::RemoteActor(event) => {
                notifier.client_event(session.id, *event, position);
            }
            InteractionDescriptor::ServerEvent(event) => {
                let _ = self.server_events.send(ServerEvent {
                    event: *event,
                    actor: session.id,
                    position,
                });
            }
            InteractionDescriptor::LocalCallback(callback) => {
                callback(InteractionCtx {
                    actor: session.id,
                    position,
                    notifier,
                });
            }
        }
    }
}
