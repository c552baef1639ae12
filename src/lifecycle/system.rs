use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::atm;
use crate::clients::AtmClient;
use crate::config::InteractionConfig;
use crate::dispatch::{InteractionDispatcher, ServerEvent};
use crate::locale::Locale;
use crate::model::{ActorId, WorldMap, ZoneError, ZoneProvider};
use crate::notify::{ChannelNotifier, Outbound};
use crate::registry::{InteractionRegistry, RegistryError};
use crate::world::{WorldActor, WorldClient};

/// Errors raised while bringing the system up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Zone(#[from] ZoneError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The runtime orchestrator: builds and seals the registry, wires the
/// dispatcher, and spawns the world actor.
///
/// Owns the receiving ends of both outbound flows:
/// - `outbound` - per-actor payloads (messages, cues, balance syncs,
///   client-event delegation) for the transport layer to deliver;
/// - `server_events` - same-process events raised by `ServerEvent`
///   descriptors, for feature modules to consume.
pub struct InteractionSystem {
    pub world_client: WorldClient,
    pub atm_client: AtmClient,
    pub outbound: mpsc::UnboundedReceiver<(ActorId, Outbound)>,
    pub server_events: mpsc::UnboundedReceiver<ServerEvent>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InteractionSystem {
    /// Builds the system over already-loaded zone data.
    ///
    /// Registration happens here, before the registry is sealed; a feature
    /// registering late fails startup instead of misrouting requests.
    pub fn new(zones: WorldMap, config: InteractionConfig) -> Result<Self, StartupError> {
        let locale = Locale::default();

        // Startup phase: features register, then the table freezes.
        let mut registry = InteractionRegistry::new();
        atm::register(&mut registry)?;
        registry.seal();

        let (dispatcher, server_events) =
            InteractionDispatcher::new(registry, locale.clone(), &config);
        let (actor, world_client) =
            WorldActor::new(zones, dispatcher, locale, config.request_capacity);

        let (outbound_sender, outbound) = mpsc::unbounded_channel();
        let handle = tokio::spawn(actor.run(ChannelNotifier::new(outbound_sender)));
        info!("Interaction system started");

        Ok(Self {
            atm_client: AtmClient::new(world_client.clone()),
            world_client,
            outbound,
            server_events,
            handles: vec![handle],
        })
    }

    /// Loads zone data from the given provider, then builds the system.
    pub async fn load(
        provider: &dyn ZoneProvider,
        config: InteractionConfig,
    ) -> Result<Self, StartupError> {
        let zones = provider.load().await?;
        Self::new(zones, config)
    }

    /// Gracefully shuts the system down: drops the clients (closing the
    /// request channel) and waits for the world actor to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down interaction system...");
        drop(self.world_client);
        drop(self.atm_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("World actor task failed: {:?}", e);
                return Err(format!("World actor task failed: {e:?}"));
            }
        }

        info!("Interaction system shutdown complete.");
        Ok(())
    }
}
