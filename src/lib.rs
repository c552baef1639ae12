//! # world-interact
//!
//! > Server-authoritative interaction targeting and currency transactions
//! > for a zoned multiplayer world.
//!
//! A connected participant ("actor") presses interact and names a category
//! - `"atm"`, say. This crate resolves the nearest qualifying object in the
//! actor's zone, gates the request on distance, and routes it through a
//! registry of per-category descriptors. Transaction-capable categories end
//! in the ATM handlers: strictly validated deposits, withdrawals and
//! transfers, with the authoritative balance pushed back to the client
//! after every attempt.
//!
//! ## Architecture
//!
//! All mutable state lives inside one **world actor** that processes
//! requests sequentially from a channel (one request runs to completion
//! before the next is received). That single decision buys transactional
//! atomicity without locks: a transfer's read-validate-mutate sequence can
//! never interleave with another request. Multiple cloneable
//! [`WorldClient`](world::WorldClient)s feed the channel from anywhere.
//!
//! ## Module Tour
//!
//! - [`model`] - identifiers, positions, balances, the zone catalog, and
//!   the [`BalanceStore`](model::BalanceStore) seam.
//! - [`spatial`] - nearest-object queries (2D distance, linear scan).
//! - [`registry`] - the category → descriptor table, sealed after startup.
//! - [`dispatch`] - the interaction request path and its rejection rules.
//! - [`atm`] - the transaction feature: validation pipeline and handlers.
//! - [`notify`] - the outbound sink (messages, cues, balance re-syncs).
//! - [`world`] - the actor runtime, its client, and a mock for tests.
//! - [`clients`] - typed wrappers such as [`AtmClient`](clients::AtmClient).
//! - [`lifecycle`] - wiring ([`InteractionSystem`](lifecycle::InteractionSystem))
//!   and tracing setup.
//!
//! ## Quick Start
//!
//! ```
//! use world_interact::config::InteractionConfig;
//! use world_interact::lifecycle::InteractionSystem;
//! use world_interact::model::{Balance, Category, InteractableObject, Vec3, WorldMap, ZoneId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut zones = WorldMap::new();
//!     zones.insert(InteractableObject {
//!         category: Category::normalize("atm"),
//!         position: Vec3::new(3.0, 0.0, 0.0),
//!         zone: ZoneId(1),
//!     });
//!
//!     let system = InteractionSystem::new(zones, InteractionConfig::default())?;
//!
//!     let id = system
//!         .world_client
//!         .connect("Alice", Vec3::default(), ZoneId(1), Balance::new(100.0, 0.0))
//!         .await?;
//!
//!     // Within range of the ATM: the client gets an open-UI delegation.
//!     system.world_client.interact(id, "atm").await?;
//!
//!     // The UI submits a transaction; cash moves to bank atomically.
//!     let applied = system.atm_client.deposit(id, 50.0).await?;
//!     assert!(applied);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! Run tests with `RUST_LOG=debug cargo test` to watch the request flow.

pub mod atm;
pub mod clients;
pub mod config;
pub mod dispatch;
pub mod lifecycle;
pub mod locale;
pub mod model;
pub mod notify;
pub mod registry;
pub mod spatial;
pub mod world;

// Re-export the types most integrations touch.
pub use atm::{RawAmount, RawTargetId, TransactionError, TransactionKind};
pub use clients::AtmClient;
pub use config::InteractionConfig;
pub use lifecycle::InteractionSystem;
pub use model::{ActorId, Balance, Category, CurrencyField, Vec3, WorldMap, ZoneId};
pub use notify::{Notifier, Outbound};
pub use registry::{InteractionDescriptor, InteractionRegistry};
pub use world::{WorldClient, WorldError};
