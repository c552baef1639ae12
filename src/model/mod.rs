//! Domain data types shared across the crate.
//!
//! Everything here is plain data: identifiers, positions, balances, and the
//! zone-partitioned object catalog. The [`BalanceStore`] trait is the seam
//! between transaction logic and whatever owns the session state.

pub mod actor;
pub mod balance;
pub mod object;
pub mod zone;

pub use actor::ActorId;
pub use balance::{Balance, BalanceStore, CurrencyField};
pub use object::{Category, InteractableObject, Vec3};
pub use zone::{JsonFileZones, StaticZones, WorldMap, Zone, ZoneError, ZoneId, ZoneProvider};
