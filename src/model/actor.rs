use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for connected actors.
///
/// Allocated by the world actor when a participant connects and released on
/// disconnect. The numeric form is what clients send back when they name a
/// transfer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor_{}", self.0)
    }
}
