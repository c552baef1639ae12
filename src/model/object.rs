use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

use crate::model::zone::ZoneId;

/// A world position. Interaction range checks only consider the horizontal
/// plane, so `z` rides along for client payloads but never enters a distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A validated interaction category key.
///
/// Categories arrive as free-form strings from clients and from feature
/// registration. They are folded exactly once, at construction, so the
/// registry and the zone catalog never re-check casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category(String);

impl Category {
    /// Normalizes a raw category string (trim + lowercase).
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// Zone data files may carry arbitrary casing; fold at the boundary.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::normalize(&raw))
    }
}

/// A static interactable world object.
///
/// Owned by the zone data source and immutable after load; the dispatcher
/// only ever borrows these during a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractableObject {
    pub category: Category,
    pub position: Vec3,
    pub zone: ZoneId,
}
