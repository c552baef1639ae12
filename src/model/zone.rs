//! The zone-partitioned object catalog and its loading collaborators.
//!
//! Zone data is owned by an external source and loaded exactly once at
//! startup; nothing in this crate mutates it afterwards. An object belongs
//! to exactly one zone - zone membership of *actors* changes externally (on
//! movement), never here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::model::object::{Category, InteractableObject};

/// Identifier of a spatial partition (a grid cell in the source data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

impl From<u32> for ZoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "zone_{}", self.0)
    }
}

/// One zone's objects, grouped by category in load order.
#[derive(Debug, Clone, Default)]
pub struct Zone {
    objects: HashMap<Category, Vec<InteractableObject>>,
}

impl Zone {
    /// All objects of one category, in the order the data source listed them.
    /// Unknown categories yield an empty slice, indistinguishable from a
    /// category with no objects.
    pub fn of_category(&self, category: &Category) -> &[InteractableObject] {
        self.objects
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn push(&mut self, object: InteractableObject) {
        self.objects
            .entry(object.category.clone())
            .or_default()
            .push(object);
    }
}

/// The full catalog: `ZoneId -> Zone`.
#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    zones: HashMap<ZoneId, Zone>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes an object into its zone's per-category bucket.
    pub fn insert(&mut self, object: InteractableObject) {
        self.zones.entry(object.zone).or_default().push(object);
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Parses a flat JSON array of objects, as emitted by the data dump.
    pub fn from_json(data: &str) -> Result<Self, ZoneError> {
        let objects: Vec<InteractableObject> = serde_json::from_str(data)?;
        let mut map = Self::new();
        let count = objects.len();
        for object in objects {
            map.insert(object);
        }
        info!(objects = count, zones = map.len(), "Zone data loaded");
        Ok(map)
    }
}

/// Errors raised while loading zone data.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("invalid zone data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("zone data unavailable: {0}")]
    Io(#[from] std::io::Error),
}

/// External zone/object data collaborator.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    async fn load(&self) -> Result<WorldMap, ZoneError>;
}

/// In-memory zone data, for tests and embedded setups.
pub struct StaticZones(pub WorldMap);

#[async_trait]
impl ZoneProvider for StaticZones {
    async fn load(&self) -> Result<WorldMap, ZoneError> {
        Ok(self.0.clone())
    }
}

/// Zone data read from a JSON dump on disk.
pub struct JsonFileZones {
    path: PathBuf,
}

impl JsonFileZones {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ZoneProvider for JsonFileZones {
    async fn load(&self) -> Result<WorldMap, ZoneError> {
        let data = tokio::fs::read_to_string(&self.path).await?;
        WorldMap::from_json(&data)
    }
}
