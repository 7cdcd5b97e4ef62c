//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Simulation tick counter (one tick is one planet year)
pub type Tick = u64;

/// Unique identifier for a planet stored in an account
///
/// Serialized as a plain string so older saves keyed by arbitrary
/// text (e.g. `planet_1700000000`) stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetId(pub String);

impl PlanetId {
    pub fn new() -> Self {
        Self(format!("planet_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlanetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The four planetary resources tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Water,
    Oxygen,
    Temperature,
    Biomass,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Water,
        ResourceKind::Oxygen,
        ResourceKind::Temperature,
        ResourceKind::Biomass,
    ];

    /// Inclusive (min, max) range the resource is clamped to after every mutation
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Water | Self::Oxygen | Self::Biomass => (0.0, 100.0),
            Self::Temperature => (-50.0, 150.0),
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Oxygen => "oxygen",
            Self::Temperature => "temperature",
            Self::Biomass => "biomass",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Seconds since the UNIX epoch as a float, the timestamp unit used in saves
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
