//! Planet save format
//!
//! Field names match the account file written by earlier releases, so
//! existing saves load unchanged. Every field except `name` is optional
//! and falls back to a documented default.

use serde::{Deserialize, Serialize};

use crate::catalog::{PlanetArchetype, MAX_STAGE};
use crate::core::error::Result;
use crate::core::types::{unix_timestamp, Tick};
use crate::planet::history::{self, HistoryEntry};
use crate::planet::{Planet, Resources, STARTING_OXYGEN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    pub name: String,
    /// Archetype id; unknown ids load as terra
    #[serde(rename = "type", default = "default_archetype")]
    pub archetype: String,
    #[serde(default = "default_water")]
    pub water: f64,
    #[serde(default = "default_oxygen")]
    pub oxygen: f64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default)]
    pub biomass: f64,
    #[serde(default)]
    pub age: Tick,
    #[serde(default)]
    pub life_stage: usize,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub shield: u32,
    /// At most the 50 most recent entries
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default = "unix_timestamp")]
    pub created: f64,
}

fn default_archetype() -> String {
    PlanetArchetype::Terra.id().to_string()
}

fn default_water() -> f64 {
    50.0
}

fn default_oxygen() -> f64 {
    STARTING_OXYGEN
}

fn default_temperature() -> f64 {
    50.0
}

impl PlanetSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Planet {
    pub fn to_snapshot(&self) -> PlanetSnapshot {
        PlanetSnapshot {
            name: self.name.clone(),
            archetype: self.archetype.id().to_string(),
            water: self.resources.water,
            oxygen: self.resources.oxygen,
            temperature: self.resources.temperature,
            biomass: self.resources.biomass,
            age: self.age,
            life_stage: self.life_stage,
            population: self.population,
            shield: self.shield,
            history: history::recent(&self.history).to_vec(),
            created: self.created,
        }
    }

    pub fn from_snapshot(snapshot: PlanetSnapshot) -> Self {
        let archetype = PlanetArchetype::from_id(&snapshot.archetype).unwrap_or_else(|| {
            tracing::warn!(
                archetype = %snapshot.archetype,
                "Unknown planet type, loading as terra"
            );
            PlanetArchetype::Terra
        });

        Self {
            name: snapshot.name,
            archetype,
            resources: Resources::new(
                snapshot.water,
                snapshot.oxygen,
                snapshot.temperature,
                snapshot.biomass,
            ),
            age: snapshot.age,
            shield: snapshot.shield,
            created: snapshot.created,
            life_stage: snapshot.life_stage.min(MAX_STAGE),
            population: snapshot.population,
            history: snapshot.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::power::apply_power;

    #[test]
    fn test_missing_fields_take_defaults() {
        let snapshot = PlanetSnapshot::from_json(r#"{"name": "Old World"}"#).unwrap();
        let planet = Planet::from_snapshot(snapshot);

        assert_eq!(planet.name, "Old World");
        assert_eq!(planet.archetype, PlanetArchetype::Terra);
        assert_eq!(planet.resources, Resources::new(50.0, 5.0, 50.0, 0.0));
        assert_eq!(planet.age, 0);
        assert_eq!(planet.life_stage(), 0);
        assert_eq!(planet.population(), 0);
        assert_eq!(planet.shield, 0);
        assert!(planet.history().is_empty());
        assert!(planet.created > 0.0);
    }

    #[test]
    fn test_missing_name_is_an_error() {
        assert!(PlanetSnapshot::from_json(r#"{"type": "ice"}"#).is_err());
    }

    #[test]
    fn test_unknown_archetype_and_stage_are_normalized() {
        let snapshot = PlanetSnapshot::from_json(
            r#"{"name": "Odd", "type": "gas_giant", "life_stage": 40}"#,
        )
        .unwrap();
        let planet = Planet::from_snapshot(snapshot);
        assert_eq!(planet.archetype, PlanetArchetype::Terra);
        assert_eq!(planet.life_stage(), MAX_STAGE);
    }

    #[test]
    fn test_snapshot_keeps_last_fifty_history_entries() {
        let mut planet = Planet::new("Chronicle", PlanetArchetype::Ocean);
        for _ in 0..60 {
            apply_power(&mut planet, "rain");
        }
        assert_eq!(planet.history().len(), 60);

        let restored = Planet::from_snapshot(planet.to_snapshot());
        assert_eq!(restored.history().len(), 50);
        assert_eq!(restored.history(), &planet.history()[10..]);
    }

    #[test]
    fn test_snapshot_uses_legacy_keys() {
        let planet = Planet::new("Keys", PlanetArchetype::Ice);
        let value: serde_json::Value = serde_json::to_value(planet.to_snapshot()).unwrap();
        for key in [
            "name", "type", "water", "oxygen", "temperature", "biomass", "age",
            "life_stage", "population", "shield", "history", "created",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["type"], "ice");
    }
}
