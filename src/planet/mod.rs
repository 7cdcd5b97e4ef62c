//! Planet entity and its simulation engine
//!
//! A [`Planet`] holds mutable state; [`tick::advance`] steps it one year and
//! [`power::apply_power`] applies a divine intervention. Neither performs I/O.

pub mod batch;
pub mod history;
pub mod power;
pub mod resources;
pub mod snapshot;
pub mod tick;

pub use batch::{
    advance_planet, advance_planets_parallel, advance_planets_sequential, BatchOutcome,
};
pub use history::{HistoryEntry, HISTORY_SNAPSHOT_LIMIT};
pub use power::apply_power;
pub use resources::Resources;
pub use snapshot::PlanetSnapshot;
pub use tick::{advance, advance_with_catalog, population_for, TriggeredEvent};

use rand::Rng;

use crate::catalog::{self, PlanetArchetype, Stage};
use crate::core::types::{unix_timestamp, Tick};

/// Oxygen every fresh planet starts with, regardless of archetype
pub const STARTING_OXYGEN: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub archetype: PlanetArchetype,
    pub resources: Resources,
    /// Years simulated so far
    pub age: Tick,
    /// Divine shields waiting to absorb a disaster
    pub shield: u32,
    /// Seconds since the UNIX epoch
    pub created: f64,
    life_stage: usize,
    population: u64,
    history: Vec<HistoryEntry>,
}

impl Planet {
    pub fn new(name: impl Into<String>, archetype: PlanetArchetype) -> Self {
        Self {
            name: name.into(),
            archetype,
            resources: Resources::new(
                archetype.base_water(),
                STARTING_OXYGEN,
                archetype.base_temperature(),
                0.0,
            ),
            age: 0,
            shield: 0,
            created: unix_timestamp(),
            life_stage: 0,
            population: 0,
            history: Vec::new(),
        }
    }

    /// Advance one tick with the default event catalog
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TriggeredEvent> {
        tick::advance(self, rng)
    }

    pub fn life_stage(&self) -> usize {
        self.life_stage
    }

    pub fn stage(&self) -> &'static Stage {
        catalog::stage(self.life_stage)
    }

    pub fn life_stage_name(&self) -> &'static str {
        self.stage().name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub(crate) fn record(&mut self, text: impl Into<String>) {
        self.history.push(HistoryEntry::new(self.age, text));
    }

    /// Move up the ladder if current resources justify a higher stage
    ///
    /// Never moves down. Returns the new stage index when it advanced.
    pub fn update_life_stage(&mut self) -> Option<usize> {
        let resources = self.resources;
        let candidate = catalog::highest_satisfied(|kind| resources.get(kind));
        if candidate <= self.life_stage {
            return None;
        }

        self.life_stage = candidate;
        let name = self.life_stage_name();
        self.record(format!("Evolved to {}!", name));
        tracing::info!(planet = %self.name, age = self.age, stage = name, "Planet evolved");
        Some(candidate)
    }

    pub(crate) fn recompute_population(&mut self) {
        self.population = population_for(self.life_stage, self.resources.biomass);
    }
}
