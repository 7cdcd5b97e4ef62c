//! Environmental events rolled once per tick
//!
//! The catalog order is part of the simulation contract: the engine draws
//! one random number per event in this order and the first success wins.
//! Reordering entries changes outcomes for a given seed.

use crate::catalog::effect::{resource_delta, Effect};
use crate::core::types::ResourceKind;
use ResourceKind::{Biomass, Oxygen, Temperature, Water};

/// Substring that marks an event as extinction-class
pub const EXTINCTION_MARKER: &str = "EXTINCTION";

/// Biomass deltas below this count as a disaster a shield can block
pub const SHIELD_BLOCK_THRESHOLD: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalEvent {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub effects: &'static [Effect],
    /// Independent per-tick trigger probability, 0 < p < 1
    pub chance: f64,
}

impl EnvironmentalEvent {
    pub fn biomass_delta(&self) -> f64 {
        resource_delta(self.effects, Biomass)
    }

    /// Disasters severe enough that a divine shield absorbs them
    pub fn is_blockable(&self) -> bool {
        self.biomass_delta() < SHIELD_BLOCK_THRESHOLD
    }

    pub fn is_extinction_class(&self) -> bool {
        self.name.contains(EXTINCTION_MARKER)
    }
}

pub const EVENT_CATALOG: &[EnvironmentalEvent] = &[
    EnvironmentalEvent {
        id: "meteor_small",
        name: "Small Meteor",
        description: "A small meteor strikes!",
        effects: &[Effect::Resource(Biomass, -5.0), Effect::Resource(Temperature, 2.0)],
        chance: 0.03,
    },
    EnvironmentalEvent {
        id: "meteor_large",
        name: "EXTINCTION EVENT",
        description: "Massive asteroid impact!",
        effects: &[
            Effect::Resource(Biomass, -40.0),
            Effect::Resource(Temperature, -15.0),
            Effect::Resource(Oxygen, -10.0),
        ],
        chance: 0.005,
    },
    EnvironmentalEvent {
        id: "volcano",
        name: "Volcanic Eruption",
        description: "Volcanoes release gases",
        effects: &[
            Effect::Resource(Temperature, 3.0),
            Effect::Resource(Oxygen, -2.0),
            Effect::Resource(Biomass, -3.0),
        ],
        chance: 0.02,
    },
    EnvironmentalEvent {
        id: "ice_age",
        name: "Ice Age Begins",
        description: "Global cooling event",
        effects: &[
            Effect::Resource(Temperature, -20.0),
            Effect::Resource(Water, -10.0),
            Effect::Resource(Biomass, -15.0),
        ],
        chance: 0.008,
    },
    EnvironmentalEvent {
        id: "solar_flare",
        name: "Solar Flare",
        description: "Intense radiation!",
        effects: &[Effect::Resource(Temperature, 10.0), Effect::Resource(Biomass, -8.0)],
        chance: 0.015,
    },
    EnvironmentalEvent {
        id: "evolution_boost",
        name: "Evolution Leap!",
        description: "Rapid mutation event",
        effects: &[Effect::Resource(Biomass, 15.0)],
        chance: 0.02,
    },
    EnvironmentalEvent {
        id: "ocean_bloom",
        name: "Ocean Bloom",
        description: "Algae explosion!",
        effects: &[Effect::Resource(Oxygen, 8.0), Effect::Resource(Biomass, 5.0)],
        chance: 0.025,
    },
    EnvironmentalEvent {
        id: "magnetic_shift",
        name: "Magnetic Reversal",
        description: "Poles are shifting",
        effects: &[Effect::Resource(Biomass, -5.0)],
        chance: 0.01,
    },
];

pub fn find_event(id: &str) -> Option<&'static EnvironmentalEvent> {
    EVENT_CATALOG.iter().find(|e| e.id == id)
}
