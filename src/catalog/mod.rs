//! Static game tables
//!
//! Stages, events, powers, archetypes and achievements are fixed
//! `&'static` slices. Order matters for stages (rank) and events
//! (roll order).

pub mod achievements;
pub mod archetypes;
pub mod effect;
pub mod events;
pub mod powers;
pub mod stages;

pub use achievements::{achievement, Achievement, AchievementId, ACHIEVEMENTS};
pub use archetypes::PlanetArchetype;
pub use effect::{describe_effects, resource_delta, Effect};
pub use events::{find_event, EnvironmentalEvent, EVENT_CATALOG, EXTINCTION_MARKER};
pub use powers::{find_power, DivinePower, POWER_CATALOG};
pub use stages::{
    highest_satisfied, stage, Stage, CIVILIZATION_STAGE, FISH_STAGE, LIFE_STAGES, MAX_STAGE,
};
