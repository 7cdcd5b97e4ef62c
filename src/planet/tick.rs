//! Tick engine - advances a planet by one year
//!
//! Each tick runs, in order:
//! 1. Age the planet
//! 2. Natural processes (deterministic, evaluated on pre-tick values)
//! 3. Event roll (first success in catalog order, at most one per tick)
//! 4. Life stage re-evaluation on post-event values
//! 5. Population recompute
//! 6. Clamp resources
//!
//! The random source is injected so runs are reproducible for a seed.

use rand::Rng;

use crate::catalog::{Effect, EnvironmentalEvent, CIVILIZATION_STAGE, EVENT_CATALOG, FISH_STAGE};
use crate::core::types::ResourceKind;
use crate::planet::Planet;

/// What the tick reports back to the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggeredEvent {
    /// The event fired and its effects were applied
    Environmental(EnvironmentalEvent),
    /// A shield absorbed the event; nothing was applied
    ShieldBlocked { blocked: EnvironmentalEvent },
}

impl TriggeredEvent {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Environmental(event) => event.id,
            Self::ShieldBlocked { .. } => "shield_block",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Environmental(event) => event.name,
            Self::ShieldBlocked { .. } => "Shield Blocked!",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Environmental(event) => event.description.to_string(),
            Self::ShieldBlocked { blocked } => format!("Blocked: {}", blocked.name),
        }
    }

    /// True only when an extinction-class event actually hit the planet
    pub fn is_extinction_class(&self) -> bool {
        match self {
            Self::Environmental(event) => event.is_extinction_class(),
            Self::ShieldBlocked { .. } => false,
        }
    }
}

/// Advance one tick using the standard event catalog
pub fn advance<R: Rng + ?Sized>(planet: &mut Planet, rng: &mut R) -> Option<TriggeredEvent> {
    advance_with_catalog(planet, EVENT_CATALOG, rng)
}

/// Advance one tick rolling against an explicit, ordered event list
pub fn advance_with_catalog<R: Rng + ?Sized>(
    planet: &mut Planet,
    events: &[EnvironmentalEvent],
    rng: &mut R,
) -> Option<TriggeredEvent> {
    planet.age += 1;

    apply_natural_processes(planet);

    let triggered = roll_event(events, rng).map(|event| resolve_event(planet, event));

    planet.update_life_stage();
    planet.recompute_population();
    planet.resources.clamp();

    triggered
}

/// Continuous processes; every applicable rule fires
fn apply_natural_processes(planet: &mut Planet) {
    let before = planet.resources;
    let r = &mut planet.resources;

    if before.biomass > 10.0 {
        r.oxygen += before.biomass * 0.02;
    }
    if before.water > 30.0 && before.temperature > 20.0 && before.temperature < 80.0 {
        r.biomass += 0.1;
    }
    if before.temperature > 100.0 {
        r.biomass -= 0.5;
        r.water -= 0.3;
    }
    if before.temperature < 0.0 {
        r.biomass -= 0.2;
    }
}

/// One independent draw per event, in order; stop at the first success
fn roll_event<R: Rng + ?Sized>(
    events: &[EnvironmentalEvent],
    rng: &mut R,
) -> Option<EnvironmentalEvent> {
    events
        .iter()
        .find(|event| rng.gen::<f64>() < event.chance)
        .copied()
}

fn resolve_event(planet: &mut Planet, event: EnvironmentalEvent) -> TriggeredEvent {
    if event.is_blockable() && planet.shield > 0 {
        planet.shield -= 1;
        tracing::info!(
            planet = %planet.name,
            age = planet.age,
            event = event.name,
            "Shield blocked disaster"
        );
        return TriggeredEvent::ShieldBlocked { blocked: event };
    }

    for effect in event.effects {
        // Shields only come from divine powers
        if let Effect::Resource(kind, delta) = effect {
            planet.resources.add(*kind, *delta);
        }
    }
    planet.record(event.name);
    tracing::debug!(
        planet = %planet.name,
        age = planet.age,
        event = event.id,
        "Environmental event"
    );

    TriggeredEvent::Environmental(event)
}

/// Population for a stage and biomass level
///
/// Biomass is read through its clamp so the result depends only on the
/// final tick state. The multiplier jumps at Fish and Civilization.
pub fn population_for(life_stage: usize, biomass: f64) -> u64 {
    let biomass = ResourceKind::Biomass.clamp(biomass);
    let population = if life_stage >= CIVILIZATION_STAGE {
        biomass * 1_000_000.0 * (life_stage - (CIVILIZATION_STAGE - 1)) as f64
    } else if life_stage >= FISH_STAGE {
        biomass * 10_000.0
    } else {
        biomass * 100.0
    };
    population.floor() as u64
}
