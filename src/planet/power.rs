//! Divine power application
//!
//! Applies a power's effects to a planet. Energy is not checked here;
//! the session pays for the power before calling in.

use crate::catalog::{find_power, DivinePower, Effect};
use crate::planet::Planet;

/// Apply the power with the given id
///
/// Returns false, leaving the planet untouched, when the id is unknown.
pub fn apply_power(planet: &mut Planet, power_id: &str) -> bool {
    match find_power(power_id) {
        Some(power) => {
            apply_divine_power(planet, power);
            true
        }
        None => {
            tracing::warn!(power = power_id, "Unknown divine power");
            false
        }
    }
}

pub fn apply_divine_power(planet: &mut Planet, power: &DivinePower) {
    for effect in power.effects {
        match effect {
            Effect::Resource(kind, delta) => planet.resources.add(*kind, *delta),
            Effect::Shield(n) => planet.shield = planet.shield.saturating_add(*n),
        }
    }
    planet.resources.clamp();
    planet.record(format!("Divine: {}", power.name));
    tracing::debug!(planet = %planet.name, power = power.id, "Divine power applied");
}
