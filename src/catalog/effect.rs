//! Stat deltas shared by events and divine powers

use serde::{Deserialize, Serialize};

use crate::core::types::ResourceKind;

/// A single stat change carried by an event or a power
///
/// Shields are not a resource: a `Shield` effect adds to the planet's
/// shield counter when a power applies it and is skipped when an event
/// applies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Resource(ResourceKind, f64),
    Shield(u32),
}

/// Sum of all deltas targeting `kind` in an effect list
pub fn resource_delta(effects: &[Effect], kind: ResourceKind) -> f64 {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Resource(k, delta) if *k == kind => Some(*delta),
            _ => None,
        })
        .sum()
}

/// Human-readable effect summary, e.g. `+15 Water, -2 Oxygen`
pub fn describe_effects(effects: &[Effect]) -> String {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::Resource(kind, delta) => {
                let name = kind.name();
                let mut label = name[..1].to_uppercase();
                label.push_str(&name[1..]);
                format!("{:+} {}", delta, label)
            }
            Effect::Shield(n) => format!("+{} Shield", n),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
