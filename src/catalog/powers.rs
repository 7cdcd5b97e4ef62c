//! Divine powers the player spends energy on

use crate::catalog::effect::Effect;
use crate::core::types::ResourceKind;
use ResourceKind::{Biomass, Oxygen, Temperature, Water};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivinePower {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Divine energy the account pays per invocation
    pub cost: u32,
    pub effects: &'static [Effect],
}

pub const POWER_CATALOG: &[DivinePower] = &[
    DivinePower {
        id: "rain",
        name: "Divine Rain",
        description: "+15 Water",
        cost: 20,
        effects: &[Effect::Resource(Water, 15.0)],
    },
    DivinePower {
        id: "sunlight",
        name: "Blessed Sun",
        description: "+10 Temperature",
        cost: 15,
        effects: &[Effect::Resource(Temperature, 10.0)],
    },
    DivinePower {
        id: "breath",
        name: "Breath of Life",
        description: "+20 Oxygen",
        cost: 30,
        effects: &[Effect::Resource(Oxygen, 20.0)],
    },
    DivinePower {
        id: "seed",
        name: "Genesis Seed",
        description: "+25 Biomass",
        cost: 40,
        effects: &[Effect::Resource(Biomass, 25.0)],
    },
    DivinePower {
        id: "shield",
        name: "Divine Shield",
        description: "Block next disaster",
        cost: 50,
        effects: &[Effect::Shield(1)],
    },
    DivinePower {
        id: "miracle",
        name: "Miracle",
        description: "+10 to all stats",
        cost: 100,
        effects: &[
            Effect::Resource(Water, 10.0),
            Effect::Resource(Oxygen, 10.0),
            Effect::Resource(Temperature, 5.0),
            Effect::Resource(Biomass, 10.0),
        ],
    },
];

pub fn find_power(id: &str) -> Option<&'static DivinePower> {
    POWER_CATALOG.iter().find(|p| p.id == id)
}
