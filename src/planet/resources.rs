//! The four resource scalars of a planet

use serde::{Deserialize, Serialize};

use crate::core::types::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub water: f64,
    pub oxygen: f64,
    pub temperature: f64,
    pub biomass: f64,
}

impl Resources {
    pub fn new(water: f64, oxygen: f64, temperature: f64, biomass: f64) -> Self {
        Self {
            water,
            oxygen,
            temperature,
            biomass,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Water => self.water,
            ResourceKind::Oxygen => self.oxygen,
            ResourceKind::Temperature => self.temperature,
            ResourceKind::Biomass => self.biomass,
        }
    }

    fn slot(&mut self, kind: ResourceKind) -> &mut f64 {
        match kind {
            ResourceKind::Water => &mut self.water,
            ResourceKind::Oxygen => &mut self.oxygen,
            ResourceKind::Temperature => &mut self.temperature,
            ResourceKind::Biomass => &mut self.biomass,
        }
    }

    /// Add a signed delta without clamping
    pub fn add(&mut self, kind: ResourceKind, delta: f64) {
        *self.slot(kind) += delta;
    }

    /// Normalize every resource into its declared range
    pub fn clamp(&mut self) {
        for kind in ResourceKind::ALL {
            let slot = self.slot(kind);
            *slot = kind.clamp(*slot);
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        ResourceKind::ALL.iter().all(|kind| {
            let (min, max) = kind.range();
            let value = self.get(*kind);
            value >= min && value <= max
        })
    }
}
