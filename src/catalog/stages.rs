//! The life-development ladder
//!
//! Stages are ordered by rank. A planet sits on the highest stage whose
//! minimums it has ever met; see [`highest_satisfied`].

use crate::core::types::ResourceKind;
use ResourceKind::{Biomass, Oxygen, Temperature, Water};

/// One rung of the life ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub rank: usize,
    pub name: &'static str,
    /// Single-character glyph for compact displays
    pub icon: char,
    /// Minimum value per resource; resources not listed are unconstrained
    pub minimums: &'static [(ResourceKind, f64)],
}

impl Stage {
    /// True when every minimum is met (`value >= min`)
    pub fn is_satisfied_by(&self, value_of: impl Fn(ResourceKind) -> f64) -> bool {
        self.minimums
            .iter()
            .all(|(kind, min)| value_of(*kind) >= *min)
    }
}

/// First stage with the fish-tier population multiplier
pub const FISH_STAGE: usize = 5;

/// First stage with the civilization-tier population multiplier
pub const CIVILIZATION_STAGE: usize = 9;

pub const LIFE_STAGES: &[Stage] = &[
    Stage {
        rank: 0,
        name: "Lifeless",
        icon: '.',
        minimums: &[],
    },
    Stage {
        rank: 1,
        name: "Bacteria",
        icon: '*',
        minimums: &[(Water, 10.0), (Temperature, 20.0)],
    },
    Stage {
        rank: 2,
        name: "Algae",
        icon: '~',
        minimums: &[(Water, 25.0), (Oxygen, 5.0), (Temperature, 25.0)],
    },
    Stage {
        rank: 3,
        name: "Plants",
        icon: 'Y',
        minimums: &[(Water, 35.0), (Oxygen, 15.0), (Temperature, 30.0)],
    },
    Stage {
        rank: 4,
        name: "Insects",
        icon: 'x',
        minimums: &[(Water, 40.0), (Oxygen, 25.0), (Biomass, 20.0)],
    },
    Stage {
        rank: 5,
        name: "Fish",
        icon: '>',
        minimums: &[(Water, 50.0), (Oxygen, 30.0), (Biomass, 30.0)],
    },
    Stage {
        rank: 6,
        name: "Reptiles",
        icon: 'S',
        minimums: &[(Water, 45.0), (Oxygen, 40.0), (Biomass, 40.0)],
    },
    Stage {
        rank: 7,
        name: "Mammals",
        icon: 'M',
        minimums: &[(Water, 50.0), (Oxygen, 50.0), (Biomass, 50.0)],
    },
    Stage {
        rank: 8,
        name: "Primates",
        icon: 'P',
        minimums: &[(Water, 55.0), (Oxygen, 55.0), (Biomass, 60.0)],
    },
    Stage {
        rank: 9,
        name: "Civilization",
        icon: 'A',
        minimums: &[(Water, 50.0), (Oxygen, 60.0), (Biomass, 70.0)],
    },
    Stage {
        rank: 10,
        name: "Industrial",
        icon: 'I',
        minimums: &[(Water, 45.0), (Oxygen, 55.0), (Biomass, 65.0)],
    },
    Stage {
        rank: 11,
        name: "Space Age",
        icon: 'V',
        minimums: &[(Water, 40.0), (Oxygen, 50.0), (Biomass, 60.0)],
    },
    Stage {
        rank: 12,
        name: "Galactic",
        icon: '@',
        minimums: &[(Water, 40.0), (Oxygen, 50.0), (Biomass, 55.0)],
    },
];

/// Index of the top stage
pub const MAX_STAGE: usize = LIFE_STAGES.len() - 1;

/// Stage by index, saturating at the top of the ladder
pub fn stage(index: usize) -> &'static Stage {
    &LIFE_STAGES[index.min(MAX_STAGE)]
}

/// Highest-ranked stage whose minimums are all met
///
/// Scans from the top of the ladder down and stops at the first match.
/// Stage 0 has no minimums, so there is always a match.
pub fn highest_satisfied(value_of: impl Fn(ResourceKind) -> f64) -> usize {
    LIFE_STAGES
        .iter()
        .rev()
        .find(|stage| stage.is_satisfied_by(&value_of))
        .map(|stage| stage.rank)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(
        water: f64,
        oxygen: f64,
        temperature: f64,
        biomass: f64,
    ) -> impl Fn(ResourceKind) -> f64 {
        move |kind| match kind {
            Water => water,
            Oxygen => oxygen,
            Temperature => temperature,
            Biomass => biomass,
        }
    }

    #[test]
    fn test_ranks_match_positions() {
        for (i, stage) in LIFE_STAGES.iter().enumerate() {
            assert_eq!(stage.rank, i);
        }
        assert_eq!(LIFE_STAGES.len(), 13);
        assert_eq!(stage(CIVILIZATION_STAGE).name, "Civilization");
        assert_eq!(stage(FISH_STAGE).name, "Fish");
    }

    #[test]
    fn test_barren_planet_is_lifeless() {
        assert_eq!(highest_satisfied(values(0.0, 0.0, -50.0, 0.0)), 0);
    }

    #[test]
    fn test_bacteria_needs_water_and_warmth() {
        assert_eq!(highest_satisfied(values(10.0, 0.0, 20.0, 0.0)), 1);
        assert_eq!(highest_satisfied(values(9.9, 0.0, 20.0, 0.0)), 0);
    }

    #[test]
    fn test_minimums_are_inclusive() {
        // Oxygen exactly 5 satisfies Algae
        assert_eq!(highest_satisfied(values(50.0, 5.0, 50.0, 0.0)), 2);
    }

    #[test]
    fn test_top_down_scan_skips_unmet_middle_stages() {
        // Galactic's minimums are lower than Civilization's; the scan from the
        // top finds Galactic first.
        assert_eq!(highest_satisfied(values(40.0, 50.0, 0.0, 55.0)), 12);
    }

    #[test]
    fn test_stage_lookup_saturates() {
        assert_eq!(stage(99).rank, MAX_STAGE);
    }
}
