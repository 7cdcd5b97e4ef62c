//! Simulation speed and the interval-to-tick conversion

use serde::{Deserialize, Serialize};

/// Ticks per driver interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
    Five,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Half, Speed::Normal, Speed::Double, Speed::Five];

    pub fn multiplier(&self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
            Speed::Five => 5.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
            Speed::Five => "5x",
        }
    }

    /// Accepts "0.5", "1", "2", "5", with or without a trailing "x"
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim().trim_end_matches(&['x', 'X'][..]);
        let value: f64 = trimmed.parse().ok()?;
        Self::ALL.into_iter().find(|s| s.multiplier() == value)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Carries fractional ticks between intervals
///
/// At 0.5x the first interval runs no tick and the second runs one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickBudget {
    carry: f64,
}

impl TickBudget {
    /// Whole ticks due for one interval at `speed`
    pub fn take(&mut self, speed: Speed) -> u32 {
        self.carry += speed.multiplier();
        let whole = self.carry.floor();
        self.carry -= whole;
        whole as u32
    }

    pub fn reset(&mut self) {
        self.carry = 0.0;
    }
}
