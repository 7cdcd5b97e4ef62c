//! Game configuration with documented constants
//!
//! Pacing, energy economy and account rules live here rather than as
//! magic numbers in the session driver. The planet engine itself takes
//! no configuration: its rules are fixed by the catalogs.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::account::MAX_DIVINE_ENERGY;
use crate::core::error::{PocketError, Result};

/// Top-level configuration, loadable from TOML
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub energy: EnergyConfig,
    pub accounts: AccountConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Real-time length of one driver interval in milliseconds
    ///
    /// At 1x speed one interval advances exactly one tick.
    pub interval_ms: u64,

    /// Planet age period between automatic saves
    ///
    /// The session persists the active planet whenever its age crosses
    /// a multiple of this value.
    pub autosave_every: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// Divine energy granted to a freshly registered account
    ///
    /// Must not exceed the account ceiling of 1000.
    pub starting: f64,

    /// Energy regenerated per interval at 1x speed on a lifeless planet
    pub regen_base: f64,

    /// Additional regeneration per life stage reached
    ///
    /// A Galactic planet (stage 12) regenerates 0.1 + 12 * 0.05 = 0.7
    /// energy per interval, seven times a lifeless one.
    pub regen_per_stage: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    pub min_username_len: usize,
    pub min_pin_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding every account
    pub users_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            energy: EnergyConfig::default(),
            accounts: AccountConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            autosave_every: 100,
        }
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            starting: 100.0,
            regen_base: 0.1,
            regen_per_stage: 0.05,
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            min_username_len: 3,
            min_pin_len: 4,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            users_file: home.join("pu_users.json"),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file and validate it
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate().map_err(PocketError::Config)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.timing.interval_ms == 0 {
            return Err("timing.interval_ms must be positive".into());
        }

        if self.timing.autosave_every == 0 {
            return Err("timing.autosave_every must be positive".into());
        }

        if self.energy.starting < 0.0 || self.energy.starting > MAX_DIVINE_ENERGY {
            return Err(format!(
                "energy.starting ({}) must be within 0..={}",
                self.energy.starting, MAX_DIVINE_ENERGY
            ));
        }

        if self.energy.regen_base < 0.0 || self.energy.regen_per_stage < 0.0 {
            return Err("Energy regeneration rates must not be negative".into());
        }

        if self.accounts.min_username_len == 0 || self.accounts.min_pin_len == 0 {
            return Err("Account length minimums must be at least 1".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::parse_toml(
            r#"
            [timing]
            autosave_every = 50

            [energy]
            regen_base = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(config.timing.autosave_every, 50);
        assert_eq!(config.timing.interval_ms, 1000);
        assert_eq!(config.energy.regen_base, 0.2);
        assert_eq!(config.energy.starting, 100.0);
        assert_eq!(config.accounts.min_pin_len, 4);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let err = GameConfig::parse_toml("[energy]\nstarting = 2000.0\n").unwrap_err();
        assert!(matches!(err, PocketError::Config(_)));

        let err = GameConfig::parse_toml("[timing]\nautosave_every = 0\n").unwrap_err();
        assert!(matches!(err, PocketError::Config(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::parse_toml("[timing\n").unwrap_err();
        assert!(matches!(err, PocketError::TomlError(_)));
    }
}
