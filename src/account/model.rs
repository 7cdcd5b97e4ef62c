//! Account state and its on-disk record

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{achievement, AchievementId};
use crate::core::error::{PocketError, Result};
use crate::core::types::{unix_timestamp, PlanetId, Tick};
use crate::planet::PlanetSnapshot;

/// Ceiling on the divine energy balance
pub const MAX_DIVINE_ENERGY: f64 = 1000.0;

/// Lifetime counters shown on the account screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    #[serde(default)]
    pub total_years: Tick,
    #[serde(default)]
    pub max_life_stage: usize,
    #[serde(default)]
    pub disasters_survived: u32,
}

/// A player account with its planets
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub username: String,
    /// Credential verifier produced by a `CredentialHasher`
    pub pin_hash: String,
    pub created: f64,
    divine_energy: f64,
    achievements: AHashSet<AchievementId>,
    pub total_planets: u32,
    /// Divine powers invoked across all planets
    pub divine_uses: u32,
    pub planets: AHashMap<PlanetId, PlanetSnapshot>,
    pub current_planet: Option<PlanetId>,
    pub stats: AccountStats,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        pin_hash: impl Into<String>,
        starting_energy: f64,
    ) -> Self {
        Self {
            username: username.into(),
            pin_hash: pin_hash.into(),
            created: unix_timestamp(),
            divine_energy: starting_energy.clamp(0.0, MAX_DIVINE_ENERGY),
            achievements: AHashSet::new(),
            total_planets: 0,
            divine_uses: 0,
            planets: AHashMap::new(),
            current_planet: None,
            stats: AccountStats::default(),
        }
    }

    pub fn divine_energy(&self) -> f64 {
        self.divine_energy
    }

    /// Add energy, saturating at the ceiling; returns the amount actually added
    pub fn add_energy(&mut self, amount: f64) -> f64 {
        let before = self.divine_energy;
        self.divine_energy = (before + amount.max(0.0)).min(MAX_DIVINE_ENERGY);
        self.divine_energy - before
    }

    /// Deduct a power's cost, refusing when the balance is short
    pub fn spend_energy(&mut self, cost: u32) -> Result<()> {
        let cost_f = f64::from(cost);
        if self.divine_energy < cost_f {
            return Err(PocketError::InsufficientEnergy {
                needed: cost,
                available: self.divine_energy,
            });
        }
        self.divine_energy -= cost_f;
        Ok(())
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.achievements.contains(&id)
    }

    /// Unlocked achievements in table order
    pub fn achievements(&self) -> Vec<AchievementId> {
        let mut ids: Vec<_> = self.achievements.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Record an achievement and pay its reward
    ///
    /// Returns false, paying nothing, if it was already unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if !self.achievements.insert(id) {
            return false;
        }
        let reward = achievement(id).reward;
        self.add_energy(f64::from(reward));
        tracing::info!(account = %self.username, achievement = %id, reward, "Achievement unlocked");
        true
    }

    /// Planet ids ordered by creation time
    pub fn planet_ids(&self) -> Vec<PlanetId> {
        let mut entries: Vec<_> = self.planets.iter().collect();
        entries.sort_by(|a, b| {
            a.1.created
                .total_cmp(&b.1.created)
                .then_with(|| a.0.cmp(b.0))
        });
        entries.into_iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn to_record(&self) -> AccountRecord {
        AccountRecord {
            pin_hash: self.pin_hash.clone(),
            created: self.created,
            divine_energy: self.divine_energy,
            total_planets: self.total_planets,
            achievements: self
                .achievements()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            divine_uses: self.divine_uses,
            planets: self
                .planets
                .iter()
                .map(|(id, snapshot)| (id.as_str().to_string(), snapshot.clone()))
                .collect(),
            current_planet: self.current_planet.as_ref().map(|id| id.as_str().to_string()),
            stats: self.stats.clone(),
        }
    }

    pub fn from_record(username: impl Into<String>, record: AccountRecord) -> Self {
        let username = username.into();
        let achievements = record
            .achievements
            .iter()
            .filter_map(|key| {
                let id = AchievementId::from_key(key);
                if id.is_none() {
                    tracing::warn!(
                        account = %username,
                        achievement = %key,
                        "Dropping unknown achievement"
                    );
                }
                id
            })
            .collect();

        Self {
            divine_energy: record.divine_energy.clamp(0.0, MAX_DIVINE_ENERGY),
            pin_hash: record.pin_hash,
            created: record.created,
            achievements,
            total_planets: record.total_planets,
            divine_uses: record.divine_uses,
            planets: record
                .planets
                .into_iter()
                .map(|(id, snapshot)| (PlanetId(id), snapshot))
                .collect(),
            current_planet: record.current_planet.map(PlanetId),
            stats: record.stats,
            username,
        }
    }
}

/// Persisted form of an account, keyed by username in the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub pin_hash: String,
    #[serde(default = "unix_timestamp")]
    pub created: f64,
    #[serde(default)]
    pub divine_energy: f64,
    #[serde(default)]
    pub total_planets: u32,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub divine_uses: u32,
    #[serde(default)]
    pub planets: BTreeMap<String, PlanetSnapshot>,
    #[serde(default)]
    pub current_planet: Option<String>,
    #[serde(default)]
    pub stats: AccountStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_is_capped() {
        let mut account = Account::new("god", "hash", 990.0);
        assert_eq!(account.add_energy(50.0), 10.0);
        assert_eq!(account.divine_energy(), MAX_DIVINE_ENERGY);
    }

    #[test]
    fn test_spend_energy() {
        let mut account = Account::new("god", "hash", 30.0);
        account.spend_energy(20).unwrap();
        assert_eq!(account.divine_energy(), 10.0);

        let err = account.spend_energy(15).unwrap_err();
        assert!(matches!(err, PocketError::InsufficientEnergy { needed: 15, .. }));
        assert_eq!(account.divine_energy(), 10.0);
    }

    #[test]
    fn test_unlock_pays_once() {
        let mut account = Account::new("god", "hash", 0.0);
        assert!(account.unlock(AchievementId::Creator));
        assert!(!account.unlock(AchievementId::Creator));
        assert_eq!(account.divine_energy(), 50.0);
        assert_eq!(account.achievements(), vec![AchievementId::Creator]);
    }

    #[test]
    fn test_record_roundtrip_preserves_fields() {
        let mut account = Account::new("god", "abc123", 100.0);
        account.unlock(AchievementId::LifeGiver);
        account.total_planets = 2;
        account.divine_uses = 7;
        account.stats.total_years = 500;

        let record = account.to_record();
        let json = serde_json::to_string(&record).unwrap();
        let restored = Account::from_record("god", serde_json::from_str(&json).unwrap());
        assert_eq!(restored, account);
    }

    #[test]
    fn test_unknown_achievement_keys_are_dropped() {
        let record: AccountRecord = serde_json::from_str(
            r#"{"pin_hash": "x", "achievements": ["creator", "speedrunner"]}"#,
        )
        .unwrap();
        let account = Account::from_record("god", record);
        assert_eq!(account.achievements(), vec![AchievementId::Creator]);
        assert_eq!(account.divine_energy(), 0.0);
        assert!(account.current_planet.is_none());
    }
}
