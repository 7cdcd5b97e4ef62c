//! Account persistence
//!
//! The engine never touches storage; the session saves through an
//! [`AccountStore`]. [`JsonFileStore`] keeps every account in one JSON file
//! of the form `{"users": {"<name>": {...}}}`. [`MemoryStore`] is used by
//! tests and the headless harness.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::account::model::{Account, AccountRecord};
use crate::core::error::{PocketError, Result};

pub trait AccountStore {
    /// Load an account; `PocketError::AccountNotFound` if it does not exist
    fn load(&self, username: &str) -> Result<Account>;

    /// Insert or replace the account under its username
    fn save(&mut self, account: &Account) -> Result<()>;

    fn usernames(&self) -> Result<Vec<String>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UsersFile {
    #[serde(default)]
    users: BTreeMap<String, AccountRecord>,
}

/// Single JSON file holding all accounts
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<UsersFile> {
        if !self.path.exists() {
            return Ok(UsersFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(UsersFile::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Write via a sibling temp file so a crash never leaves a torn file
    fn write(&self, users: &UsersFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string(users)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl AccountStore for JsonFileStore {
    fn load(&self, username: &str) -> Result<Account> {
        let mut users = self.read()?;
        let record = users
            .users
            .remove(username)
            .ok_or_else(|| PocketError::AccountNotFound(username.to_string()))?;
        Ok(Account::from_record(username, record))
    }

    fn save(&mut self, account: &Account) -> Result<()> {
        let mut users = self.read()?;
        users.users.insert(account.username.clone(), account.to_record());
        self.write(&users)?;
        tracing::debug!(
            account = %account.username,
            path = %self.path.display(),
            "Account saved"
        );
        Ok(())
    }

    fn usernames(&self) -> Result<Vec<String>> {
        Ok(self.read()?.users.into_keys().collect())
    }
}

/// In-process store; records still pass through the persisted form
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: AHashMap<String, AccountRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryStore {
    fn load(&self, username: &str) -> Result<Account> {
        self.records
            .get(username)
            .cloned()
            .map(|record| Account::from_record(username, record))
            .ok_or_else(|| PocketError::AccountNotFound(username.to_string()))
    }

    fn save(&mut self, account: &Account) -> Result<()> {
        self.records
            .insert(account.username.clone(), account.to_record());
        Ok(())
    }

    fn usernames(&self) -> Result<Vec<String>> {
        let mut names: Vec<_> = self.records.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::credentials::PinHasher;
    use crate::account::registry::login;
    use crate::catalog::PlanetArchetype;
    use crate::core::types::PlanetId;
    use crate::planet::Planet;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pocket-universe-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_account() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load("nobody"),
            Err(PocketError::AccountNotFound(_))
        ));
    }

    #[test]
    fn test_json_store_roundtrip() {
        let path = temp_path("pu_users.json");
        let mut store = JsonFileStore::new(&path);

        let mut account = Account::new("demiurge", "feedface", 100.0);
        let planet = Planet::new("Gaia", PlanetArchetype::Terra);
        let id = PlanetId::from("planet_1");
        account.planets.insert(id.clone(), planet.to_snapshot());
        account.current_planet = Some(id);
        store.save(&account).unwrap();

        let loaded = store.load("demiurge").unwrap();
        assert_eq!(loaded, account);
        assert_eq!(store.usernames().unwrap(), vec!["demiurge".to_string()]);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_json_store_reads_legacy_file() {
        let path = temp_path("pu_users.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"users": {"old": {
                "pin_hash": "03ac674216f3e15c",
                "created": 1700000000.5,
                "divine_energy": 245.3,
                "total_planets": 1,
                "achievements": ["creator", "life_giver"],
                "divine_uses": 3,
                "planets": {"planet_1700000000": {
                    "name": "Terra Nova", "type": "ocean", "age": 250, "life_stage": 2
                }},
                "current_planet": "planet_1700000000",
                "stats": {"total_years": 0, "max_life_stage": 0, "disasters_survived": 0}
            }}}"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        let account = store.load("old").unwrap();
        assert_eq!(account.divine_energy(), 245.3);
        assert_eq!(account.achievements().len(), 2);
        let current = account.current_planet.clone().unwrap();
        let planet = Planet::from_snapshot(account.planets[&current].clone());
        assert_eq!(planet.name, "Terra Nova");
        assert_eq!(planet.age, 250);
        assert_eq!(planet.archetype, PlanetArchetype::Ocean);

        let account = login(&store, &PinHasher, "old", "1234").unwrap();
        assert_eq!(account.username, "old");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
