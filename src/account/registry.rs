//! Registration and login against an account store

use crate::account::credentials::CredentialHasher;
use crate::account::model::Account;
use crate::account::store::AccountStore;
use crate::core::config::GameConfig;
use crate::core::error::{PocketError, Result};

/// Create and persist a new account
///
/// Usernames are unique ignoring case. The new account starts with
/// `config.energy.starting` divine energy and no planets.
pub fn register<S, H>(
    store: &mut S,
    hasher: &H,
    config: &GameConfig,
    username: &str,
    pin: &str,
) -> Result<Account>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    let username = username.trim();
    let rules = &config.accounts;

    if username.chars().count() < rules.min_username_len {
        return Err(PocketError::UsernameTooShort {
            min: rules.min_username_len,
        });
    }
    if pin.chars().count() < rules.min_pin_len {
        return Err(PocketError::PinTooShort {
            min: rules.min_pin_len,
        });
    }

    let lowered = username.to_lowercase();
    if store
        .usernames()?
        .iter()
        .any(|existing| existing.to_lowercase() == lowered)
    {
        return Err(PocketError::AccountExists(username.to_string()));
    }

    let account = Account::new(username, hasher.verifier(pin), config.energy.starting);
    store.save(&account)?;
    tracing::info!(account = username, "Account registered");
    Ok(account)
}

/// Load an account after checking its PIN
pub fn login<S, H>(store: &S, hasher: &H, username: &str, pin: &str) -> Result<Account>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    let account = store.load(username.trim())?;
    if !hasher.verify(pin, &account.pin_hash) {
        tracing::warn!(account = %account.username, "Rejected login");
        return Err(PocketError::WrongPin);
    }
    tracing::info!(account = %account.username, "Logged in");
    Ok(account)
}
