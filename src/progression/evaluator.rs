//! Achievement evaluator
//!
//! Stateless: every call walks the achievement table in order and unlocks
//! whatever is newly true. Unlocking pays the reward through the account,
//! so calling again with the same inputs changes nothing.

use crate::account::Account;
use crate::catalog::{AchievementId, ACHIEVEMENTS};
use crate::planet::{Planet, TriggeredEvent};

/// Biomass a planet must keep after an extinction-class hit to count as surviving it
pub const SURVIVOR_MIN_BIOMASS: f64 = 5.0;
/// Every tracked stat must exceed this for Balance
pub const BALANCE_THRESHOLD: f64 = 50.0;
/// Planet age that must be exceeded for Ancient World
pub const ANCIENT_AGE: u64 = 1000;

/// Unlock every achievement whose condition now holds
///
/// Returns the ids unlocked by this call, in table order.
pub fn evaluate(
    planet: Option<&Planet>,
    account: &mut Account,
    observed: Option<&TriggeredEvent>,
) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    for entry in ACHIEVEMENTS {
        if account.has_achievement(entry.id) {
            continue;
        }
        if is_met(entry.id, planet, account, observed) && account.unlock(entry.id) {
            unlocked.push(entry.id);
        }
    }
    unlocked
}

/// Whether the condition for `id` holds right now
pub fn is_met(
    id: AchievementId,
    planet: Option<&Planet>,
    account: &Account,
    observed: Option<&TriggeredEvent>,
) -> bool {
    let stage_at_least = |min: usize| planet.is_some_and(|p| p.life_stage() >= min);

    match id {
        AchievementId::Creator => account.total_planets >= 1,
        AchievementId::LifeGiver => stage_at_least(1),
        AchievementId::Gardener => stage_at_least(3),
        AchievementId::Shepherd => stage_at_least(7),
        AchievementId::Civilization => stage_at_least(9),
        AchievementId::SpaceAge => stage_at_least(11),
        AchievementId::Galactic => stage_at_least(12),
        AchievementId::Survivor => match (planet, observed) {
            (Some(p), Some(event)) => {
                event.is_extinction_class() && p.resources.biomass > SURVIVOR_MIN_BIOMASS
            }
            _ => false,
        },
        AchievementId::Balance => planet.is_some_and(|p| {
            p.resources.water > BALANCE_THRESHOLD
                && p.resources.oxygen > BALANCE_THRESHOLD
                && p.resources.biomass > BALANCE_THRESHOLD
        }),
        AchievementId::Ancient => planet.is_some_and(|p| p.age > ANCIENT_AGE),
        AchievementId::Multiverse => account.total_planets >= 3,
        AchievementId::Divine10 => account.divine_uses >= 10,
        AchievementId::Divine50 => account.divine_uses >= 50,
    }
}
