//! Session driver
//!
//! A [`Session`] is the one logged-in context: the account, its active
//! planet, the random stream and the speed/pause controls. The caller
//! invokes [`Session::on_interval`] once per real-time interval; the
//! session converts speed into whole ticks, feeds events to the
//! achievement evaluator, regenerates energy and autosaves.

pub mod speed;

pub use speed::{Speed, TickBudget};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::account::{Account, AccountStore};
use crate::catalog::{find_power, AchievementId, DivinePower, PlanetArchetype};
use crate::core::config::GameConfig;
use crate::core::error::{PocketError, Result};
use crate::core::types::PlanetId;
use crate::planet::power::apply_divine_power;
use crate::planet::{Planet, TriggeredEvent};
use crate::progression::{evaluate, evaluator::SURVIVOR_MIN_BIOMASS};

/// What one driver interval did
#[derive(Debug, Clone, Default)]
pub struct IntervalReport {
    pub ticks: u32,
    pub events: Vec<TriggeredEvent>,
    pub unlocked: Vec<AchievementId>,
    /// Energy actually credited by regeneration, after the cap
    pub energy_gained: f64,
    /// Whether the account was persisted this interval
    pub saved: bool,
}

#[derive(Debug, Clone)]
pub struct PowerReport {
    pub power: &'static DivinePower,
    pub unlocked: Vec<AchievementId>,
}

pub struct Session<S: AccountStore> {
    store: S,
    config: GameConfig,
    account: Account,
    active: Option<(PlanetId, Planet)>,
    rng: ChaCha8Rng,
    speed: Speed,
    paused: bool,
    budget: TickBudget,
}

impl<S: AccountStore> Session<S> {
    /// Start a session for a logged-in account
    ///
    /// The account's current planet, if any, becomes the active planet.
    /// A seed makes the whole session reproducible. Fails with
    /// `PocketError::Config` when the configuration does not validate.
    pub fn new(
        store: S,
        config: GameConfig,
        account: Account,
        seed: Option<u64>,
    ) -> Result<Self> {
        config.validate().map_err(PocketError::Config)?;

        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let active = account.current_planet.as_ref().and_then(|id| {
            account
                .planets
                .get(id)
                .map(|snapshot| (id.clone(), Planet::from_snapshot(snapshot.clone())))
        });

        Ok(Self {
            store,
            config,
            account,
            active,
            rng,
            speed: Speed::default(),
            paused: false,
            budget: TickBudget::default(),
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn planet(&self) -> Option<&Planet> {
        self.active.as_ref().map(|(_, planet)| planet)
    }

    pub fn planet_id(&self) -> Option<&PlanetId> {
        self.active.as_ref().map(|(id, _)| id)
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        tracing::debug!(speed = speed.label(), "Speed changed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause flag; returns the new state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Create a planet, make it current and persist the account
    ///
    /// A blank name is replaced by `Planet-NNNN`.
    pub fn create_planet(
        &mut self,
        name: &str,
        archetype: PlanetArchetype,
    ) -> Result<(PlanetId, Vec<AchievementId>)> {
        self.sync_active();

        let name = match name.trim() {
            "" => format!("Planet-{}", self.rng.gen_range(1000..=9999)),
            given => given.to_string(),
        };
        let id = PlanetId::new();
        let planet = Planet::new(name, archetype);

        self.account.planets.insert(id.clone(), planet.to_snapshot());
        self.account.current_planet = Some(id.clone());
        self.account.total_planets += 1;
        tracing::info!(
            account = %self.account.username,
            planet = %planet.name,
            archetype = %archetype,
            "Planet created"
        );

        let unlocked = evaluate(Some(&planet), &mut self.account, None);
        self.active = Some((id.clone(), planet));
        self.budget.reset();
        self.save()?;
        Ok((id, unlocked))
    }

    /// Switch the active planet to one the account owns
    pub fn select_planet(&mut self, id: &PlanetId) -> Result<()> {
        let snapshot = self
            .account
            .planets
            .get(id)
            .cloned()
            .ok_or_else(|| PocketError::PlanetNotFound(id.clone()))?;

        self.sync_active();
        self.account.current_planet = Some(id.clone());
        self.active = Some((id.clone(), Planet::from_snapshot(snapshot)));
        self.budget.reset();
        Ok(())
    }

    /// Run one driver interval
    pub fn on_interval(&mut self) -> Result<IntervalReport> {
        let mut report = IntervalReport::default();
        if self.paused {
            return Ok(report);
        }
        let Some((_, planet)) = self.active.as_mut() else {
            return Ok(report);
        };

        let age_before = planet.age;
        report.ticks = self.budget.take(self.speed);

        for _ in 0..report.ticks {
            let triggered = planet.advance(&mut self.rng);
            self.account.stats.total_years += 1;

            if let Some(event) = triggered {
                let survived = match event {
                    TriggeredEvent::ShieldBlocked { .. } => true,
                    TriggeredEvent::Environmental(_) => {
                        event.is_extinction_class()
                            && planet.resources.biomass > SURVIVOR_MIN_BIOMASS
                    }
                };
                if survived {
                    self.account.stats.disasters_survived += 1;
                }
                report
                    .unlocked
                    .extend(evaluate(Some(&*planet), &mut self.account, Some(&event)));
                report.events.push(event);
            }
        }

        let energy = &self.config.energy;
        let regen = (energy.regen_base + planet.life_stage() as f64 * energy.regen_per_stage)
            * self.speed.multiplier();
        report.energy_gained = self.account.add_energy(regen);

        let stats = &mut self.account.stats;
        stats.max_life_stage = stats.max_life_stage.max(planet.life_stage());

        report
            .unlocked
            .extend(evaluate(Some(&*planet), &mut self.account, None));

        let age = planet.age;
        let every = self.config.timing.autosave_every;
        if age / every != age_before / every {
            self.save()?;
            report.saved = true;
            tracing::info!(account = %self.account.username, age, "Autosaved");
        }

        Ok(report)
    }

    /// Spend energy on a divine power for the active planet
    ///
    /// Nothing changes when the power is unknown, no planet is active or
    /// the balance is short.
    pub fn use_power(&mut self, power_id: &str) -> Result<PowerReport> {
        let Some((_, planet)) = self.active.as_mut() else {
            return Err(PocketError::NoActivePlanet);
        };
        let power =
            find_power(power_id).ok_or_else(|| PocketError::UnknownPower(power_id.to_string()))?;

        self.account.spend_energy(power.cost)?;
        self.account.divine_uses += 1;
        apply_divine_power(planet, power);
        tracing::info!(
            account = %self.account.username,
            planet = %planet.name,
            power = power.id,
            cost = power.cost,
            "Divine power used"
        );

        let unlocked = evaluate(Some(&*planet), &mut self.account, None);
        self.save()?;
        Ok(PowerReport { power, unlocked })
    }

    /// Write the active planet into the account and persist it
    pub fn save(&mut self) -> Result<()> {
        self.sync_active();
        self.store.save(&self.account)
    }

    /// Save and hand back the account
    pub fn logout(mut self) -> Result<Account> {
        self.save()?;
        tracing::info!(account = %self.account.username, "Logged out");
        Ok(self.account)
    }

    fn sync_active(&mut self) {
        if let Some((id, planet)) = &self.active {
            self.account.planets.insert(id.clone(), planet.to_snapshot());
            let stats = &mut self.account.stats;
            stats.max_life_stage = stats.max_life_stage.max(planet.life_stage());
        }
    }
}
