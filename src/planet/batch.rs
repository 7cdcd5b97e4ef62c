//! Advancing many planets at once
//!
//! Planets share nothing, so each one is stepped on its own rayon task
//! with its own ChaCha stream. Results depend only on the seed and the
//! planet's position in the slice, never on thread scheduling.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::core::types::Tick;
use crate::planet::{tick, Planet, TriggeredEvent};

/// Events one planet saw during a batch run, tagged with the age they hit
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub events: Vec<(Tick, TriggeredEvent)>,
}

/// Deterministic random stream for the planet at `index`
pub fn planet_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Advance one planet `ticks` times on its own stream
pub fn advance_planet(planet: &mut Planet, seed: u64, index: usize, ticks: u64) -> BatchOutcome {
    let mut rng = planet_rng(seed, index);
    let mut outcome = BatchOutcome::default();
    for _ in 0..ticks {
        if let Some(event) = tick::advance(planet, &mut rng) {
            outcome.events.push((planet.age, event));
        }
    }
    outcome
}

/// Advance every planet `ticks` times in parallel
pub fn advance_planets_parallel(
    planets: &mut [Planet],
    seed: u64,
    ticks: u64,
) -> Vec<BatchOutcome> {
    planets
        .par_iter_mut()
        .enumerate()
        .map(|(index, planet)| advance_planet(planet, seed, index, ticks))
        .collect()
}

/// Same as [`advance_planets_parallel`] on the calling thread
pub fn advance_planets_sequential(
    planets: &mut [Planet],
    seed: u64,
    ticks: u64,
) -> Vec<BatchOutcome> {
    planets
        .iter_mut()
        .enumerate()
        .map(|(index, planet)| advance_planet(planet, seed, index, ticks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlanetArchetype;

    fn fleet() -> Vec<Planet> {
        PlanetArchetype::ALL
            .iter()
            .map(|a| Planet::new(a.name(), *a))
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut parallel = fleet();
        let mut sequential = fleet();

        let parallel_outcomes = advance_planets_parallel(&mut parallel, 42, 300);
        let sequential_outcomes = advance_planets_sequential(&mut sequential, 42, 300);

        for (a, b) in parallel.iter().zip(&sequential) {
            assert_eq!(a.resources, b.resources);
            assert_eq!(a.life_stage(), b.life_stage());
            assert_eq!(a.history(), b.history());
        }
        for (a, b) in parallel_outcomes.iter().zip(&sequential_outcomes) {
            assert_eq!(a.events, b.events);
        }
    }

    #[test]
    fn test_advance_planet_uses_indexed_stream() {
        let mut batched = fleet();
        advance_planets_sequential(&mut batched, 9, 200);

        let mut single = Planet::new(PlanetArchetype::ALL[2].name(), PlanetArchetype::ALL[2]);
        let mut rng = planet_rng(9, 2);
        for _ in 0..200 {
            tick::advance(&mut single, &mut rng);
        }
        assert_eq!(single.resources, batched[2].resources);
        assert_eq!(single.history(), batched[2].history());
    }

    #[test]
    fn test_outcomes_line_up_with_planets() {
        let mut planets = fleet();
        let outcomes = advance_planets_parallel(&mut planets, 7, 500);
        assert_eq!(outcomes.len(), planets.len());
        for planet in &planets {
            assert_eq!(planet.age, 500);
        }
    }
}
