//! Property tests for the planet engine invariants

use pocket_universe::catalog::{PlanetArchetype, POWER_CATALOG};
use pocket_universe::planet::{advance, apply_power, population_for, Planet, Resources};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn archetype() -> impl Strategy<Value = PlanetArchetype> {
    prop::sample::select(PlanetArchetype::ALL.to_vec())
}

fn resources() -> impl Strategy<Value = Resources> {
    (0.0..=100.0, 0.0..=100.0, -50.0..=150.0, 0.0..=100.0)
        .prop_map(|(w, o, t, b)| Resources::new(w, o, t, b))
}

fn power_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(POWER_CATALOG.iter().map(|p| p.id).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn resources_stay_in_bounds(
        archetype in archetype(),
        start in resources(),
        seed in any::<u64>(),
        powers in prop::collection::vec(power_id(), 0..20),
    ) {
        let mut planet = Planet::new("Prop", archetype);
        planet.resources = start;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for id in powers {
            for _ in 0..25 {
                advance(&mut planet, &mut rng);
                prop_assert!(planet.resources.is_within_bounds());
            }
            apply_power(&mut planet, id);
            prop_assert!(planet.resources.is_within_bounds());
        }
    }

    #[test]
    fn life_stage_never_decreases(
        archetype in archetype(),
        start in resources(),
        seed in any::<u64>(),
    ) {
        let mut planet = Planet::new("Prop", archetype);
        planet.resources = start;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut last = planet.life_stage();
        for _ in 0..500 {
            advance(&mut planet, &mut rng);
            prop_assert!(planet.life_stage() >= last);
            last = planet.life_stage();
        }
    }

    #[test]
    fn population_depends_only_on_stage_and_biomass(
        start in resources(),
        seed in any::<u64>(),
        ticks in 1usize..300,
    ) {
        let mut planet = Planet::new("Prop", PlanetArchetype::Terra);
        planet.resources = start;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..ticks {
            advance(&mut planet, &mut rng);
        }

        prop_assert_eq!(
            planet.population(),
            population_for(planet.life_stage(), planet.resources.biomass)
        );
    }

    #[test]
    fn unknown_powers_change_nothing(
        archetype in archetype(),
        start in resources(),
        id in "[a-z_]{1,12}",
    ) {
        prop_assume!(POWER_CATALOG.iter().all(|p| p.id != id));

        let mut planet = Planet::new("Prop", archetype);
        planet.resources = start;
        let before = planet.clone();

        prop_assert!(!apply_power(&mut planet, &id));
        prop_assert_eq!(planet, before);
    }
}
