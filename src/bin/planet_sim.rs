//! Headless Planet Simulator
//!
//! Advances a fleet of planets for a fixed number of years and prints a
//! summary. Each planet gets its own seeded stream, so a seed always
//! reproduces the same run.

use std::time::Instant;

use clap::Parser;
use pocket_universe::catalog::PlanetArchetype;
use pocket_universe::planet::{
    advance_planets_parallel, advance_planets_sequential, BatchOutcome, Planet, TriggeredEvent,
};
use serde::Serialize;

/// Headless Planet Simulator - batch runs for balancing
#[derive(Parser, Debug)]
#[command(name = "planet_sim")]
#[command(about = "Advance planets without a player and report how they developed")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Years to simulate per planet
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Number of planets
    #[arg(long, default_value_t = 5)]
    planets: usize,

    /// Archetype for every planet (terra, ocean, desert, ice, volcanic);
    /// cycles through all of them when omitted
    #[arg(long)]
    archetype: Option<String>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Step planets one after another instead of on the rayon pool
    #[arg(long)]
    sequential: bool,
}

#[derive(Serialize)]
struct PlanetSummary {
    name: String,
    archetype: &'static str,
    age: u64,
    life_stage: usize,
    stage_name: &'static str,
    population: u64,
    water: f64,
    oxygen: f64,
    temperature: f64,
    biomass: f64,
    events: usize,
    extinctions: usize,
    shield_blocks: usize,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    elapsed_ms: f64,
    planets: Vec<PlanetSummary>,
}

fn summarize(planet: &Planet, outcome: &BatchOutcome) -> PlanetSummary {
    let count = |pred: fn(&TriggeredEvent) -> bool| {
        outcome.events.iter().filter(|(_, event)| pred(event)).count()
    };

    PlanetSummary {
        name: planet.name.clone(),
        archetype: planet.archetype.id(),
        age: planet.age,
        life_stage: planet.life_stage(),
        stage_name: planet.life_stage_name(),
        population: planet.population(),
        water: planet.resources.water,
        oxygen: planet.resources.oxygen,
        temperature: planet.resources.temperature,
        biomass: planet.resources.biomass,
        events: outcome.events.len(),
        extinctions: count(|e| e.is_extinction_class()),
        shield_blocks: count(|e| matches!(e, TriggeredEvent::ShieldBlocked { .. })),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("pocket_universe=warn")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let fixed = match args.archetype.as_deref() {
        Some(id) => match PlanetArchetype::from_id(id) {
            Some(archetype) => Some(archetype),
            None => {
                eprintln!("Unknown archetype '{}', cycling through all", id);
                None
            }
        },
        None => None,
    };

    let mut planets: Vec<Planet> = (0..args.planets)
        .map(|i| {
            let archetype =
                fixed.unwrap_or(PlanetArchetype::ALL[i % PlanetArchetype::ALL.len()]);
            Planet::new(format!("{}-{}", archetype.name(), i + 1), archetype)
        })
        .collect();

    let start = Instant::now();
    let outcomes = if args.sequential {
        advance_planets_sequential(&mut planets, seed, args.ticks)
    } else {
        advance_planets_parallel(&mut planets, seed, args.ticks)
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let summary = RunSummary {
        seed,
        ticks: args.ticks,
        elapsed_ms,
        planets: planets
            .iter()
            .zip(&outcomes)
            .map(|(planet, outcome)| summarize(planet, outcome))
            .collect(),
    };

    match args.format.as_str() {
        "text" => print_text(&summary),
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to encode summary: {}", e),
            }
        }
    }
}

fn print_text(summary: &RunSummary) {
    println!("Planet Simulation");
    println!("=================");
    println!("Seed: {}  Years: {}  Time: {:.2}ms", summary.seed, summary.ticks, summary.elapsed_ms);
    println!();
    for p in &summary.planets {
        println!("{} ({})", p.name, p.archetype);
        println!("  Stage {} {}  population {}", p.life_stage, p.stage_name, p.population);
        println!(
            "  water {:.1}  oxygen {:.1}  temp {:.1}  biomass {:.1}",
            p.water, p.oxygen, p.temperature, p.biomass
        );
        println!(
            "  events {}  extinctions {}  shield blocks {}",
            p.events, p.extinctions, p.shield_blocks
        );
    }
}
