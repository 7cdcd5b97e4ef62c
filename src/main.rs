//! Pocket Universe - Entry Point
//!
//! Console driver: register or log in, then nurture planets with text
//! commands. One `tick` is one driver interval; `live` runs intervals in
//! real time at the configured pace.

use clap::Parser;
use pocket_universe::account::{login, register, Account, JsonFileStore, PinHasher};
use pocket_universe::catalog::{
    achievement, describe_effects, PlanetArchetype, ACHIEVEMENTS, POWER_CATALOG,
};
use pocket_universe::core::config::GameConfig;
use pocket_universe::core::error::Result;
use pocket_universe::core::types::PlanetId;
use pocket_universe::session::{IntervalReport, Session, Speed};

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Pocket Universe - nurture a planet from rock to galactic empire
#[derive(Parser, Debug)]
#[command(name = "pocket-universe")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Account file, overriding the configured path
    #[arg(long)]
    users_file: Option<PathBuf>,

    /// Random seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("pocket_universe=info")
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_toml(path)?,
        None => GameConfig::default(),
    };
    if let Some(path) = args.users_file {
        config.storage.users_file = path;
    }

    tracing::info!(
        users_file = %config.storage.users_file.display(),
        "Pocket Universe starting..."
    );

    let mut store = JsonFileStore::new(&config.storage.users_file);
    let hasher = PinHasher::default();

    println!("\n=== POCKET UNIVERSE ===");
    println!("Nurture a world from lifeless rock to galactic empire");

    while let Some(account) = account_menu(&mut store, &hasher, &config)? {
        let mut session = Session::new(store.clone(), config.clone(), account, args.seed)?;
        let quit = play(&mut session)?;
        let account = session.logout()?;
        println!("Saved. Goodbye, {}!", account.username);
        if quit {
            break;
        }
    }

    Ok(())
}

/// Read one trimmed line; None on end of input
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn account_menu(
    store: &mut JsonFileStore,
    hasher: &PinHasher,
    config: &GameConfig,
) -> Result<Option<Account>> {
    println!();
    println!("Commands:");
    println!("  register <name> <pin>  - Create an account");
    println!("  login <name> <pin>     - Log in");
    println!("  quit / q               - Exit");

    loop {
        let Some(input) = prompt("account> ")? else {
            return Ok(None);
        };
        let mut words = input.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (None, _, _) => continue,
            (Some("quit" | "q"), _, _) => return Ok(None),
            (Some("register"), Some(name), Some(pin)) => {
                match register(store, hasher, config, name, pin) {
                    Ok(account) => {
                        println!(
                            "Welcome, {}! {:.0} divine energy to start.",
                            account.username,
                            account.divine_energy()
                        );
                        return Ok(Some(account));
                    }
                    Err(e) => println!("{}", e),
                }
            }
            (Some("login"), Some(name), Some(pin)) => match login(&*store, hasher, name, pin) {
                Ok(account) => {
                    println!("Welcome back, {}!", account.username);
                    return Ok(Some(account));
                }
                Err(e) => println!("{}", e),
            },
            _ => println!("Usage: register <name> <pin> | login <name> <pin> | quit"),
        }
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  create [type] [name]  - Create a planet (terra, ocean, desert, ice, volcanic)");
    println!("  planets               - List your planets");
    println!("  select <n>            - Switch to planet n from the list");
    println!("  tick / t              - Advance one interval");
    println!("  run <n>               - Advance n intervals");
    println!("  live <n>              - Advance n intervals in real time");
    println!("  powers                - List divine powers");
    println!("  power <id>            - Use a divine power");
    println!("  speed <0.5|1|2|5>     - Set simulation speed");
    println!("  pause                 - Pause or resume");
    println!("  status / s            - Show the active planet");
    println!("  history               - Recent planet history");
    println!("  achievements          - Show achievements");
    println!("  save                  - Save now");
    println!("  logout                - Save and return to the account menu");
    println!("  quit / q              - Save and exit");
}

/// Command loop for a logged-in account; true when the player quit
fn play(session: &mut Session<JsonFileStore>) -> Result<bool> {
    print_help();

    loop {
        display_status(session);

        let Some(input) = prompt("> ")? else {
            return Ok(true);
        };
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input.as_str(), ""),
        };

        match command {
            "" => continue,
            "quit" | "q" => return Ok(true),
            "logout" => return Ok(false),
            "help" | "h" => print_help(),
            "create" => create(session, rest)?,
            "planets" => list_planets(session.account(), session.planet_id()),
            "select" => select(session, rest)?,
            "tick" | "t" => {
                let report = session.on_interval()?;
                print_report(&report);
            }
            "run" | "live" => match rest.parse::<u32>() {
                Ok(n) => run_intervals(session, n, command == "live")?,
                Err(_) => println!("Usage: {} <number>", command),
            },
            "powers" => {
                for power in POWER_CATALOG {
                    println!(
                        "  {:<10} {:<16} cost {:>3}  {}",
                        power.id,
                        power.name,
                        power.cost,
                        describe_effects(power.effects)
                    );
                }
            }
            "power" => match session.use_power(rest) {
                Ok(report) => {
                    println!("{}! {}", report.power.name, report.power.description);
                    print_unlocked(&report.unlocked);
                }
                Err(e) => println!("{}", e),
            },
            "speed" => match Speed::from_label(rest) {
                Some(speed) => {
                    session.set_speed(speed);
                    println!("Speed set to {}", speed);
                }
                None => println!("Usage: speed <0.5|1|2|5>"),
            },
            "pause" => {
                if session.toggle_pause() {
                    println!("Paused");
                } else {
                    println!("Resumed");
                }
            }
            "status" | "s" => display_detailed_status(session),
            "history" => match session.planet() {
                Some(planet) => {
                    for entry in planet.history().iter().rev().take(10) {
                        println!("  Year {:>6}: {}", entry.age, entry.text);
                    }
                }
                None => println!("No active planet"),
            },
            "achievements" => {
                let account = session.account();
                for entry in ACHIEVEMENTS {
                    let mark = if account.has_achievement(entry.id) { "x" } else { " " };
                    println!(
                        "  [{}] {:<16} {:<30} +{}",
                        mark, entry.name, entry.description, entry.reward
                    );
                }
            }
            "save" => {
                session.save()?;
                println!("Saved");
            }
            _ => println!("Unknown command. Type 'help' for the command list."),
        }
    }
}

fn create(session: &mut Session<JsonFileStore>, rest: &str) -> Result<()> {
    let (archetype, name) = match rest.split_once(' ') {
        Some((first, name)) => match PlanetArchetype::from_id(first) {
            Some(archetype) => (archetype, name),
            None => (PlanetArchetype::Terra, rest),
        },
        None => match PlanetArchetype::from_id(rest) {
            Some(archetype) => (archetype, ""),
            None => (PlanetArchetype::Terra, rest),
        },
    };

    let (_, unlocked) = session.create_planet(name, archetype)?;
    if let Some(planet) = session.planet() {
        println!("Created {} ({})", planet.name, planet.archetype);
    }
    print_unlocked(&unlocked);
    Ok(())
}

fn select(session: &mut Session<JsonFileStore>, rest: &str) -> Result<()> {
    let ids = session.account().planet_ids();
    let id = match rest.parse::<usize>() {
        Ok(n) if (1..=ids.len()).contains(&n) => ids[n - 1].clone(),
        _ => PlanetId::from(rest),
    };

    match session.select_planet(&id) {
        Ok(()) => {
            if let Some(planet) = session.planet() {
                println!("Now tending {}", planet.name);
            }
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn run_intervals(session: &mut Session<JsonFileStore>, n: u32, live: bool) -> Result<()> {
    let pause = Duration::from_millis(session.config().timing.interval_ms);
    let mut ticks = 0;
    for _ in 0..n {
        let report = session.on_interval()?;
        ticks += report.ticks;
        print_report(&report);
        if live {
            std::thread::sleep(pause);
        }
    }
    println!("Completed {} intervals ({} years).", n, ticks);
    Ok(())
}

fn list_planets(account: &Account, current: Option<&PlanetId>) {
    let ids = account.planet_ids();
    if ids.is_empty() {
        println!("No planets yet. Try: create terra Gaia");
        return;
    }
    for (i, id) in ids.iter().enumerate() {
        let snapshot = &account.planets[id];
        let mark = if Some(id) == current { "*" } else { " " };
        println!(
            "{} {}. {} ({}) - year {}, stage {}",
            mark,
            i + 1,
            snapshot.name,
            snapshot.archetype,
            snapshot.age,
            pocket_universe::catalog::stage(snapshot.life_stage).name
        );
    }
}

fn print_report(report: &IntervalReport) {
    for event in &report.events {
        println!("  ! {} - {}", event.name(), event.description());
    }
    print_unlocked(&report.unlocked);
}

fn print_unlocked(unlocked: &[pocket_universe::catalog::AchievementId]) {
    for id in unlocked {
        let entry = achievement(*id);
        println!("  Achievement unlocked: {} (+{} energy)", entry.name, entry.reward);
    }
}

fn display_status(session: &Session<JsonFileStore>) {
    let energy = session.account().divine_energy();
    match session.planet() {
        Some(planet) => println!(
            "\n[{}] {} {} | year {} | energy {:.1} | {}{}",
            planet.stage().icon,
            planet.name,
            planet.life_stage_name(),
            planet.age,
            energy,
            session.speed(),
            if session.is_paused() { " (paused)" } else { "" }
        ),
        None => println!("\nNo active planet | energy {:.1}", energy),
    }
}

fn display_detailed_status(session: &Session<JsonFileStore>) {
    let Some(planet) = session.planet() else {
        println!("No active planet");
        return;
    };
    let r = &planet.resources;

    println!();
    println!("=== {} ({}) ===", planet.name, planet.archetype);
    println!("Year:        {}", planet.age);
    println!("Life stage:  {} {}", planet.life_stage(), planet.life_stage_name());
    println!("Population:  {}", planet.population());
    println!("Water:       {:.1}", r.water);
    println!("Oxygen:      {:.1}", r.oxygen);
    println!("Temperature: {:.1}", r.temperature);
    println!("Biomass:     {:.1}", r.biomass);
    println!("Shields:     {}", planet.shield);

    let account = session.account();
    println!();
    println!("Divine energy: {:.1}", account.divine_energy());
    println!("Powers used:   {}", account.divine_uses);
    println!("Years tended:  {}", account.stats.total_years);
    println!("Disasters survived: {}", account.stats.disasters_survived);
}
