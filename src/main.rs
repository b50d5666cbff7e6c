//! Headless pursuit runner
//!
//! Runs a simulation to completion and prints a summary as text or JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use pokehunt::core::{Result, SimulationConfig};
use pokehunt::simulation::{Simulation, SimulationEvent, SimulationState};

#[derive(Parser, Debug)]
#[command(name = "pokehunt")]
#[command(about = "Run a hunters-vs-pokemon grid pursuit and report the catches")]
struct Args {
    /// TOML config file; missing keys use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Tick cap (overrides the config)
    #[arg(long)]
    ticks: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the grid after every tick
    #[arg(long)]
    show_grid: bool,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    total_catches: u32,
    leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Serialize)]
struct LeaderboardEntry {
    hunter: String,
    catches: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pokehunt=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load_from_toml(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.tick_cap = ticks;
    }

    let mut sim = Simulation::new(config)?;

    if args.show_grid {
        println!("tick 0");
        println!("{}", render_grid(sim.state(), sim.config()));
    }

    while !sim.is_finished() {
        let events = sim.step();
        if args.show_grid && !sim.is_finished() {
            let catches = events
                .iter()
                .filter(|e| matches!(e, SimulationEvent::PreyCaught { .. }))
                .count();
            println!("tick {} ({} caught)", sim.state().count, catches);
            println!("{}", render_grid(sim.state(), sim.config()));
        }
    }

    let summary = RunSummary {
        seed: sim.config().seed,
        ticks: sim.state().count,
        total_catches: sim.state().total_catches(),
        leaderboard: sim
            .leaderboard()
            .into_iter()
            .map(|(id, catches)| LeaderboardEntry {
                hunter: id.to_string(),
                catches,
            })
            .collect(),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("=== POKEHUNT ===");
        println!("Seed: {}  Ticks: {}  Caught: {}", summary.seed, summary.ticks, summary.total_catches);
        for entry in &summary.leaderboard {
            println!("  {:<12} {}", entry.hunter, entry.catches);
        }
    }

    Ok(())
}

/// One character per cell: species glyph for prey, H for hunters, P for police
fn render_grid(state: &SimulationState, config: &SimulationConfig) -> String {
    let rows = config.rows.max(0) as usize;
    let cols = config.cols.max(0) as usize;
    let mut cells = vec![vec!['.'; cols]; rows];

    let mut place = |x: i32, y: i32, glyph: char| {
        if let Some(cell) = cells.get_mut(x as usize).and_then(|row| row.get_mut(y as usize)) {
            *cell = glyph;
        }
    };

    for prey in &state.prey {
        place(prey.position.x, prey.position.y, prey.species.glyph());
    }
    for hunter in &state.hunters {
        place(hunter.position.x, hunter.position.y, 'H');
    }
    for officer in &state.police {
        place(officer.position.x, officer.position.y, 'P');
    }

    cells
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
