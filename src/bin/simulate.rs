//! Simulate random-agent matches from the command line.
//!
//! Usage:
//!   cargo run --release --bin simulate -- --players 3 --matches 500 --seed 7
//!   cargo run --release --bin simulate -- --config match.toml

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use love_letter::ai::{Agent, MatchRunner, RandomAgent};
use love_letter::core::{GameRng, MatchConfig};
use love_letter::rules::RoundEngine;

#[derive(Parser)]
#[command(name = "simulate", about = "Play random Love Letter matches and report win rates")]
struct Cli {
    /// Seats per match
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Number of matches to play
    #[arg(short, long, default_value = "100")]
    matches: usize,

    /// Base random seed
    #[arg(long, default_value = "42", env = "LOVE_LETTER_SEED")]
    seed: u64,

    /// Path to a match configuration TOML file
    #[arg(long, env = "LOVE_LETTER_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    let engine = RoundEngine::new(config);
    let runner = MatchRunner::new();

    let ids: Vec<String> = (1..=cli.players).map(|i| format!("p{i}")).collect();
    let names: Vec<String> = (1..=cli.players).map(|i| format!("Bot {i}")).collect();

    let mut seeds = GameRng::new(cli.seed);
    let mut wins = vec![0usize; cli.players];
    let mut rounds = 0u64;

    for index in 0..cli.matches {
        let state = engine.initialize_game(&ids, &names, GameRng::new(seeds.next_seed()))?;
        let mut agents: Vec<Box<dyn Agent>> = (0..cli.players)
            .map(|_| Box::new(RandomAgent::new(seeds.next_seed())) as Box<dyn Agent>)
            .collect();

        let report = runner.play_match(&engine, state, &mut agents)?;
        tracing::info!(
            game = index + 1,
            winner = %report.result.winner,
            rounds = report.result.rounds,
            actions = report.actions,
            "match complete"
        );

        if let Some(seat) = ids.iter().position(|id| report.result.winner.as_str() == id) {
            wins[seat] += 1;
        }
        rounds += u64::from(report.result.rounds);
    }

    println!(
        "{} matches, {} players, seed {}",
        cli.matches, cli.players, cli.seed
    );
    for (seat, count) in wins.iter().enumerate() {
        let share = if cli.matches == 0 {
            0.0
        } else {
            *count as f64 * 100.0 / cli.matches as f64
        };
        println!("  {:<8} {:>6} wins ({share:.1}%)", names[seat], count);
    }
    if cli.matches > 0 {
        println!("  average rounds per match: {:.2}", rounds as f64 / cli.matches as f64);
    }

    Ok(())
}
