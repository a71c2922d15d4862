//! pandemic-sim - play seeded random games headlessly and report outcomes.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pandemic_engine::{Difficulty, GameConfig, LossReason, SelfPlayConfig, SelfPlayRunner};

/// Self-play driver for the epidemic rule engine
#[derive(Parser, Debug)]
#[command(name = "pandemic-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "100")]
    games: usize,

    /// Seed of the first game; game i uses seed + i
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Number of players (2-4)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Difficulty: EASY, NORMAL or COVID19
    #[arg(short, long, default_value = "EASY")]
    difficulty: Difficulty,

    /// Abandon a game after this many accepted actions
    #[arg(long, default_value = "5000")]
    max_actions: usize,

    /// Load the game configuration from a JSON file instead
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print per-game summaries and the report as JSON
    #[arg(long)]
    json: bool,
}

fn game_config(args: &Args) -> Result<GameConfig, String> {
    match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
            GameConfig::from_json(&text).map_err(|e| e.to_string())
        }
        None => {
            let config = GameConfig::new(args.players).with_difficulty(args.difficulty);
            config.validate().map_err(|e| e.to_string())?;
            Ok(config)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let game = match game_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = SelfPlayConfig::new(game)
        .with_games(args.games)
        .with_max_actions(args.max_actions)
        .with_seed_offset(args.seed);
    let (summaries, report) = match SelfPlayRunner::new(config).run() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let out = serde_json::json!({ "games": summaries, "report": report });
        match serde_json::to_string_pretty(&out) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("games:       {}", report.games);
    println!("won:         {}", report.wins);
    println!("lost:        {}", report.total_losses());
    println!("  outbreaks:   {}", report.losses_by(LossReason::OutbreakLimit));
    println!(
        "  player deck: {}",
        report.losses_by(LossReason::PlayerDeckExhausted)
    );
    let mut cube_losses: Vec<_> = report.losses.iter().filter(|(k, _)| k.starts_with("cubes_")).collect();
    cube_losses.sort();
    for (key, count) in cube_losses {
        println!("  {key}: {count}");
    }
    println!("unfinished:  {}", report.unfinished);
    println!("mean turns:  {:.1}", report.mean_turns);
    println!("mean outbreaks: {:.2}", report.mean_outbreaks);
    ExitCode::SUCCESS
}
