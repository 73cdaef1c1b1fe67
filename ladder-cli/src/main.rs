//! Ladder CLI — play a ladder game and check game configs.
//!
//! Commands:
//! - `play` — build a ladder from flags or a TOML config and print results
//! - `check` — validate a TOML config without playing it

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use ladder_runner::{GameConfig, LadderGame, LadderGameResult, ALL_KEYWORD};
use tracing::{debug, info};

const DEFAULT_HEIGHT: usize = 5;

#[derive(Parser)]
#[command(name = "ladder", about = "Ladder game (Amidakuji) simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a ladder and reveal which product each player reaches.
    Play {
        /// Path to a TOML game config. Mutually exclusive with --players/--products.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Comma-separated player names (e.g., pobi,crong,jk).
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,

        /// Comma-separated products, one per player.
        #[arg(long, value_delimiter = ',')]
        products: Vec<String>,

        /// Number of rows in the ladder (default 5). Overrides the config's height.
        #[arg(long)]
        height: Option<usize>,

        /// Seed for a reproducible ladder. Overrides the config's seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Player whose result to show, or `all`.
        #[arg(long, default_value = ALL_KEYWORD)]
        show: String,

        /// Print results as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Validate a TOML game config.
    Check {
        /// Path to a TOML game config.
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            players,
            products,
            height,
            seed,
            show,
            json,
        } => run_play(config, players, products, height, seed, &show, json),
        Commands::Check { config } => run_check(config),
    }
}

fn run_play(
    config_path: Option<PathBuf>,
    players: Vec<String>,
    products: Vec<String>,
    height: Option<usize>,
    seed: Option<u64>,
    show: &str,
    json: bool,
) -> Result<()> {
    let mut config = resolve_config(config_path, players, products, height)?;
    if seed.is_some() {
        config.seed = seed;
    }

    let game = config.build_game()?;
    let result = game.progress()?;
    debug!(entries = result.len(), "game finished");

    if json {
        print_json(&result, show)?;
    } else {
        print_summary(&game, &result, show)?;
    }
    Ok(())
}

fn run_check(config_path: PathBuf) -> Result<()> {
    let config = GameConfig::from_file(&config_path)?;
    let game = config.build_game()?;
    info!(path = %config_path.display(), "config is valid");
    println!(
        "OK: {} players, {} products, height {}",
        game.players().len(),
        game.products().len(),
        game.ladder().height()
    );
    Ok(())
}

fn resolve_config(
    config_path: Option<PathBuf>,
    players: Vec<String>,
    products: Vec<String>,
    height: Option<usize>,
) -> Result<GameConfig> {
    let has_names = !players.is_empty() || !products.is_empty();
    match config_path {
        Some(_) if has_names => {
            bail!("--config and --players/--products are mutually exclusive")
        }
        Some(path) => {
            let mut config = GameConfig::from_file(&path)?;
            if let Some(height) = height {
                config.height = height;
            }
            Ok(config)
        }
        None if players.is_empty() || products.is_empty() => {
            bail!("either --config or both --players and --products are required")
        }
        None => Ok(GameConfig {
            players,
            products,
            height: height.unwrap_or(DEFAULT_HEIGHT),
            seed: None,
        }),
    }
}

fn print_summary(game: &LadderGame, result: &LadderGameResult, show: &str) -> Result<()> {
    println!();
    println!("=== Ladder Result ===");
    println!(
        "Players: {}   Height: {}",
        game.players().len(),
        game.ladder().height()
    );
    println!();

    if show == ALL_KEYWORD {
        for (player, product) in result.iter() {
            println!("{:<6} : {}", player.name(), product.name());
        }
    } else {
        println!("{}", result.result_of(show)?);
    }
    println!();
    Ok(())
}

fn print_json(result: &LadderGameResult, show: &str) -> Result<()> {
    let output = if show == ALL_KEYWORD {
        serde_json::to_string_pretty(result)?
    } else {
        let product = result.result_of(show)?;
        serde_json::to_string_pretty(&serde_json::json!({
            "player": show,
            "product": product,
        }))?
    };
    println!("{output}");
    Ok(())
}
