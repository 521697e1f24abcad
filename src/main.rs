use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use coin_puzzle::config::PuzzleConfig;
use coin_puzzle::state::Coins;

/// Build a coin flipping puzzle and print its state and move catalog.
#[derive(Parser)]
#[command(name = "coin-puzzle", about = "Inspect states of the coin flipping puzzle")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "puzzle.toml")]
    config: PathBuf,

    /// Override the number of coins
    #[arg(long)]
    coins: Option<usize>,

    /// Override the number of coins turned over per move
    #[arg(long)]
    flips: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", PuzzleConfig::default_toml());
        return Ok(());
    }

    let mut config = PuzzleConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(coins) = cli.coins {
        config.coins = coins;
    }
    if let Some(flips) = cli.flips {
        config.flips_per_move = flips;
    }
    log::debug!(
        "puzzle parameters: n = {}, m = {}",
        config.coins,
        config.flips_per_move
    );

    let puzzle = Coins::new(config.coins, config.flips_per_move)
        .context("constructing the puzzle")?;

    println!("{puzzle}");
    for (index, flip) in puzzle.flips().iter().enumerate() {
        println!("{index:4}: {flip}");
    }

    Ok(())
}
