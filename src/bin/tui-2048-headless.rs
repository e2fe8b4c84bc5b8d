//! Headless driver: commands on stdin, JSON snapshots on stdout.
//!
//! Each input line is one command (`up`, `right`, `down`, `left`, `restart`).
//! The initial snapshot and every snapshot emitted by a command are written
//! as one JSON object per line. Unrecognised or non-UTF-8 lines are skipped.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use tui_2048::config::{AppConfig, DEFAULT_CONFIG_PATH};
use tui_2048::core::GameState;
use tui_2048::headless::{run_commands, write_snapshot};

#[derive(Debug, Parser)]
#[command(name = "tui-2048-headless", about = "Drive a 2048 game from stdin")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Grid size, overriding the config file
    #[arg(long)]
    size: Option<u8>,

    /// RNG seed, overriding the config file (0 = random)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = AppConfig::load(&args.config)?;
    if let Some(size) = args.size {
        config.game.size = size;
    }
    if let Some(seed) = args.seed {
        config.game.seed = seed;
    }
    config.validate()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log.level.as_str()))
        .init();

    let mut game = GameState::new(config.game.size, config.resolved_seed());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_snapshot(&mut out, &game.snapshot())?;

    let written = run_commands(&mut game, io::stdin().lock(), &mut out)?;
    log::debug!("input closed after {written} snapshots");
    out.flush()?;
    Ok(())
}
