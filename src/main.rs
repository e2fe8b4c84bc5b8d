//! Terminal 2048 runner (default binary).
//!
//! Reads key presses with crossterm, feeds them to the game as commands and
//! redraws whenever the game emits a snapshot or the terminal is resized.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};

use tui_2048::config::{AppConfig, DEFAULT_CONFIG_PATH};
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Debug, Parser)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal")]
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
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the configured file only; stderr belongs to the terminal UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log.file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.game.size, config.resolved_seed());
    let view = GameView::new(config.display.cell_width, config.display.cell_height);

    let mut snapshot = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            draw(term, &view, &snapshot, &mut fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(emitted) = handle_key_event(key).and_then(|cmd| game.handle_command(cmd)) {
                    snapshot = emitted;
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    snapshot: &GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snapshot, Viewport::new(w, h), fb);
    term.draw(fb)
}
