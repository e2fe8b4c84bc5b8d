//! Line-oriented driver shared by the headless binary.
//!
//! Reads one command per line and writes every emitted snapshot as a JSON
//! line. Blank, unrecognised or non-UTF-8 lines are skipped.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::core::{GameSnapshot, GameState};
use crate::types::Command;

/// Write `snapshot` as one JSON line and flush.
pub fn write_snapshot(out: &mut impl Write, snapshot: &GameSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot).context("encoding snapshot")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Feed every command line from `input` to `game` until end of input.
///
/// Returns the number of snapshots written.
pub fn run_commands(
    game: &mut GameState,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<usize> {
    let mut buf = Vec::new();
    let mut lineno = 0;
    let mut written = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("reading input")? == 0 {
            break;
        }
        lineno += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            log::warn!("line {lineno}: skipping input that is not UTF-8");
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = Command::from_str(line) else {
            log::warn!("line {lineno}: ignoring unrecognised command {:?}", line.trim());
            continue;
        };
        if let Some(snapshot) = game.handle_command(command) {
            write_snapshot(out, &snapshot)?;
            written += 1;
        }
    }

    Ok(written)
}
