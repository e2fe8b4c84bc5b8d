//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. The game is
//! turn based, so there is no repeat handling here: one key press is one
//! command.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
