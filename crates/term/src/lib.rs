//! Terminal rendering for the game.
//!
//! Snapshots are drawn into a plain framebuffer by [`GameView`], then flushed
//! to the terminal by [`TerminalRenderer`]. Only the renderer performs I/O;
//! everything else can be unit-tested.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, MAX_CELL_HEIGHT, MAX_CELL_WIDTH};
pub use renderer::{changed_rows, encode_changed_rows_into, encode_rows_into, TerminalRenderer};
