//! Terminal 2048 (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048::{core, input, term, types}` and adds the
//! configuration layer and the headless command loop used by the binaries.

pub mod config;
pub mod headless;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
