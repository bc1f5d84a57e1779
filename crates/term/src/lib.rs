//! Terminal display module.
//!
//! The canvas itself lives in `core`; this crate is only the device it is
//! flushed to. Raw mode, alternate screen, hidden cursor and the bell are
//! handled here so nothing else has to touch the terminal.

pub mod renderer;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
