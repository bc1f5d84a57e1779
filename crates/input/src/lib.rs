//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::KeySignal`]s and folds the
//! keys pending at each tick into a single movement vector.

pub mod handler;
pub mod map;

pub use tui_starfield_types as types;

pub use handler::{CrosstermKeys, InputState, KeySource, ScriptedKeys};
pub use map::{should_quit, signal_for_key};
