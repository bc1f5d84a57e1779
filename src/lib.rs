//! TUI Starfield (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_starfield::{core,input,term,types}` and
//! hosts the application layer: configuration, sprite loading, logging and the
//! driver loop.

pub use tui_starfield_core as core;
pub use tui_starfield_input as input;
pub use tui_starfield_term as term;
pub use tui_starfield_types as types;

pub mod assets;
pub mod config;
pub mod driver;
pub mod logging;
