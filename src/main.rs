//! Terminal star field runner (default binary).
//!
//! Loads the rocket sprites, takes over the terminal, and runs the driver loop
//! until the shot leaves the screen or a quit key is pressed.

use anyhow::Result;
use tracing::{error, info};

use tui_starfield::assets::load_frames;
use tui_starfield::config::{Config, FRAME_FILES};
use tui_starfield::driver::Driver;
use tui_starfield::input::CrosstermKeys;
use tui_starfield::logging;
use tui_starfield::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;
    info!(?config, "starting");

    // Sprites load before the terminal switches modes so errors print normally.
    let frames = load_frames(&config.frames_dir, &FRAME_FILES)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = Driver::new(&config, &frames, CrosstermKeys, &mut term).and_then(|mut d| d.run());

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(reason) => {
            info!(?reason, "exiting");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "run failed");
            Err(err)
        }
    }
}
