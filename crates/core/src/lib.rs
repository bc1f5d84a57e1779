//! Core animation module - pure, deterministic, and testable
//!
//! Everything that decides what ends up on screen lives here. It has no
//! dependency on the terminal, so every behavior can be driven tick by tick
//! in tests.
//!
//! # Module Structure
//!
//! - [`art`]: sprite frames parsed from multi-line text
//! - [`canvas`]: the shared glyph grid and the [`Display`](canvas::Display) it is flushed to
//! - [`rng`]: seedable LCG, forked per unit
//! - [`units`]: `Twinkle`, `Shot` and `Pilot`
//! - [`scheduler`]: registration-order round robin over the units
//!
//! # Example
//!
//! ```
//! use tui_starfield_core::{Canvas, Scheduler, Shot, TickOutcome};
//! use tui_starfield_types::{Movement, Position};
//!
//! let mut canvas = Canvas::new(20, 100);
//! let mut scheduler: Scheduler = Scheduler::new();
//! scheduler.register_required(Shot::new(Position::new(8.0, 80.0)));
//!
//! let mut ticks = 0;
//! while scheduler.tick(&mut canvas, Movement::NONE) == TickOutcome::Running {
//!     ticks += 1;
//! }
//! // Two muzzle-flash ticks, 26 ticks in flight, and the tick it left the grid.
//! assert_eq!(ticks + 1, 2 + 27);
//! ```

pub mod art;
pub mod canvas;
pub mod rng;
pub mod scheduler;
pub mod units;

pub use tui_starfield_types as types;

pub use art::{ArtError, FrameArt};
pub use canvas::{Canvas, Cell, Display};
pub use rng::SimpleRng;
pub use scheduler::{Scheduler, TickOutcome, UnitId};
pub use units::{FrameCycle, Pilot, Shot, ShotStage, Tickable, Twinkle, Unit, TWINKLE_PHASES};
