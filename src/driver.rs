//! The driver loop: sample input, tick the scheduler, flush, pace.
//!
//! Generic over the key source and the display so whole runs can be played
//! back in tests without a terminal.

use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::config::{Config, PILOT_FRAME_ORDER};
use crate::core::{
    Canvas, Display, FrameArt, FrameCycle, Pilot, Scheduler, Shot, SimpleRng, TickOutcome,
    Twinkle,
};
use crate::input::{InputState, KeySource};
use crate::types::{Position, STAR_COUNT_MAX, STAR_COUNT_MIN, STAR_GLYPHS};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The required shot left the grid.
    ShotLanded,
    /// A quit key was pressed.
    Quit,
}

pub struct Driver<S, D> {
    input: InputState<S>,
    display: D,
    canvas: Canvas,
    scheduler: Scheduler,
    tick: Duration,
}

impl<S, D> Driver<S, D>
where
    S: KeySource,
    D: Display<Error = anyhow::Error>,
{
    /// Size the canvas to `display` and register the starting units.
    pub fn new(config: &Config, frames: &[Rc<FrameArt>], keys: S, display: D) -> Result<Self> {
        let (rows, columns) = display.grid_size()?;
        let mut canvas = Canvas::new(rows, columns);
        canvas.draw_border();

        let mut rng = SimpleRng::new(config.seed);
        let mut scheduler = Scheduler::new();
        let stars = populate(&mut scheduler, &canvas, config, frames, &mut rng)?;

        info!(
            rows,
            columns,
            stars,
            seed = config.seed,
            tick_ms = config.tick.as_millis() as u64,
            "scene ready"
        );

        Ok(Self {
            input: InputState::new(keys),
            display,
            canvas,
            scheduler,
            tick: config.tick,
        })
    }

    /// One tick: sample, advance, flush. `Some` when the run is over.
    pub fn step(&mut self) -> Result<Option<ExitReason>> {
        let movement = self.input.sample()?;
        if self.input.quit_requested() {
            return Ok(Some(ExitReason::Quit));
        }

        let outcome = self.scheduler.tick(&mut self.canvas, movement);
        self.canvas.flush(&mut self.display)?;

        match outcome {
            TickOutcome::Running => Ok(None),
            TickOutcome::Finished => Ok(Some(ExitReason::ShotLanded)),
        }
    }

    /// Step until the run ends, sleeping out the rest of each frame interval.
    pub fn run(&mut self) -> Result<ExitReason> {
        loop {
            let started = Instant::now();
            if let Some(reason) = self.step()? {
                info!(?reason, ticks = self.scheduler.ticks(), "run finished");
                return Ok(reason);
            }
            if let Some(rest) = self.tick.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn keys_mut(&mut self) -> &mut S {
        self.input.source_mut()
    }
}

/// Register stars, then the shot, then the pilot. Returns the star count.
///
/// Stars sit strictly inside the border. The shot leaves from just above the
/// pilot's nose, both centered horizontally.
pub fn populate(
    scheduler: &mut Scheduler,
    canvas: &Canvas,
    config: &Config,
    frames: &[Rc<FrameArt>],
    rng: &mut SimpleRng,
) -> Result<u32> {
    let rows = canvas.rows() as u32;
    let columns = canvas.columns() as u32;

    let mut stars = config
        .star_count
        .unwrap_or_else(|| rng.next_inclusive(STAR_COUNT_MIN, STAR_COUNT_MAX));
    if rows < 3 || columns < 3 {
        stars = 0;
    }
    for _ in 0..stars {
        let row = rng.next_inclusive(1, rows - 2);
        let column = rng.next_inclusive(1, columns - 2);
        let glyph = rng.choose(&STAR_GLYPHS);
        scheduler.register(Twinkle::new(
            Position::new(row as f64, column as f64),
            glyph,
            rng,
        ));
    }

    let cycle = FrameCycle::from_order(frames, &PILOT_FRAME_ORDER)?;
    let width = frames.first().map_or(0, |f| f.columns()) as f64;
    let mid_row = (rows / 2) as f64;
    let mid_column = (columns / 2) as f64;

    let shot = Shot::new(Position::new(mid_row, mid_column));
    if config.exit_on_shot {
        scheduler.register_required(shot);
    } else {
        scheduler.register(shot);
    }

    let nose = Position::new(mid_row + 1.0, mid_column - (width / 2.0).floor());
    scheduler.register(Pilot::new(nose, cycle));

    Ok(stars)
}
