//! A star that cycles through display intensities.

use crate::canvas::Canvas;
use crate::rng::SimpleRng;
use crate::types::{Intensity, Movement, Position, TWINKLE_HOLD_MAX, TWINKLE_HOLD_MIN};

use super::Tickable;

/// Intensity cycle every star runs through.
pub const TWINKLE_PHASES: [Intensity; 4] = [
    Intensity::Dim,
    Intensity::Normal,
    Intensity::Bold,
    Intensity::Normal,
];

#[derive(Debug, Clone)]
pub struct Twinkle {
    position: Position,
    glyph: char,
    phase: usize,
    /// Ticks left before moving to the next phase.
    hold: u32,
    rng: SimpleRng,
}

impl Twinkle {
    /// A star starting at a random phase with a random hold, using its own
    /// generator forked from `rng`.
    pub fn new(position: Position, glyph: char, rng: &mut SimpleRng) -> Self {
        let mut own = rng.fork();
        let phase = own.next_range(TWINKLE_PHASES.len() as u32) as usize;
        let hold = own.next_inclusive(TWINKLE_HOLD_MIN, TWINKLE_HOLD_MAX);
        Self::with_phase(position, glyph, phase, hold, own)
    }

    /// A star with explicit starting state.
    pub fn with_phase(
        position: Position,
        glyph: char,
        phase: usize,
        hold: u32,
        rng: SimpleRng,
    ) -> Self {
        Self {
            position,
            glyph,
            phase: phase % TWINKLE_PHASES.len(),
            hold: hold.max(1),
            rng,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn intensity(&self) -> Intensity {
        TWINKLE_PHASES[self.phase]
    }

    pub fn hold(&self) -> u32 {
        self.hold
    }
}

impl Tickable for Twinkle {
    fn advance(&mut self, canvas: &mut Canvas, _movement: Movement) {
        self.hold -= 1;
        if self.hold == 0 {
            self.phase = (self.phase + 1) % TWINKLE_PHASES.len();
            self.hold = self.rng.next_inclusive(TWINKLE_HOLD_MIN, TWINKLE_HOLD_MAX);
        }
        // Redrawn every tick so a sprite passing over the star cannot erase it for good.
        canvas.draw_glyph(
            self.position.row,
            self.position.column,
            self.glyph,
            self.intensity(),
        );
    }
}
