//! Projectile: a two-frame muzzle flash, then straight-line flight until it
//! leaves the grid interior.

use tracing::debug;

use crate::canvas::Canvas;
use crate::types::{Intensity, Movement, Position, SHOT_COLUMN_SPEED, SHOT_ROW_SPEED};

use super::Tickable;

const SPARK_GLYPH: char = '*';
const FLARE_GLYPH: char = 'O';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotStage {
    /// First muzzle-flash frame.
    Spark,
    /// Second muzzle-flash frame.
    Flare,
    Flight,
    Dead,
}

#[derive(Debug, Clone)]
pub struct Shot {
    position: Position,
    velocity: Movement,
    glyph: char,
    stage: ShotStage,
    /// Cell drawn on the previous tick, erased on the next one.
    drawn_at: Option<Position>,
    flight_ticks: u32,
}

impl Shot {
    /// A shot fired upward from `start`.
    pub fn new(start: Position) -> Self {
        Self::with_velocity(start, Movement::new(SHOT_ROW_SPEED, SHOT_COLUMN_SPEED))
    }

    pub fn with_velocity(start: Position, velocity: Movement) -> Self {
        let glyph = if velocity.columns != 0.0 { '-' } else { '|' };
        Self {
            position: start,
            velocity,
            glyph,
            stage: ShotStage::Spark,
            drawn_at: None,
            flight_ticks: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn stage(&self) -> ShotStage {
        self.stage
    }

    /// Ticks spent in flight, counting the terminal one.
    pub fn flight_ticks(&self) -> u32 {
        self.flight_ticks
    }

    fn inside_interior(&self, canvas: &Canvas) -> bool {
        let max_row = canvas.rows() as f64 - 1.0;
        let max_column = canvas.columns() as f64 - 1.0;
        let Position { row, column } = self.position;
        0.0 < row && row < max_row && 0.0 < column && column < max_column
    }

    fn draw(&mut self, canvas: &mut Canvas, glyph: char) {
        canvas.draw_glyph(self.position.row, self.position.column, glyph, Intensity::Normal);
        self.drawn_at = Some(self.position);
    }
}

impl Tickable for Shot {
    fn advance(&mut self, canvas: &mut Canvas, _movement: Movement) {
        match self.stage {
            ShotStage::Spark => {
                self.draw(canvas, SPARK_GLYPH);
                self.stage = ShotStage::Flare;
            }
            ShotStage::Flare => {
                self.draw(canvas, FLARE_GLYPH);
                self.stage = ShotStage::Flight;
            }
            ShotStage::Flight => {
                if let Some(prev) = self.drawn_at.take() {
                    canvas.clear_glyph(prev.row, prev.column);
                }
                if self.flight_ticks == 0 {
                    canvas.ring_bell();
                    debug!(
                        row = self.position.row,
                        column = self.position.column,
                        "shot launched"
                    );
                }
                self.flight_ticks += 1;
                self.position = self.position.offset(self.velocity);

                if self.inside_interior(canvas) {
                    self.draw(canvas, self.glyph);
                } else {
                    self.stage = ShotStage::Dead;
                    debug!(ticks = self.flight_ticks, "shot left the grid");
                }
            }
            ShotStage::Dead => {}
        }
    }

    fn is_alive(&self) -> bool {
        self.stage != ShotStage::Dead
    }
}
