//! Animation units: independently scripted behaviors advanced once per tick.
//!
//! Each unit keeps whatever state it needs between ticks (hold counters, frame
//! index, position, velocity) instead of blocking. A tick is one plain call to
//! [`Tickable::advance`].

pub mod pilot;
pub mod shot;
pub mod twinkle;

pub use pilot::{FrameCycle, Pilot};
pub use shot::{Shot, ShotStage};
pub use twinkle::{Twinkle, TWINKLE_PHASES};

use crate::canvas::Canvas;
use crate::types::Movement;

/// Something the scheduler can step.
pub trait Tickable {
    /// Advance exactly one tick, drawing on and erasing from `canvas`.
    fn advance(&mut self, canvas: &mut Canvas, movement: Movement);

    /// `false` once the unit has finished and should be pruned.
    fn is_alive(&self) -> bool {
        true
    }
}

/// The unit kinds the program runs.
#[derive(Debug, Clone)]
pub enum Unit {
    Twinkle(Twinkle),
    Shot(Shot),
    Pilot(Pilot),
}

impl Unit {
    pub fn kind(&self) -> &'static str {
        match self {
            Unit::Twinkle(_) => "twinkle",
            Unit::Shot(_) => "shot",
            Unit::Pilot(_) => "pilot",
        }
    }
}

impl Tickable for Unit {
    fn advance(&mut self, canvas: &mut Canvas, movement: Movement) {
        // Only the pilot is steered.
        match self {
            Unit::Twinkle(t) => t.advance(canvas, Movement::NONE),
            Unit::Shot(s) => s.advance(canvas, Movement::NONE),
            Unit::Pilot(p) => p.advance(canvas, movement),
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            Unit::Twinkle(t) => t.is_alive(),
            Unit::Shot(s) => s.is_alive(),
            Unit::Pilot(p) => p.is_alive(),
        }
    }
}

impl From<Twinkle> for Unit {
    fn from(value: Twinkle) -> Self {
        Unit::Twinkle(value)
    }
}

impl From<Shot> for Unit {
    fn from(value: Shot) -> Self {
        Unit::Shot(value)
    }
}

impl From<Pilot> for Unit {
    fn from(value: Pilot) -> Self {
        Unit::Pilot(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::Position;

    #[test]
    fn movement_reaches_only_the_pilot() {
        let mut canvas = Canvas::new(10, 40);

        // A twinkle or shot handed a movement must not move.
        let mut shot = Unit::from(Shot::new(Position::new(5.0, 20.0)));
        shot.advance(&mut canvas, Movement::new(1.0, 2.0));
        match &shot {
            Unit::Shot(s) => assert_eq!(s.position(), Position::new(5.0, 20.0)),
            other => panic!("unexpected {}", other.kind()),
        }

        let mut star = Unit::from(Twinkle::new(Position::new(1.0, 1.0), '+', &mut SimpleRng::new(3)));
        star.advance(&mut canvas, Movement::new(1.0, 2.0));
        assert_eq!(canvas.get(1, 1).unwrap().ch, '+');
    }
}
