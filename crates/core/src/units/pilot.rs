//! The player-steered sprite.

use std::rc::Rc;

use crate::art::{ArtError, FrameArt};
use crate::canvas::Canvas;
use crate::types::{BoundingBox, Movement, Position};

use super::Tickable;

/// Endless, restartable walk over an ordered list of frames.
///
/// The same frame may appear more than once to make it stay on screen longer.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    frames: Vec<Rc<FrameArt>>,
    next: usize,
}

impl FrameCycle {
    pub fn new(frames: Vec<Rc<FrameArt>>) -> Result<Self, ArtError> {
        if frames.is_empty() {
            return Err(ArtError::NoFrames);
        }
        Ok(Self { frames, next: 0 })
    }

    /// Build a cycle by picking `order` indices out of `frames`.
    pub fn from_order(frames: &[Rc<FrameArt>], order: &[usize]) -> Result<Self, ArtError> {
        let picked = order
            .iter()
            .filter_map(|&i| frames.get(i).cloned())
            .collect();
        Self::new(picked)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index the next call to `next` will yield.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl Iterator for FrameCycle {
    type Item = (usize, Rc<FrameArt>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        self.next = (self.next + 1) % self.frames.len();
        Some((index, Rc::clone(&self.frames[index])))
    }
}

#[derive(Debug, Clone)]
pub struct Pilot {
    position: Position,
    frames: FrameCycle,
    frame_index: Option<usize>,
    /// Frame and position drawn last tick, erased before the next draw.
    drawn: Option<(Rc<FrameArt>, Position)>,
}

impl Pilot {
    pub fn new(position: Position, frames: FrameCycle) -> Self {
        Self {
            position,
            frames,
            frame_index: None,
            drawn: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Index into the cycle of the frame currently on screen.
    pub fn frame_index(&self) -> Option<usize> {
        self.frame_index
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.drawn
            .as_ref()
            .map(|(frame, pos)| BoundingBox::at(*pos, frame.rows(), frame.columns()))
    }
}

/// Pull `start` back so an `extent` long sprite fits inside `[0, limit)`.
fn settle(start: f64, extent: usize, limit: u16) -> f64 {
    start.min(limit as f64 - extent as f64).max(0.0)
}

impl Tickable for Pilot {
    fn advance(&mut self, canvas: &mut Canvas, movement: Movement) {
        if let Some((frame, pos)) = self.drawn.take() {
            canvas.erase(&frame, pos.row, pos.column);
        }

        let Some((index, frame)) = self.frames.next() else {
            return;
        };
        let (rows, columns) = frame.size();
        // In case the frame grew or the start was off-grid.
        let settled = Position::new(
            settle(self.position.row, rows, canvas.rows()),
            settle(self.position.column, columns, canvas.columns()),
        );

        // Each axis moves only if the whole box still fits along it.
        let mut next = settled;
        let vertical =
            BoundingBox::at(settled.offset(Movement::new(movement.rows, 0.0)), rows, columns);
        if vertical.fits_rows(canvas.rows()) {
            next.row = vertical.top;
        }
        let horizontal =
            BoundingBox::at(settled.offset(Movement::new(0.0, movement.columns)), rows, columns);
        if horizontal.fits_columns(canvas.columns()) {
            next.column = horizontal.left;
        }
        self.position = next;

        canvas.draw(&frame, self.position.row, self.position.column);
        self.frame_index = Some(index);
        self.drawn = Some((frame, self.position));
    }
}
