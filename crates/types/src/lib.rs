//! Core types module - shared data structures and constants
//!
//! Pure data used by every other crate in the workspace: grid positions,
//! per-tick movement vectors, glyph intensities and directional key signals.
//! Nothing here touches the terminal.
//!
//! # Coordinates
//!
//! Positions are `(row, column)` pairs measured from the top-left corner of the
//! grid. Units keep fractional positions so they can move less than one cell
//! per tick; they always render at the rounded cell.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Default frame interval (20 FPS) |
//! | `TWINKLE_HOLD_MIN` | 1 | Shortest hold of a star phase, in ticks |
//! | `TWINKLE_HOLD_MAX` | 20 | Longest hold of a star phase, in ticks |
//!
//! # Examples
//!
//! ```
//! use tui_starfield_types::{KeySignal, Movement, Position};
//!
//! let pos = Position::new(7.6, 2.2);
//! assert_eq!(pos.cell(), (8, 2));
//!
//! let moved = pos.offset(Movement::new(-1.0, 2.0));
//! assert_eq!(moved.cell(), (7, 4));
//!
//! assert_eq!(KeySignal::Right.movement(), Movement::new(0.0, 2.0));
//! ```

/// Default frame interval in milliseconds.
pub const TICK_MS: u32 = 50;

/// Shortest hold of a single star phase, in ticks.
pub const TWINKLE_HOLD_MIN: u32 = 1;

/// Longest hold of a single star phase, in ticks (inclusive).
pub const TWINKLE_HOLD_MAX: u32 = 20;

/// Rows moved per tick while an up/down key is pressed.
pub const VERTICAL_STEP: f64 = 1.0;

/// Columns moved per tick while a left/right key is pressed.
///
/// Terminal cells are roughly twice as tall as they are wide.
pub const HORIZONTAL_STEP: f64 = 2.0;

/// Default projectile velocity in rows per tick (upward).
pub const SHOT_ROW_SPEED: f64 = -0.3;

/// Default projectile velocity in columns per tick.
pub const SHOT_COLUMN_SPEED: f64 = 0.0;

/// Glyphs a star may be drawn with.
pub const STAR_GLYPHS: [char; 4] = ['+', '*', '.', ':'];

/// Inclusive range for the randomized number of stars.
pub const STAR_COUNT_MIN: u32 = 60;
pub const STAR_COUNT_MAX: u32 = 80;

/// Display intensity of a drawn glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// A point on the grid with fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub row: f64,
    pub column: f64,
}

impl Position {
    pub const fn new(row: f64, column: f64) -> Self {
        Self { row, column }
    }

    /// The integer cell this position renders at.
    pub fn cell(self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    pub fn offset(self, delta: Movement) -> Self {
        Self {
            row: self.row + delta.rows,
            column: self.column + delta.columns,
        }
    }
}

/// Per-tick displacement, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Movement {
    pub rows: f64,
    pub columns: f64,
}

impl Movement {
    pub const NONE: Movement = Movement::new(0.0, 0.0);

    pub const fn new(rows: f64, columns: f64) -> Self {
        Self { rows, columns }
    }
}

/// Edges of a rectangle on the grid. `bottom` and `right` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl BoundingBox {
    /// Box of a `rows` x `columns` sprite anchored at `origin`.
    pub fn at(origin: Position, rows: usize, columns: usize) -> Self {
        Self {
            top: origin.row,
            bottom: origin.row + rows as f64,
            left: origin.column,
            right: origin.column + columns as f64,
        }
    }

    /// Whether the vertical extent lies inside `[0, rows)`.
    pub fn fits_rows(&self, rows: u16) -> bool {
        self.top >= 0.0 && self.bottom <= rows as f64
    }

    /// Whether the horizontal extent lies inside `[0, columns)`.
    pub fn fits_columns(&self, columns: u16) -> bool {
        self.left >= 0.0 && self.right <= columns as f64
    }
}

/// A recognized directional key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySignal {
    Up,
    Down,
    Left,
    Right,
}

impl KeySignal {
    /// Displacement this signal asks for on its own axis.
    pub fn movement(self) -> Movement {
        match self {
            KeySignal::Up => Movement::new(-VERTICAL_STEP, 0.0),
            KeySignal::Down => Movement::new(VERTICAL_STEP, 0.0),
            KeySignal::Left => Movement::new(0.0, -HORIZONTAL_STEP),
            KeySignal::Right => Movement::new(0.0, HORIZONTAL_STEP),
        }
    }
}
