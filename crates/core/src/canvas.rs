//! The shared character grid every unit draws on.
//!
//! All writes are clipped to the grid. The bottom-right cell is never written:
//! terminals scroll when the cursor lands there.

use crate::art::FrameArt;
use crate::types::Intensity;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub intensity: Intensity,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        intensity: Intensity::Normal,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Output device the canvas is committed to.
pub trait Display {
    type Error;

    /// Grid dimensions as `(rows, columns)`.
    fn grid_size(&self) -> Result<(u16, u16), Self::Error>;

    /// Show the canvas. `bell` asks for one audible alert with this frame.
    fn present(&mut self, canvas: &Canvas, bell: bool) -> Result<(), Self::Error>;
}

impl<D: Display + ?Sized> Display for &mut D {
    type Error = D::Error;

    fn grid_size(&self) -> Result<(u16, u16), Self::Error> {
        (**self).grid_size()
    }

    fn present(&mut self, canvas: &Canvas, bell: bool) -> Result<(), Self::Error> {
        (**self).present(canvas, bell)
    }
}

/// 2D grid of styled glyphs, persistent across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
    bell: bool,
}

impl Canvas {
    pub fn new(rows: u16, columns: u16) -> Self {
        let len = (rows as usize) * (columns as usize);
        Self {
            rows,
            columns,
            cells: vec![Cell::BLANK; len],
            bell: false,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: i32, column: i32) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.rows as i32 || column >= self.columns as i32 {
            return None;
        }
        if row == self.rows as i32 - 1 && column == self.columns as i32 - 1 {
            return None;
        }
        Some((row as usize) * (self.columns as usize) + (column as usize))
    }

    pub fn get(&self, row: u16, column: u16) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[(row as usize) * (self.columns as usize) + (column as usize)])
    }

    fn put(&mut self, row: i32, column: i32, cell: Cell) {
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = cell;
        }
    }

    /// Draw every non-space glyph of `art` with its top-left at the rounded
    /// `(row, column)`.
    pub fn draw(&mut self, art: &FrameArt, row: f64, column: f64) {
        self.stamp(art, row, column, false);
    }

    /// Blank every cell a matching [`Canvas::draw`] would have written.
    pub fn erase(&mut self, art: &FrameArt, row: f64, column: f64) {
        self.stamp(art, row, column, true);
    }

    fn stamp(&mut self, art: &FrameArt, row: f64, column: f64, negative: bool) {
        let top = row.round() as i32;
        let left = column.round() as i32;
        for (r, c, ch) in art.glyphs() {
            let cell = if negative {
                Cell::BLANK
            } else {
                Cell {
                    ch,
                    intensity: Intensity::Normal,
                }
            };
            // Far off-grid origins saturate and stay off-grid.
            self.put(top.saturating_add(r as i32), left.saturating_add(c as i32), cell);
        }
    }

    /// Write one glyph. A space glyph leaves the cell as it is.
    pub fn draw_glyph(&mut self, row: f64, column: f64, ch: char, intensity: Intensity) {
        if ch == ' ' {
            return;
        }
        self.put(row.round() as i32, column.round() as i32, Cell { ch, intensity });
    }

    pub fn clear_glyph(&mut self, row: f64, column: f64) {
        self.put(row.round() as i32, column.round() as i32, Cell::BLANK);
    }

    /// Box the outermost ring of cells.
    pub fn draw_border(&mut self) {
        if self.rows < 2 || self.columns < 2 {
            return;
        }
        let last_row = self.rows as i32 - 1;
        let last_col = self.columns as i32 - 1;
        let line = |ch| Cell {
            ch,
            intensity: Intensity::Normal,
        };

        for c in 1..last_col {
            self.put(0, c, line('─'));
            self.put(last_row, c, line('─'));
        }
        for r in 1..last_row {
            self.put(r, 0, line('│'));
            self.put(r, last_col, line('│'));
        }
        self.put(0, 0, line('┌'));
        self.put(0, last_col, line('┐'));
        self.put(last_row, 0, line('└'));
        // (last_row, last_col) is the reserved corner.
    }

    /// Request an audible alert with the next flush.
    pub fn ring_bell(&mut self) {
        self.bell = true;
    }

    pub fn bell_pending(&self) -> bool {
        self.bell
    }

    /// Commit the buffer to `display`, forwarding any pending bell once.
    pub fn flush<D: Display>(&mut self, display: &mut D) -> Result<(), D::Error> {
        let bell = std::mem::take(&mut self.bell);
        display.present(self, bell)
    }

    /// Row contents as a string, for inspection.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.columns)
            .filter_map(|c| self.get(row, c))
            .map(|cell| cell.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(text: &str) -> FrameArt {
        FrameArt::load(text).unwrap()
    }

    #[test]
    fn draw_places_glyphs_at_rounded_origin() {
        let mut canvas = Canvas::new(5, 5);
        canvas.draw(&art("ab\ncd"), 1.4, 0.6);
        assert_eq!(canvas.row_text(1), " ab  ");
        assert_eq!(canvas.row_text(2), " cd  ");
    }

    #[test]
    fn draw_skips_spaces_so_underlying_cells_survive() {
        let mut canvas = Canvas::new(3, 3);
        canvas.draw_glyph(0.0, 1.0, '*', Intensity::Bold);
        canvas.draw(&art("x x"), 0.0, 0.0);
        assert_eq!(canvas.row_text(0), "x*x");
        assert_eq!(canvas.get(0, 1).unwrap().intensity, Intensity::Bold);
    }

    #[test]
    fn erase_blanks_exactly_what_draw_wrote() {
        let mut canvas = Canvas::new(4, 4);
        canvas.draw_glyph(1.0, 1.0, '+', Intensity::Dim);
        let sprite = art("o o\n o ");
        canvas.draw(&sprite, 0.0, 0.0);
        canvas.erase(&sprite, 0.0, 0.0);
        assert_eq!(canvas.row_text(0), "    ");
        // (1,1) was overwritten by 'o' then erased.
        assert_eq!(canvas.row_text(1), "    ");
        assert!(canvas.cells().iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn out_of_bounds_draws_are_clipped() {
        let mut canvas = Canvas::new(3, 3);
        let sprite = art("abc\ndef\nghi");
        canvas.draw(&sprite, -2.0, -2.0);
        assert_eq!(canvas.row_text(0), "i  ");
        assert_eq!(canvas.row_text(1), "   ");

        let mut canvas = Canvas::new(3, 3);
        canvas.draw(&sprite, 100.0, 100.0);
        canvas.draw_glyph(-1.0, 0.0, 'x', Intensity::Normal);
        canvas.clear_glyph(0.0, 50.0);
        assert!(canvas.cells().iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn huge_coordinates_are_clipped_without_overflow() {
        let mut canvas = Canvas::new(10, 10);
        let sprite = art("ab\ncd");
        for &(row, column) in &[(1.0e12, 0.0), (0.0, 1.0e12), (f64::MAX, f64::MAX)] {
            canvas.draw(&sprite, row, column);
            canvas.erase(&sprite, row, column);
        }
        assert!(canvas.cells().iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn bottom_right_corner_is_never_written() {
        let mut canvas = Canvas::new(3, 4);
        canvas.draw_glyph(2.0, 3.0, 'x', Intensity::Normal);
        assert_eq!(canvas.get(2, 3), Some(Cell::BLANK));

        canvas.draw(&art("ab\ncd"), 1.0, 2.0);
        assert_eq!(canvas.row_text(2), "  c ");
    }

    #[test]
    fn space_glyph_is_a_no_op() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_glyph(0.0, 0.0, '*', Intensity::Normal);
        canvas.draw_glyph(0.0, 0.0, ' ', Intensity::Normal);
        assert_eq!(canvas.get(0, 0).unwrap().ch, '*');
        canvas.clear_glyph(0.0, 0.0);
        assert_eq!(canvas.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn border_leaves_reserved_corner_blank() {
        let mut canvas = Canvas::new(3, 4);
        canvas.draw_border();
        assert_eq!(canvas.row_text(0), "┌──┐");
        assert_eq!(canvas.row_text(1), "│  │");
        assert_eq!(canvas.row_text(2), "└── ");
    }

    struct Recorder {
        frames: Vec<(String, bool)>,
    }

    impl Display for Recorder {
        type Error = ();

        fn grid_size(&self) -> Result<(u16, u16), ()> {
            Ok((2, 2))
        }

        fn present(&mut self, canvas: &Canvas, bell: bool) -> Result<(), ()> {
            self.frames.push((canvas.row_text(0), bell));
            Ok(())
        }
    }

    #[test]
    fn flush_forwards_bell_exactly_once() {
        let mut canvas = Canvas::new(2, 2);
        let mut display = Recorder { frames: Vec::new() };
        canvas.ring_bell();
        canvas.draw_glyph(0.0, 0.0, '|', Intensity::Normal);
        canvas.flush(&mut display).unwrap();
        canvas.flush(&mut display).unwrap();
        assert_eq!(
            display.frames,
            vec![("| ".to_string(), true), ("| ".to_string(), false)]
        );
        assert!(!canvas.bell_pending());
    }
}
