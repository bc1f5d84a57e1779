//! Sprite art parsed from multi-line text.
//!
//! A [`FrameArt`] is immutable once loaded. Spaces are transparent: drawing
//! skips them and erasing leaves them alone.

use thiserror::Error;

/// Failures while turning sprite text into frames.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtError {
    #[error("malformed frame `{name}`: no drawable glyphs")]
    MalformedFrame { name: String },
    #[error("frame cycle needs at least one frame")]
    NoFrames,
}

/// A static multi-line glyph pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameArt {
    rows: Vec<Vec<char>>,
    columns: usize,
}

impl FrameArt {
    /// Parse sprite text. Fails with [`ArtError::MalformedFrame`] when there
    /// is nothing to draw.
    pub fn load(text: &str) -> Result<Self, ArtError> {
        Self::load_named("<inline>", text)
    }

    /// Like [`FrameArt::load`], with `name` reported in the error.
    pub fn load_named(name: &str, text: &str) -> Result<Self, ArtError> {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();

        if !rows.iter().flatten().any(|&ch| ch != ' ') {
            return Err(ArtError::MalformedFrame {
                name: name.to_string(),
            });
        }

        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self { rows, columns })
    }

    /// `(rows, columns)`; columns is the widest line.
    pub fn size(&self) -> (usize, usize) {
        (self.rows.len(), self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Every non-space glyph with its `(row, column)` offset inside the frame.
    pub fn glyphs(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &ch)| ch != ' ')
                .map(move |(c, &ch)| (r, c, ch))
        })
    }
}
