//! TerminalRenderer: flushes a canvas to a real terminal.
//!
//! The first frame is a full redraw; later frames only rewrite runs of cells
//! that changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{Canvas, Display};
use crate::types::Intensity;

const BEL: &str = "\x07";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Canvas>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Display for TerminalRenderer {
    type Error = anyhow::Error;

    fn grid_size(&self) -> Result<(u16, u16)> {
        let (columns, rows) = terminal::size()?;
        Ok((rows, columns))
    }

    fn present(&mut self, canvas: &Canvas, bell: bool) -> Result<()> {
        self.buf.clear();
        // Take previous out to avoid borrow conflicts with `buf`.
        match self.last.take() {
            Some(mut prev)
                if prev.rows() == canvas.rows() && prev.columns() == canvas.columns() =>
            {
                encode_diff_into(&prev, canvas, &mut self.buf)?;
                prev.clone_from(canvas);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(canvas, &mut self.buf)?;
                self.last = Some(canvas.clone());
            }
        }
        if bell {
            self.buf.queue(Print(BEL))?;
        }
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<Intensity> = None;
    for row in 0..canvas.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        for column in 0..canvas.columns() {
            if row + 1 == canvas.rows() && column + 1 == canvas.columns() {
                // Printing the last cell would scroll the screen.
                break;
            }
            let cell = canvas.get(row, column).unwrap_or_default();
            if current != Some(cell.intensity) {
                apply_intensity_into(out, cell.intensity)?;
                current = Some(cell.intensity);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Canvas, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Intensity> = None;

    for_each_changed_run(prev, next, |row, column, len| {
        out.queue(cursor::MoveTo(column, row))?;
        for dc in 0..len {
            let cell = next.get(row, column + dc).unwrap_or_default();
            if current != Some(cell.intensity) {
                apply_intensity_into(out, cell.intensity)?;
                current = Some(cell.intensity);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_intensity_into(out: &mut Vec<u8>, intensity: Intensity) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match intensity {
        Intensity::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Intensity::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Intensity::Normal => {}
    }
    Ok(())
}

/// Call `f(row, column, len)` for each horizontal run of cells that differ.
fn for_each_changed_run(
    prev: &Canvas,
    next: &Canvas,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let rows = next.rows();
    let columns = next.columns();

    for row in 0..rows {
        let mut column = 0;
        while column < columns {
            if prev.get(row, column) == next.get(row, column) {
                column += 1;
                continue;
            }

            let start = column;
            column += 1;
            while column < columns && prev.get(row, column) != next.get(row, column) {
                column += 1;
            }
            f(row, start, column - start)?;
        }
    }

    Ok(())
}
