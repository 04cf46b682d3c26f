use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tracing::trace;

use crate::config::Config;
use crate::domain::Grid;
use crate::error::Result;

/// Something that can show a generation.
pub trait Renderer {
    /// Replace whatever was shown before with `grid`.
    fn render(&mut self, grid: &Grid) -> Result<()>;
}

/// Text of one frame: a line per row, a glyph per column, each line ending in `\n`
pub fn frame(grid: &Grid, alive: char, dead: char) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        text.extend(row.iter().map(|cell| if cell.is_alive() { alive } else { dead }));
        text.push('\n');
    }
    text
}

/// Draws frames on a terminal, clearing the screen with crossterm commands
pub struct TerminalRenderer<W: Write> {
    out: W,
    alive: char,
    dead: char,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self {
            out,
            alive: config.alive,
            dead: config.dead,
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid) -> Result<()> {
        let text = frame(grid, self.alive, self.dead);
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        trace!(bytes = text.len(), "frame written");
        Ok(())
    }
}
