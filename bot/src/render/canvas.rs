use std::io::Write;

use colored::Colorize;

use super::cursor::HIDE_CURSOR;
use super::palette::Paint;
use crate::grid::{Grid, Position};

const TITLE: &str = "AI Security Bot Simulation";
const IDLE_STATUS: &str = "Decision: ";

#[derive(Debug, Clone, Copy)]
pub struct CanvasOptions {
    /// terminal columns per cell; rows per cell is half of this
    pub cell_width: usize,
    /// redraw in place after every paint instead of once per phase
    pub animate: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            cell_width: 6,
            animate: false,
        }
    }
}

pub struct Canvas<W: Write> {
    out: W,
    paints: Vec<Paint>,
    width: usize,
    height: usize,
    cell_width: usize,
    cell_height: usize,
    animate: bool,
    status: String,
    decided: bool,
    drawn_lines: usize,
    cursor_hidden: bool,
}

impl<W: Write> Canvas<W> {
    pub fn new(out: W, grid: &Grid, options: CanvasOptions) -> Self {
        let cell_width = options.cell_width.max(1);
        let mut canvas = Self {
            out,
            paints: Vec::with_capacity(grid.width() * grid.height()),
            width: grid.width(),
            height: grid.height(),
            cell_width,
            cell_height: (cell_width / 2).max(1),
            animate: options.animate,
            status: IDLE_STATUS.to_string(),
            decided: false,
            drawn_lines: 0,
            cursor_hidden: false,
        };
        canvas.reset(grid);
        canvas
    }

    /// repaints every cell with its base color and clears the decision label
    pub fn reset(&mut self, grid: &Grid) {
        self.paints = grid.positions().map(|(_, cell)| Paint::from(cell)).collect();
        self.status = IDLE_STATUS.to_string();
        self.decided = false;
    }

    #[cfg(test)]
    pub fn paint_at(&self, pos: Position) -> Option<Paint> {
        (pos.row < self.height && pos.col < self.width)
            .then(|| self.paints[pos.to_index(self.width)])
    }

    pub fn paint(&mut self, pos: Position, paint: Paint) -> eyre::Result<()> {
        if pos.row >= self.height || pos.col >= self.width {
            eyre::bail!("{} is outside the {}x{} canvas", pos, self.height, self.width);
        }

        self.paints[pos.to_index(self.width)] = paint;
        if self.animate {
            self.present()?;
        }
        Ok(())
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> eyre::Result<()> {
        self.status = status.into();
        self.decided = true;
        if self.animate {
            self.present()?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn frame(&self) -> String {
        let mut lines = Vec::with_capacity(self.height * self.cell_height + 2);
        lines.push(TITLE.bold().to_string());

        for row in self.paints.chunks(self.width) {
            let line: String = row
                .iter()
                .map(|paint| paint.block(self.cell_width).to_string())
                .collect();
            for _ in 0..self.cell_height {
                lines.push(line.clone());
            }
        }

        if self.decided {
            lines.push(self.status.green().bold().to_string());
        } else {
            lines.push(self.status.clone());
        }

        let mut frame = lines.join("\n");
        frame.push('\n');
        frame
    }

    /// draws the current frame, over the previous one when animating
    pub fn present(&mut self) -> eyre::Result<()> {
        if self.animate && !self.cursor_hidden {
            self.out.write_all(HIDE_CURSOR.as_bytes())?;
            self.cursor_hidden = true;
        }

        if self.drawn_lines > 0 {
            write!(self.out, "\x1b[{}F", self.drawn_lines)?;
        }

        let frame = self.frame();
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;

        self.drawn_lines = if self.animate {
            frame.lines().count()
        } else {
            0
        };
        Ok(())
    }

    /// ends a phase: the last frame stays on screen and the next one starts below it
    pub fn commit(&mut self) -> eyre::Result<()> {
        if !self.animate {
            self.present()?;
        }
        self.drawn_lines = 0;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
