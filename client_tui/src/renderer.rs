//! Draws the playfield into a character grid scaled to the terminal.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::{
    cursor, queue,
    style::{self, Color as TermColor},
    terminal::{self, ClearType},
};
use game_core::{Color, Rect, Renderer};

const BLOCK: char = '█';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::BLACK,
};

/// Character grid covering the whole playfield
#[derive(Debug, Clone)]
pub struct CellBuffer {
    cols: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
    cells: Vec<Cell>,
    labels: Vec<(String, f32, f32)>,
}

impl CellBuffer {
    pub fn new(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        Self {
            cols,
            rows,
            world_w,
            world_h,
            cells: vec![BLANK; cols as usize * rows as usize],
            labels: Vec::new(),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.labels.clear();
    }

    /// Cells covering `[start, start + len)` in world units. Anything
    /// on screen gets at least one cell.
    fn span(start: f32, len: f32, world: f32, cells: u16) -> Range<usize> {
        let scale = cells as f32 / world;
        let lo = start * scale;
        let hi = (start + len) * scale;
        if hi <= 0.0 || lo >= cells as f32 {
            return 0..0;
        }
        let first = lo.floor().max(0.0) as usize;
        let last = (hi.ceil() as usize).min(cells as usize).max(first + 1);
        first..last
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let cols = Self::span(rect.x, rect.w, self.world_w, self.cols);
        let rows = Self::span(rect.y, rect.h, self.world_h, self.rows);
        for row in rows {
            for col in cols.clone() {
                self.cells[row * self.cols as usize + col] = Cell { ch: BLOCK, color };
            }
        }
    }

    /// Text is laid over the shapes, centred on `x`
    pub fn put_text(&mut self, text: &str, x: f32, y: f32) {
        self.labels.push((text.to_string(), x, y));
    }

    fn stamp_labels(&mut self) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        for (text, x, y) in std::mem::take(&mut self.labels) {
            let width = text.chars().count() as i64;
            let centre = (x * self.cols as f32 / self.world_w) as i64;
            let row = ((y * self.rows as f32 / self.world_h) as usize).min(self.rows as usize - 1);
            for (i, ch) in text.chars().enumerate() {
                let col = centre - width / 2 + i as i64;
                if (0..self.cols as i64).contains(&col) {
                    self.cells[row * self.cols as usize + col as usize] = Cell {
                        ch,
                        color: Color::WHITE,
                    };
                }
            }
        }
    }

    #[cfg(test)]
    fn lines(&mut self) -> Vec<String> {
        self.stamp_labels();
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }

    fn write_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.stamp_labels();
        let mut current = None;
        for (row, line) in self.cells.chunks(self.cols.max(1) as usize).enumerate() {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for cell in line {
                if current != Some(cell.color) {
                    let Color { r, g, b } = cell.color;
                    queue!(out, style::SetForegroundColor(TermColor::Rgb { r, g, b }))?;
                    current = Some(cell.color);
                }
                queue!(out, style::Print(cell.ch))?;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

/// Render collaborator writing to the terminal
pub struct TerminalRenderer<W: Write> {
    out: W,
    buffer: CellBuffer,
    resized: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, world_w: f32, world_h: f32) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        log::info!("Drawing to a {cols}x{rows} terminal");
        Ok(Self {
            out,
            buffer: CellBuffer::new(cols, rows, world_w, world_h),
            resized: true,
        })
    }

    fn track_resize(&mut self) {
        if let Ok((cols, rows)) = terminal::size() {
            if (cols, rows) != self.buffer.size() {
                log::debug!("Terminal resized to {cols}x{rows}");
                self.buffer = CellBuffer::new(cols, rows, self.buffer.world_w, self.buffer.world_h);
                self.resized = true;
            }
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self, _color: Color) {
        self.track_resize();
        self.buffer.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.buffer.fill_rect(rect, color);
    }

    fn render_text(&mut self, text: &str, x: f32, y: f32) {
        self.buffer.put_text(text, x, y);
    }

    fn present(&mut self) -> io::Result<()> {
        if self.resized {
            queue!(self.out, terminal::Clear(ClearType::All))?;
            self.resized = false;
        }
        self.buffer.write_to(&mut self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_scaled_to_cells() {
        // 80x30 cells over 800x600: a cell is 10 wide, 20 tall
        let mut buffer = CellBuffer::new(80, 30, 800.0, 600.0);
        buffer.fill_rect(Rect::new(0.0, 0.0, 800.0, 15.0), Color::WALL);

        let lines = buffer.lines();
        assert_eq!(lines[0], BLOCK.to_string().repeat(80));
        assert_eq!(lines[1].trim(), "");
    }

    #[test]
    fn test_small_rect_gets_one_cell() {
        let mut buffer = CellBuffer::new(80, 30, 800.0, 600.0);
        buffer.fill_rect(Rect::new(391.0, 300.0, 2.0, 2.0), Color::WHITE);

        let lines = buffer.lines();
        assert_eq!(lines[15].chars().nth(39), Some(BLOCK));
        assert_eq!(lines[15].chars().filter(|c| *c == BLOCK).count(), 1);
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let mut buffer = CellBuffer::new(80, 30, 800.0, 600.0);
        buffer.fill_rect(Rect::new(-20.0, 300.0, 10.0, 10.0), Color::WHITE);
        buffer.fill_rect(Rect::new(805.0, 300.0, 10.0, 10.0), Color::WHITE);

        assert!(buffer.lines().iter().all(|l| !l.contains(BLOCK)));
    }

    #[test]
    fn test_text_drawn_over_walls() {
        let mut buffer = CellBuffer::new(80, 24, 800.0, 600.0);
        buffer.fill_rect(Rect::new(0.0, 0.0, 800.0, 15.0), Color::WALL);
        buffer.put_text("12", 200.0, 20.0);

        let lines = buffer.lines();
        let wall = |n: usize| BLOCK.to_string().repeat(n);
        assert_eq!(lines[0], format!("{}12{}", wall(19), wall(59)));
    }

    #[test]
    fn test_clear_wipes_shapes_and_text() {
        let mut buffer = CellBuffer::new(10, 5, 800.0, 600.0);
        buffer.fill_rect(Rect::new(0.0, 0.0, 800.0, 600.0), Color::WHITE);
        buffer.put_text("7", 400.0, 300.0);
        buffer.clear();

        assert!(buffer.lines().iter().all(|l| l.trim().is_empty()));
    }
}
