//! The drawing capability handed to render code.
//!
//! Draw calls take world coordinates; [`CellCanvas`] scales them onto a grid
//! of terminal cells which is then turned into ratatui lines.

use crate::core::Rect;
use crate::sprite::Sprite;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Fire-and-forget drawing in world units.
pub trait Canvas {
    /// Fill `rect` with `color`.
    fn draw_rect(&mut self, rect: Rect, color: Color);
    /// Draw `sprite` stretched over `rect`. Spaces in the sprite are transparent.
    fn draw_sprite(&mut self, sprite: &Sprite, rect: Rect);
    /// Write `text` starting at `(x, y)`, one character per cell.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            symbol: ' ',
            fg: Color::Reset,
            bg,
            bold: false,
        }
    }
}

/// Character grid covering the whole world.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    x_scale: f64,
    y_scale: f64,
    cells: Vec<Cell>,
}

impl CellCanvas {
    /// Grid of `cols` x `rows` cells showing a world of `world_width` x
    /// `world_height`, cleared to `background`.
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64, background: Color) -> Self {
        let x_scale = if world_width > 0.0 {
            cols as f64 / world_width
        } else {
            1.0
        };
        let y_scale = if world_height > 0.0 {
            rows as f64 / world_height
        } else {
            1.0
        };
        Self {
            cols,
            rows,
            x_scale,
            y_scale,
            cells: vec![Cell::blank(background); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// One row as a plain string, handy for assertions.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(col, row))
            .map(|c| c.symbol)
            .collect()
    }

    fn cell_mut(&mut self, col: i64, row: i64) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return None;
        }
        let index = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(index)
    }

    /// Half-open cell span `[start, end)` covered by a world interval.
    /// A non-empty interval always covers at least one cell.
    fn span(start: f64, end: f64, scale: f64) -> (i64, i64) {
        let first = (start * scale).round() as i64;
        let last = (end * scale).round() as i64;
        if end > start && last <= first {
            (first, first + 1)
        } else {
            (first, last)
        }
    }

    fn col_span(&self, rect: &Rect) -> (i64, i64) {
        Self::span(rect.left(), rect.right(), self.x_scale)
    }

    fn row_span(&self, rect: &Rect) -> (i64, i64) {
        Self::span(rect.top(), rect.bottom(), self.y_scale)
    }

    /// Convert to styled lines, merging runs of identically styled cells.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style: Option<Style> = None;
                for col in 0..self.cols {
                    let Some(cell) = self.cell(col, row) else {
                        continue;
                    };
                    let mut style = Style::default().fg(cell.fg).bg(cell.bg);
                    if cell.bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if run_style != Some(style) {
                        if let Some(previous) = run_style {
                            spans.push(Span::styled(std::mem::take(&mut run), previous));
                        }
                        run_style = Some(style);
                    }
                    run.push(cell.symbol);
                }
                if let Some(style) = run_style {
                    spans.push(Span::styled(run, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Canvas for CellCanvas {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let (c0, c1) = self.col_span(&rect);
        let (r0, r1) = self.row_span(&rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell::blank(color);
                }
            }
        }
    }

    fn draw_sprite(&mut self, sprite: &Sprite, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let (c0, c1) = self.col_span(&rect);
        let (r0, r1) = self.row_span(&rect);
        let scaled = sprite.scaled((c1 - c0) as usize, (r1 - r0) as usize);
        for (dy, line) in scaled.iter().enumerate() {
            for (dx, &symbol) in line.iter().enumerate() {
                if symbol == ' ' {
                    continue;
                }
                if let Some(cell) = self.cell_mut(c0 + dx as i64, r0 + dy as i64) {
                    cell.symbol = symbol;
                    cell.fg = Color::Yellow;
                    cell.bold = true;
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
        let col = (x * self.x_scale).round() as i64;
        let row = (y * self.y_scale).round() as i64;
        for (i, symbol) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(col + i as i64, row) {
                cell.symbol = symbol;
                cell.fg = color;
                cell.bold = true;
            }
        }
    }
}
