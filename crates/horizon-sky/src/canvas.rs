//! Off-screen cell grid the scene layers paint into.

use horizon_core::Rgb;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// A `width` x `height` grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a blank canvas filled with `background`.
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: background,
            bg: background,
        };
        Self {
            width,
            height,
            cells: vec![blank; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Cell at a position, if in bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Draw a glyph over the existing background. Out-of-bounds writes are
    /// dropped.
    pub fn set_glyph(&mut self, x: i32, y: i32, ch: char, fg: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].ch = ch;
            self.cells[i].fg = fg;
        }
    }

    /// Paint a solid cell, clearing any glyph.
    pub fn fill(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch: ' ', fg: bg, bg };
        }
    }

    /// Convert to styled lines, merging runs of identically styled cells.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        if self.width == 0 {
            return Vec::new();
        }

        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut style: Option<(Rgb, Rgb)> = None;

                for cell in row {
                    let cell_style = (cell.fg, cell.bg);
                    if style != Some(cell_style) {
                        if let Some((fg, bg)) = style {
                            spans.push(Span::styled(
                                std::mem::take(&mut run),
                                Style::new().fg(fg.into()).bg(bg.into()),
                            ));
                        }
                        style = Some(cell_style);
                    }
                    run.push(cell.ch);
                }
                if let Some((fg, bg)) = style {
                    spans.push(Span::styled(run, Style::new().fg(fg.into()).bg(bg.into())));
                }

                Line::from(spans)
            })
            .collect()
    }
}
