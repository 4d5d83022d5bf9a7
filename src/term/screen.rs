//! Off-screen cell grid the views draw into
//!
//! Views render into a [`Screen`] of styled character cells; the renderer
//! flushes it to the terminal afterwards. Keeping the grid pure means the
//! views can be unit-tested without a terminal.

use crossterm::style::Color;

use crate::types::Rect;

/// Per-cell styling. Named terminal colors, not RGB; the palette is small
/// and profiles pick avatar colors by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// A width x height grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are silently clipped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write a string centered within `[x, x + width)`.
    pub fn put_centered(&mut self, x: u16, y: u16, width: u16, s: &str, style: Style) {
        let len = s.chars().count() as u16;
        let offset = width.saturating_sub(len) / 2;
        self.put_str(x + offset, y, s, style);
    }

    pub fn fill_rect(&mut self, rect: Rect, ch: char, style: Style) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                self.put_char(rect.x + dx, rect.y + dy, ch, style);
            }
        }
    }

    /// Draw a single-line box border around `rect`.
    pub fn draw_box(&mut self, rect: Rect, style: Style) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;

        self.put_char(rect.x, rect.y, '┌', style);
        self.put_char(right, rect.y, '┐', style);
        self.put_char(rect.x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
        for x in rect.x + 1..right {
            self.put_char(x, rect.y, '─', style);
            self.put_char(x, bottom, '─', style);
        }
        for y in rect.y + 1..bottom {
            self.put_char(rect.x, y, '│', style);
            self.put_char(right, y, '│', style);
        }
    }

    /// The row's text content, trailing spaces trimmed. Test helper for
    /// asserting on rendered output.
    pub fn row_text(&self, y: u16) -> String {
        let mut s: String = (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect();
        let trimmed = s.trim_end().len();
        s.truncate(trimmed);
        s
    }
}
