/// Off-screen character-cell framebuffer.
///
/// World coordinates are scaled onto a `cols × rows` grid; a cell covers the
/// half-open world span `[c·sx, (c+1)·sx) × [r·sy, (r+1)·sy)`.  Nothing here
/// touches the terminal, `terminal::TerminalBackend` flushes the cells.

use crate::backend::Rgb;
use crate::entities::{Point, Rect};

const GLYPH_BLANK: char = ' ';
const GLYPH_FILL: char = '█';
const GLYPH_DOT: char = '●';
const GLYPH_V_LINE: char = '│';
const GLYPH_H_LINE: char = '─';
const GLYPH_LINE: char = '·';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

#[derive(Clone, Debug)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
    background: Rgb,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        let background = Rgb(0, 0, 0);
        Self {
            cols,
            rows,
            world_w,
            world_h,
            background,
            cells: vec![blank(background); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Change the grid size, e.g. after a terminal resize.  Contents are lost.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![blank(self.background); cols as usize * rows as usize];
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row as usize * self.cols as usize + col as usize)
        } else {
            None
        }
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    fn scale(&self) -> (f32, f32) {
        (
            self.world_w / self.cols.max(1) as f32,
            self.world_h / self.rows.max(1) as f32,
        )
    }

    /// Grid cell containing a world point, if it lies on screen.
    pub fn world_to_cell(&self, p: Point) -> Option<(u16, u16)> {
        let (sx, sy) = self.scale();
        let c = (p.0 / sx).floor();
        let r = (p.1 / sy).floor();
        if c < 0.0 || r < 0.0 || c >= self.cols as f32 || r >= self.rows as f32 {
            return None;
        }
        Some((c as u16, r as u16))
    }

    /// World point at the centre of a cell.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Point {
        let (sx, sy) = self.scale();
        ((col as f32 + 0.5) * sx, (row as f32 + 0.5) * sy)
    }

    /// Inclusive cell span covered by a rect, clipped to the grid.
    fn cell_span(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let (sx, sy) = self.scale();
        let c0 = (rect.x / sx).floor();
        let r0 = (rect.y / sy).floor();
        // Always cover at least the cell holding the top-left corner.
        let c1 = ((rect.x + rect.w) / sx).ceil().max(c0 + 1.0) - 1.0;
        let r1 = ((rect.y + rect.h) / sy).ceil().max(r0 + 1.0) - 1.0;
        if c1 < 0.0 || r1 < 0.0 || c0 >= self.cols as f32 || r0 >= self.rows as f32 {
            return None;
        }
        let max_c = self.cols as f32 - 1.0;
        let max_r = self.rows as f32 - 1.0;
        Some((
            c0.clamp(0.0, max_c) as u16,
            r0.clamp(0.0, max_r) as u16,
            c1.clamp(0.0, max_c) as u16,
            r1.clamp(0.0, max_r) as u16,
        ))
    }

    fn put(&mut self, col: u16, row: u16, glyph: char, fg: Rgb) {
        if col < self.cols && row < self.rows {
            let idx = row as usize * self.cols as usize + col as usize;
            let cell = &mut self.cells[idx];
            cell.glyph = glyph;
            cell.fg = fg;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.cells.fill(blank(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if let Some((c0, r0, c1, r1)) = self.cell_span(&rect) {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    self.put(col, row, GLYPH_FILL, color);
                }
            }
        }
    }

    /// Cells whose centre falls inside the ellipse get filled; an ellipse
    /// smaller than a cell collapses to a single dot.
    pub fn fill_ellipse(&mut self, rect: Rect, color: Rgb) {
        let Some((c0, r0, c1, r1)) = self.cell_span(&rect) else {
            return;
        };
        let (ex, ey) = rect.center();
        let (ax, ay) = (rect.w / 2.0, rect.h / 2.0);
        let mut hit = false;
        if ax > 0.0 && ay > 0.0 {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    let (wx, wy) = self.cell_to_world(col, row);
                    let nx = (wx - ex) / ax;
                    let ny = (wy - ey) / ay;
                    if nx * nx + ny * ny <= 1.0 {
                        self.put(col, row, GLYPH_FILL, color);
                        hit = true;
                    }
                }
            }
        }
        if !hit {
            if let Some((col, row)) = self.world_to_cell((ex, ey)) {
                self.put(col, row, GLYPH_DOT, color);
            }
        }
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgb) {
        let glyph = if from.0 == to.0 {
            GLYPH_V_LINE
        } else if from.1 == to.1 {
            GLYPH_H_LINE
        } else {
            GLYPH_LINE
        };
        let (sx, sy) = self.scale();
        let steps = ((to.0 - from.0).abs() / sx)
            .max((to.1 - from.1).abs() / sy)
            .ceil()
            .max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
            if let Some((col, row)) = self.world_to_cell(p) {
                self.put(col, row, glyph, color);
            }
        }
    }

    /// Write text left-to-right starting at the cell holding `pos`, clipped at
    /// the right edge.
    pub fn text(&mut self, pos: Point, text: &str, color: Rgb) {
        let Some((col, row)) = self.world_to_cell(pos) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= self.cols as usize {
                break;
            }
            self.put(c as u16, row, ch, color);
        }
    }
}

fn blank(bg: Rgb) -> Cell {
    Cell {
        glyph: GLYPH_BLANK,
        fg: bg,
        bg,
    }
}
