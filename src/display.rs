//! Rendering layer — all terminal I/O lives here.
//!
//! A `Frame` is rasterised onto a grid of terminal cells by scaling the
//! world onto the current terminal size, then written out row by row.
//! No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use catch_em_all::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use catch_em_all::entities::Rect;
use catch_em_all::projection::{DrawCommand, Frame, Rgb};

const C_TEXT: Color = Color::White;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub bg: Rgb,
    pub ch: char,
}

/// Terminal grid dimensions; the world→cell scale is derived from them.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols: cols.max(1), rows: rows.max(1) }
    }

    fn cell_width(&self) -> f32 {
        SCREEN_WIDTH / self.cols as f32
    }

    fn cell_height(&self) -> f32 {
        SCREEN_HEIGHT / self.rows as f32
    }

    /// World X under the centre of a terminal column.
    pub fn column_to_world(&self, col: u16) -> i32 {
        ((col as f32 + 0.5) * self.cell_width()) as i32
    }

    /// Half-open cell ranges covered by `rect`, clipped to the grid.
    fn cells_of(&self, rect: &Rect) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let clip = |v: f32, max: u16| v.clamp(0.0, max as f32) as usize;
        let c0 = clip((rect.x / self.cell_width()).floor(), self.cols);
        let c1 = clip(((rect.x + rect.width) / self.cell_width()).ceil(), self.cols);
        let r0 = clip((rect.y / self.cell_height()).floor(), self.rows);
        let r1 = clip(((rect.y + rect.height) / self.cell_height()).ceil(), self.rows);
        (r0..r1, c0..c1)
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Paint the frame's commands, in order, onto a `rows × cols` cell grid.
pub fn rasterise(frame: &Frame, view: Viewport) -> Vec<Vec<Cell>> {
    let blank = Cell { bg: Rgb { r: 0, g: 0, b: 0 }, ch: ' ' };
    let mut grid = vec![vec![blank; view.cols as usize]; view.rows as usize];

    for command in &frame.commands {
        match command {
            DrawCommand::Fill(color) => {
                for cell in grid.iter_mut().flatten() {
                    *cell = Cell { bg: *color, ch: ' ' };
                }
            }
            DrawCommand::FillRect { rect, color } => {
                let (rows, cols) = view.cells_of(rect);
                for row in &mut grid[rows] {
                    for cell in &mut row[cols.clone()] {
                        cell.bg = *color;
                    }
                }
            }
            DrawCommand::DebugText(text) => {
                for (row, line) in grid.iter_mut().zip(text.lines()) {
                    for (cell, ch) in row.iter_mut().zip(line.chars()) {
                        cell.ch = ch;
                    }
                }
            }
        }
    }
    grid
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, view: Viewport) -> std::io::Result<()> {
    let grid = rasterise(frame, view);

    out.queue(style::SetForegroundColor(C_TEXT))?;
    for (y, row) in grid.iter().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        let mut current: Option<Rgb> = None;
        for cell in row {
            if current != Some(cell.bg) {
                out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                current = Some(cell.bg);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_em_all::projection::{C_BACKGROUND, C_HAZARD};

    #[test]
    fn fill_then_rect_paints_scaled_cells() {
        let frame = Frame {
            commands: vec![
                DrawCommand::Fill(C_BACKGROUND),
                DrawCommand::FillRect {
                    rect: Rect { x: 0.0, y: 0.0, width: 100.0, height: 100.0 },
                    color: C_HAZARD,
                },
            ],
        };
        // 80×60 grid → each cell is 10×10 world units
        let grid = rasterise(&frame, Viewport::new(80, 60));
        assert_eq!(grid[0][0].bg, C_HAZARD);
        assert_eq!(grid[9][9].bg, C_HAZARD);
        assert_eq!(grid[10][10].bg, C_BACKGROUND);
        assert_eq!(grid[59][79].bg, C_BACKGROUND);
    }

    #[test]
    fn rect_past_the_edge_is_clipped() {
        let frame = Frame {
            commands: vec![DrawCommand::FillRect {
                rect: Rect { x: 780.0, y: 590.0, width: 40.0, height: 40.0 },
                color: C_HAZARD,
            }],
        };
        let grid = rasterise(&frame, Viewport::new(80, 60));
        assert_eq!(grid[59][79].bg, C_HAZARD);
    }

    #[test]
    fn debug_text_goes_top_left() {
        let frame = Frame { commands: vec![DrawCommand::DebugText("ab\nc".to_string())] };
        let grid = rasterise(&frame, Viewport::new(10, 5));
        assert_eq!(grid[0][0].ch, 'a');
        assert_eq!(grid[0][1].ch, 'b');
        assert_eq!(grid[1][0].ch, 'c');
        assert_eq!(grid[1][1].ch, ' ');
    }

    #[test]
    fn column_maps_to_cell_centre() {
        let view = Viewport::new(80, 24);
        assert_eq!(view.column_to_world(0), 5);
        assert_eq!(view.column_to_world(79), 795);
    }
}
