//! Maps canvas units onto terminal cells.
//!
//! Row 0 is the HUD and the last row holds the controls hint; the canvas is
//! stretched over every column and the rows in between.

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::entities::Rect;

/// The cells an entity's box covers, in absolute terminal coordinates.
/// Not clipped: `col`/`row` may be negative or run past the screen edge, so
/// callers stretching an image over it keep the right proportions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: i32,
    pub row: i32,
    pub cols: u16,
    pub rows: u16,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const PLAY_TOP: u16 = 1;

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of terminal rows the canvas occupies.
    pub fn play_rows(&self) -> u16 {
        self.height.saturating_sub(2)
    }

    fn scale_x(&self) -> f32 {
        self.width as f32 / CANVAS_WIDTH
    }

    fn scale_y(&self) -> f32 {
        self.play_rows() as f32 / CANVAS_HEIGHT
    }

    /// Terminal row containing canvas coordinate `y`, if it is on screen.
    pub fn row_for(&self, y: f32) -> Option<u16> {
        let row = (y * self.scale_y()).floor();
        if row < 0.0 || row >= self.play_rows() as f32 {
            return None;
        }
        Some(Self::PLAY_TOP + row as u16)
    }

    /// Whether the absolute cell `(col, row)` is inside the canvas area.
    pub fn is_visible(&self, col: i32, row: i32) -> bool {
        let top = Self::PLAY_TOP as i32;
        col >= 0 && col < self.width as i32 && row >= top && row < top + self.play_rows() as i32
    }

    /// Cells covered by `rect`.  `None` when none of them is on screen.
    pub fn cell_rect(&self, rect: &Rect) -> Option<CellRect> {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        let col0 = (rect.x * sx).floor();
        let col1 = (rect.right() * sx).ceil();
        let row0 = (rect.y * sy).floor();
        let row1 = (rect.bottom() * sy).ceil();
        if col1 <= 0.0
            || col0 >= self.width as f32
            || row1 <= 0.0
            || row0 >= self.play_rows() as f32
            || col1 <= col0
            || row1 <= row0
        {
            return None;
        }
        Some(CellRect {
            col: col0 as i32,
            row: Self::PLAY_TOP as i32 + row0 as i32,
            cols: (col1 - col0) as u16,
            rows: (row1 - row0) as u16,
        })
    }

    /// The cell under the centre of `rect`, if it is on screen.
    pub fn centre_cell(&self, rect: &Rect) -> Option<(u16, u16)> {
        let (cx, cy) = rect.centre();
        let col = (cx * self.scale_x()).floor();
        if col < 0.0 || col >= self.width as f32 {
            return None;
        }
        let row = self.row_for(cy)?;
        Some((col as u16, row))
    }
}
