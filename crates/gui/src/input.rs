//! Pointer input translation from pixel space to board cells

use checkers_core::BOARD_SIZE;

/// Cell-level pointer events emitted by both board bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMessage {
    Pressed(i8, i8),
    Released(i8, i8),
}

/// Pixel layout of the board: square `(row, col)` covers
/// `[col * size, (col + 1) * size) x [row * size, (row + 1) * size)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub square_size: f32,
}

impl BoardGeometry {
    pub fn new(square_size: f32) -> Self {
        Self { square_size }
    }

    /// Width and height of the whole board.
    pub fn extent(&self) -> f32 {
        BOARD_SIZE as f32 * self.square_size
    }

    /// Cell under a pixel position, `None` outside the board.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i8, i8)> {
        let extent = self.extent();
        if !(0.0..extent).contains(&x) || !(0.0..extent).contains(&y) {
            return None;
        }
        let col = (x / self.square_size).floor() as i8;
        let row = (y / self.square_size).floor() as i8;
        Some((row, col))
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, row: i8, col: i8) -> (f32, f32) {
        (
            col as f32 * self.square_size,
            row as f32 * self.square_size,
        )
    }
}
