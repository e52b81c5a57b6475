//! Styling constants

use checkers_core::Square;
use iced::Color;

// Board colors
pub const PLAYING_SQUARE: Color = Color::from_rgb(0.96, 0.87, 0.70); // Wheat
pub const UNUSED_SQUARE: Color = Color::from_rgb(0.55, 0.27, 0.07); // Saddle brown
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const MOVE_HINT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

// Piece colors
pub const BLACK_PIECE: Color = Color::from_rgb(0.0, 0.0, 0.0);
pub const RED_PIECE: Color = Color::from_rgb(0.78, 0.0, 0.0);

// Dimensions
pub const PANEL_WIDTH: f32 = 220.0;
pub const PIECE_INSET: f32 = 5.0;

/// Background for a square. Pieces live on the wheat squares.
pub fn square_color(sq: Square, selected: bool) -> Color {
    if selected {
        SELECTED_SQUARE
    } else if sq.is_dark() {
        PLAYING_SQUARE
    } else {
        UNUSED_SQUARE
    }
}
