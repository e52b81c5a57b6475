//! Presentation-facing seams.
//!
//! Shells read the game only through [`BoardView`] and feed input only
//! through [`PointerInput`], so any renderer can sit on top of the same
//! [`GameState`].

use crate::engine::GameState;
use crate::types::*;

/// Read-only access used for drawing and highlighting.
pub trait BoardView {
    fn cell(&self, sq: Square) -> Cell;

    fn current_player(&self) -> Player;

    fn selection(&self) -> Option<Square>;

    /// Destinations to highlight for the current selection.
    fn highlighted_destinations(&self) -> Vec<Square> {
        Vec::new()
    }

    /// Number of pieces `player` still has on the board.
    fn piece_count(&self, player: Player) -> usize {
        Square::all()
            .filter(|&sq| self.cell(sq).is_owned_by(player))
            .count()
    }
}

/// Cell-level pointer events, already resolved from pixel space.
///
/// Coordinates may fall outside the board; such events are dropped.
pub trait PointerInput {
    fn handle_press(&mut self, row: i8, col: i8);

    fn handle_release(&mut self, row: i8, col: i8);
}

impl BoardView for GameState {
    fn cell(&self, sq: Square) -> Cell {
        self.board().get(sq)
    }

    fn current_player(&self) -> Player {
        GameState::current_player(self)
    }

    fn selection(&self) -> Option<Square> {
        GameState::selection(self)
    }

    fn highlighted_destinations(&self) -> Vec<Square> {
        GameState::selection(self)
            .map(|from| self.legal_destinations(from))
            .unwrap_or_default()
    }

    fn piece_count(&self, player: Player) -> usize {
        self.board().count(player)
    }
}

impl PointerInput for GameState {
    fn handle_press(&mut self, row: i8, col: i8) {
        self.select_at(row, col);
    }

    fn handle_release(&mut self, row: i8, col: i8) {
        self.release_at(row, col);
    }
}
