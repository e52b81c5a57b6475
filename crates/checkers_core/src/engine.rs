//! Turn state machine driven by press/release input.
//!
//! A turn moves through `AwaitingSelection -> AwaitingRelease` and then
//! either ends or, after a capture with another capture available from the
//! landing square, keeps the same player on move with the landing square
//! selected. Every operation is total: input that does not fit the current
//! state is dropped without touching the board.

use crate::board::Board;
use crate::rules;
use crate::types::*;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// No piece is picked up.
    AwaitingSelection,
    /// A piece is picked up and waits for a release.
    AwaitingRelease,
}

/// What a release did to the game. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No piece was selected.
    Ignored,
    /// Released on the selected square; selection cleared.
    Cancelled,
    /// Illegal destination; selection cleared, board untouched.
    Rejected,
    /// One-cell move; turn passed.
    Stepped(Move),
    /// Capture. When `chain_continues` the same player stays on move with
    /// the landing square selected.
    Jumped { mv: Move, chain_continues: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    selection: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard opening layout with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Player::Black)
    }

    pub fn from_board(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            selection: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    pub fn phase(&self) -> TurnPhase {
        match self.selection {
            Some(_) => TurnPhase::AwaitingRelease,
            None => TurnPhase::AwaitingSelection,
        }
    }

    /// Picks up the piece at `(row, col)` if it belongs to the side to move.
    ///
    /// Any other press leaves the state untouched, including an existing
    /// selection.
    pub fn select_at(&mut self, row: i8, col: i8) {
        match self.board.cell_at(row, col) {
            Some(cell) if cell.is_owned_by(self.current_player) => {
                self.selection = Square::new(row, col);
                trace!(row, col, player = %self.current_player, "piece selected");
            }
            _ => trace!(row, col, "press ignored"),
        }
    }

    /// Drops the selected piece on `(row, col)`.
    pub fn release_at(&mut self, row: i8, col: i8) -> ReleaseOutcome {
        let Some(from) = self.selection else {
            trace!(row, col, "release without selection");
            return ReleaseOutcome::Ignored;
        };

        if (from.row(), from.col()) == (row, col) {
            self.selection = None;
            trace!(%from, "selection cancelled");
            return ReleaseOutcome::Cancelled;
        }

        let Some(mv) = rules::classify_move(
            &self.board,
            self.current_player,
            from.row(),
            from.col(),
            row,
            col,
        ) else {
            self.selection = None;
            trace!(%from, row, col, "illegal move rejected");
            return ReleaseOutcome::Rejected;
        };

        self.board.apply(&mv);

        match mv.kind {
            MoveKind::Step => {
                debug!(player = %self.current_player, %mv, "step");
                self.end_turn();
                ReleaseOutcome::Stepped(mv)
            }
            MoveKind::Jump { captured } => {
                debug!(player = %self.current_player, %mv, %captured, "jump");
                let chain_continues = self.has_further_jump(mv.to);
                if chain_continues {
                    self.selection = Some(mv.to);
                    debug!(at = %mv.to, "chain continues");
                } else {
                    self.end_turn();
                }
                ReleaseOutcome::Jumped {
                    mv,
                    chain_continues,
                }
            }
        }
    }

    /// Pure legality check for the side to move.
    pub fn is_valid_move(&self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> bool {
        rules::is_valid_move(
            &self.board,
            self.current_player,
            from_row,
            from_col,
            to_row,
            to_col,
        )
    }

    pub fn has_further_jump(&self, from: Square) -> bool {
        rules::has_jump_from(&self.board, self.current_player, from)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        rules::legal_destinations(&self.board, self.current_player, from)
    }

    fn end_turn(&mut self) {
        self.selection = None;
        self.current_player = self.current_player.other();
        debug!(next = %self.current_player, "turn passed");
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
