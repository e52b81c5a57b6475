//! Move legality.
//!
//! Legality depends only on the board and the side to move, never on the
//! piece standing on the origin: the caller guarantees that the origin holds
//! a piece of `player`, which holds for any selection `GameState` makes.

use crate::board::Board;
use crate::types::*;

/// The four diagonal jump deltas probed when deciding whether a chain continues.
pub const JUMP_DELTAS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Classifies a move for `player`, or returns `None` when it is illegal.
///
/// Rules, in order:
/// 1. the origin and destination are on the board
/// 2. the destination is empty
/// 3. the row moves strictly forward for `player`
/// 4. a one-cell diagonal is a step
/// 5. a two-cell diagonal is a jump if the midpoint holds an opponent piece
/// 6. nothing else is legal
pub fn classify_move(
    board: &Board,
    player: Player,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
) -> Option<Move> {
    let from = Square::new(from_row, from_col)?;
    let to = Square::new(to_row, to_col)?;

    if !board.get(to).is_empty() {
        return None;
    }

    let d_row = to_row - from_row;
    let d_col = to_col - from_col;
    if d_row.signum() != player.forward() {
        return None;
    }

    match (d_row.abs(), d_col.abs()) {
        (1, 1) => Some(Move {
            from,
            to,
            kind: MoveKind::Step,
        }),
        (2, 2) => {
            let captured = from.offset(d_row / 2, d_col / 2)?;
            if board.get(captured).is_owned_by(player.other()) {
                Some(Move {
                    from,
                    to,
                    kind: MoveKind::Jump { captured },
                })
            } else {
                None
            }
        }
        _ => None,
    }
}

pub fn is_valid_move(
    board: &Board,
    player: Player,
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
) -> bool {
    classify_move(board, player, from_row, from_col, to_row, to_col).is_some()
}

/// Whether `player` has a jump available from `from` along any of the four
/// diagonal jump deltas.
pub fn has_jump_from(board: &Board, player: Player, from: Square) -> bool {
    JUMP_DELTAS.iter().any(|&(d_row, d_col)| {
        is_valid_move(
            board,
            player,
            from.row(),
            from.col(),
            from.row() + d_row,
            from.col() + d_col,
        )
    })
}

/// Every legal destination from `from`, in row-major order.
pub fn legal_destinations(board: &Board, player: Player, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|to| is_valid_move(board, player, from.row(), from.col(), to.row(), to.col()))
        .collect()
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
