use super::*;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

fn game(diagram: &str, player: Player) -> GameState {
    GameState::from_board(diagram.parse().unwrap(), player)
}

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.selection(), None);
    assert_eq!(game.phase(), TurnPhase::AwaitingSelection);
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_select_own_piece() {
    let mut game = GameState::new();
    game.select_at(5, 0);
    assert_eq!(game.selection(), Some(sq(5, 0)));
    assert_eq!(game.phase(), TurnPhase::AwaitingRelease);
}

#[test]
fn test_select_ignores_empty_and_opponent() {
    let mut game = GameState::new();
    game.select_at(4, 1);
    assert_eq!(game.selection(), None);
    game.select_at(2, 1);
    assert_eq!(game.selection(), None);
    game.select_at(-1, 9);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_invalid_press_keeps_stale_selection() {
    let mut game = GameState::new();
    game.select_at(5, 2);
    game.select_at(2, 1);
    assert_eq!(game.selection(), Some(sq(5, 2)));
    game.select_at(3, 0);
    assert_eq!(game.selection(), Some(sq(5, 2)));
}

#[test]
fn test_reselect_replaces_selection() {
    let mut game = GameState::new();
    game.select_at(5, 2);
    game.select_at(5, 4);
    assert_eq!(game.selection(), Some(sq(5, 4)));
}

#[test]
fn test_release_without_selection() {
    let mut game = GameState::new();
    assert_eq!(game.release_at(4, 1), ReleaseOutcome::Ignored);
    assert_eq!(game, GameState::new());
}

#[test]
fn test_release_on_same_square_cancels() {
    let mut game = GameState::new();
    game.select_at(5, 2);
    assert_eq!(game.release_at(5, 2), ReleaseOutcome::Cancelled);
    assert_eq!(game.selection(), None);
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_rejected_release_clears_selection() {
    let mut game = GameState::new();
    game.select_at(5, 2);
    assert_eq!(game.release_at(3, 2), ReleaseOutcome::Rejected);
    assert_eq!(game.selection(), None);
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_release_off_board_rejected() {
    let mut game = GameState::new();
    game.select_at(5, 0);
    assert_eq!(game.release_at(4, -1), ReleaseOutcome::Rejected);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_step_passes_turn() {
    let mut game = GameState::new();
    game.select_at(5, 2);
    let outcome = game.release_at(4, 3);
    assert!(matches!(outcome, ReleaseOutcome::Stepped(mv) if mv.to == sq(4, 3)));
    assert_eq!(game.board().get(sq(5, 2)), Cell::Empty);
    assert_eq!(game.board().get(sq(4, 3)), Cell::Piece(Player::Black));
    assert_eq!(game.current_player(), Player::Red);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_red_cannot_move_on_black_turn() {
    let mut game = GameState::new();
    game.select_at(2, 1);
    assert_eq!(game.release_at(3, 0), ReleaseOutcome::Ignored);
    assert_eq!(game.board(), &Board::standard());
}

#[test]
fn test_single_jump_ends_turn() {
    let mut game = game(
        "
        --------
        --------
        --------
        --.-----
        ---r----
        ----b---
        --------
        --------
        ",
        Player::Black,
    );
    game.select_at(5, 4);
    let outcome = game.release_at(3, 2);
    assert_eq!(
        outcome,
        ReleaseOutcome::Jumped {
            mv: Move {
                from: sq(5, 4),
                to: sq(3, 2),
                kind: MoveKind::Jump { captured: sq(4, 3) },
            },
            chain_continues: false,
        }
    );
    assert_eq!(game.board().count(Player::Red), 0);
    assert_eq!(game.current_player(), Player::Red);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_chain_keeps_turn_and_selection() {
    let mut game = game(
        "
        --------
        --------
        -r------
        --------
        ---r----
        ----b---
        --------
        --------
        ",
        Player::Black,
    );
    game.select_at(5, 4);
    let outcome = game.release_at(3, 2);
    assert!(matches!(
        outcome,
        ReleaseOutcome::Jumped {
            chain_continues: true,
            ..
        }
    ));
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.selection(), Some(sq(3, 2)));
    assert_eq!(game.phase(), TurnPhase::AwaitingRelease);

    let outcome = game.release_at(1, 0);
    assert!(matches!(
        outcome,
        ReleaseOutcome::Jumped {
            chain_continues: false,
            ..
        }
    ));
    assert_eq!(game.board().get(sq(1, 0)), Cell::Piece(Player::Black));
    assert_eq!(game.board().count(Player::Red), 0);
    assert_eq!(game.current_player(), Player::Red);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_chain_continuation_is_optional() {
    let mut game = game(
        "
        --------
        --------
        -r------
        --------
        ---r----
        ----b---
        -b------
        --------
        ",
        Player::Black,
    );
    game.select_at(5, 4);
    game.release_at(3, 2);
    assert_eq!(game.selection(), Some(sq(3, 2)));

    // Pick up a different piece and make a plain step instead.
    game.select_at(6, 1);
    assert!(matches!(game.release_at(5, 2), ReleaseOutcome::Stepped(_)));
    assert_eq!(game.current_player(), Player::Red);
    assert_eq!(game.board().get(sq(3, 2)), Cell::Piece(Player::Black));
    assert_eq!(game.board().count(Player::Red), 1);
}

#[test]
fn test_reset() {
    let mut game = GameState::new();
    game.select_at(5, 2);
    game.release_at(4, 3);
    game.reset();
    assert_eq!(game, GameState::new());
}

#[test]
fn test_legal_destinations_from_start() {
    let game = GameState::new();
    assert_eq!(game.legal_destinations(sq(5, 2)), vec![sq(4, 1), sq(4, 3)]);
    assert!(game.legal_destinations(sq(6, 1)).is_empty());
}
