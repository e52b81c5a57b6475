use super::*;

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn test_standard_layout() {
    let board = Board::standard();
    for s in Square::all() {
        let expected = match (s.is_dark(), s.row()) {
            (false, _) => Cell::Empty,
            (true, 0..=2) => Cell::Piece(Player::Red),
            (true, 5..=7) => Cell::Piece(Player::Black),
            (true, _) => Cell::Empty,
        };
        assert_eq!(board.get(s), expected, "unexpected cell at {s}");
    }
    assert_eq!(board.count(Player::Black), 12);
    assert_eq!(board.count(Player::Red), 12);
}

#[test]
fn test_cell_at_off_board() {
    let board = Board::standard();
    assert_eq!(board.cell_at(-1, 0), None);
    assert_eq!(board.cell_at(0, 8), None);
    assert_eq!(board.cell_at(0, 1), Some(Cell::Piece(Player::Red)));
}

#[test]
fn test_apply_step() {
    let mut board = Board::empty();
    board.set(sq(5, 2), Cell::Piece(Player::Black));
    board.apply(&Move {
        from: sq(5, 2),
        to: sq(4, 3),
        kind: MoveKind::Step,
    });
    assert_eq!(board.get(sq(5, 2)), Cell::Empty);
    assert_eq!(board.get(sq(4, 3)), Cell::Piece(Player::Black));
}

#[test]
fn test_apply_jump_removes_captured() {
    let mut board = Board::empty();
    board.set(sq(4, 4), Cell::Piece(Player::Black));
    board.set(sq(3, 3), Cell::Piece(Player::Red));
    board.apply(&Move {
        from: sq(4, 4),
        to: sq(2, 2),
        kind: MoveKind::Jump { captured: sq(3, 3) },
    });
    assert_eq!(board.get(sq(4, 4)), Cell::Empty);
    assert_eq!(board.get(sq(3, 3)), Cell::Empty);
    assert_eq!(board.get(sq(2, 2)), Cell::Piece(Player::Black));
    assert_eq!(board.count(Player::Red), 0);
}

#[test]
fn test_display_standard() {
    let expected = "\
-r-r-r-r
r-r-r-r-
-r-r-r-r
.-.-.-.-
-.-.-.-.
b-b-b-b-
-b-b-b-b
b-b-b-b-
";
    assert_eq!(Board::standard().to_string(), expected);
}

#[test]
fn test_parse_display_output() {
    let board = Board::standard();
    let parsed: Board = board.to_string().parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_parse_ignores_spacing() {
    let board: Board = "
        - . - . - . - .
        . - . - . - . -
        - . - . - . - .
        . - r - . - . -
        - . - . - b - .
        . - . - . - . -
        - . - . - . - .
        . - . - . - . -
    "
    .parse()
    .unwrap();
    assert_eq!(board.get(sq(3, 2)), Cell::Piece(Player::Red));
    assert_eq!(board.get(sq(4, 5)), Cell::Piece(Player::Black));
    assert_eq!(board.count(Player::Black), 1);
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "--------".parse::<Board>(),
        Err(BoardParseError::RowCount(1))
    );

    let short_row = "--------\n".repeat(7) + "-r-\n";
    assert_eq!(
        short_row.parse::<Board>(),
        Err(BoardParseError::ColumnCount { row: 7, found: 3 })
    );

    let unknown = "-x------\n".to_string() + &"--------\n".repeat(7);
    assert_eq!(
        unknown.parse::<Board>(),
        Err(BoardParseError::UnknownCell {
            row: 0,
            col: 1,
            ch: 'x'
        })
    );

    let light = "b-------\n".to_string() + &"--------\n".repeat(7);
    assert_eq!(
        light.parse::<Board>(),
        Err(BoardParseError::LightSquare { row: 0, col: 0 })
    );
}
