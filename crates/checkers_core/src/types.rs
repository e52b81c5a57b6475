use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Starts on rows 5..7 and moves toward row 0. Moves first.
    Black,
    /// Starts on rows 0..2 and moves toward row 7.
    Red,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Row delta of a forward move for this player.
    pub fn forward(self) -> i8 {
        match self {
            Player::Black => -1,
            Player::Red => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::Red => "Red",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'b',
            Player::Red => 'r',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(p),
        }
    }

    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Piece(player)
    }
}

/// A board coordinate, always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate falls outside `0..BOARD_SIZE`.
    pub fn new(row: i8, col: i8) -> Option<Square> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> i8 {
        self.row as i8
    }

    pub fn col(self) -> i8 {
        self.col as i8
    }

    /// Dark squares are the only ones that ever hold a piece.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `(d_row, d_col)` away, or `None` when that leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(self.row().checked_add(d_row)?, self.col().checked_add(d_col)?)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// One diagonal cell, no capture.
    Step,
    /// Two diagonal cells over an opponent piece.
    Jump { captured: Square },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    pub fn is_jump(&self) -> bool {
        matches!(self.kind, MoveKind::Jump { .. })
    }

    pub fn captured(&self) -> Option<Square> {
        match self.kind {
            MoveKind::Step => None,
            MoveKind::Jump { captured } => Some(captured),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
