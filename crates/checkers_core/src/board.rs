use crate::error::BoardParseError;
use crate::types::*;
use std::fmt;
use std::str::FromStr;

/// 8x8 grid of cells. Row 0 is Black's far edge, row 7 is Red's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Opening layout: Red fills the dark squares of rows 0..2,
    /// Black fills the dark squares of rows 5..7.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for sq in Square::all().filter(|s| s.is_dark()) {
            match sq.row() {
                0..=2 => board.set(sq, Cell::Piece(Player::Red)),
                5..=7 => board.set(sq, Cell::Piece(Player::Black)),
                _ => {}
            }
        }
        board
    }

    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Cell at signed coordinates, `None` off the board.
    pub fn cell_at(&self, row: i8, col: i8) -> Option<Cell> {
        Square::new(row, col).map(|sq| self.get(sq))
    }

    pub fn count(&self, player: Player) -> usize {
        Square::all()
            .filter(|&sq| self.get(sq).is_owned_by(player))
            .count()
    }

    /// Relocates the moving piece, then removes the captured piece of a jump.
    pub fn apply(&mut self, mv: &Move) {
        let moving = self.get(mv.from);
        self.set(mv.to, moving);
        self.set(mv.from, Cell::Empty);

        if let Some(captured) = mv.captured() {
            self.set(captured, Cell::Empty);
        }
    }
}

impl fmt::Display for Board {
    /// One line per row: `b`/`r` for pieces, `.` for empty dark squares,
    /// `-` for light squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as i8 {
            for col in 0..BOARD_SIZE as i8 {
                let Some(sq) = Square::new(row, col) else {
                    continue;
                };
                let ch = match self.get(sq) {
                    Cell::Piece(p) => p.symbol(),
                    Cell::Empty if sq.is_dark() => '.',
                    Cell::Empty => '-',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the diagram written by `Display`. Blank lines and whitespace
    /// inside a row are ignored; `.` and `-` both mean empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != BOARD_SIZE {
                return Err(BoardParseError::ColumnCount {
                    row,
                    found: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' | '-' => Cell::Empty,
                    'b' | 'B' => Cell::Piece(Player::Black),
                    'r' | 'R' => Cell::Piece(Player::Red),
                    _ => return Err(BoardParseError::UnknownCell { row, col, ch }),
                };
                let Some(sq) = Square::new(row as i8, col as i8) else {
                    continue;
                };
                if !cell.is_empty() && !sq.is_dark() {
                    return Err(BoardParseError::LightSquare { row, col });
                }
                board.set(sq, cell);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
