/// Errors produced when parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, found {found}")]
    ColumnCount { row: usize, found: usize },

    #[error("row {row}, column {col}: unknown cell character '{ch}'")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("row {row}, column {col}: pieces may only stand on dark squares")]
    LightSquare { row: usize, col: usize },
}
