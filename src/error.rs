/// Errors that can occur when inserting a token into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range")]
    InvalidColumn { column: usize },

    #[error("cannot insert an empty cell")]
    EmptyColor,
}
