/// Every rejection the engine can report. All of them are recoverable and
/// leave the position untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("({row}, {col}) is not on the board")]
    InvalidCoordinate { row: i8, col: i8 },

    #[error("illegal selection: {0}")]
    IllegalSelection(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("malformed FEN: {0}")]
    MalformedFen(String),
}
