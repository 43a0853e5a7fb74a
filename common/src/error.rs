use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("invalid move: cell {index} is out of range or already marked")]
    InvalidMove { index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}

impl TicTacToeError {
    pub fn invalid_board(reason: impl Into<String>) -> Self {
        TicTacToeError::InvalidBoard {
            reason: reason.into(),
        }
    }
}
