mod tictactoe;

pub use tictactoe::{BoardAction, TicTacToeGameUi};
