mod app;
pub mod game;

pub use app::TicTacToeApp;
