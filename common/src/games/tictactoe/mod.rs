mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{
    BOARD_SIDE, Board, CELL_COUNT, apply_move, get_available_moves, is_full, is_terminal,
    is_valid_move, outcome,
};
pub use bot_controller::{
    BotInput, DRAW_SCORE, O_WIN_SCORE, SCORE_MAXIMIZER, X_WIN_SCORE, best_move, calculate_move,
    leaf_score,
};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{Cell, Move, Outcome, Player, Winner};
pub use win_detector::{WINNING_LINES, check_win_with_line, check_winner, winning_line};
