use crate::error::TicTacToeError;
use super::board::{Board, outcome};
use super::types::{Outcome, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: Outcome,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: Outcome::Ongoing,
            last_move: None,
        }
    }

    /// Marks `index` for the current player, then either ends the game or
    /// passes the turn.
    pub fn place_mark(&mut self, index: usize) -> Result<(), TicTacToeError> {
        if self.status.is_terminal() {
            return Err(TicTacToeError::GameOver);
        }

        self.board.place(index, self.current_player)?;
        self.last_move = Some(index);

        self.status = outcome(&self.board);

        if self.status == Outcome::Ongoing {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn get_winner(&self) -> Option<Player> {
        self.status.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    fn play_all(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_new_game_is_empty_with_x_to_move() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.status, Outcome::Ongoing);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_place_mark_alternates_players() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(4).unwrap();
        assert_eq!(state.board.get(4), Some(Cell::X));
        assert_eq!(state.current_player, Player::O);
        state.place_mark(0).unwrap();
        assert_eq!(state.board.get(0), Some(Cell::O));
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.last_move, Some(0));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_changes() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(4).unwrap();
        let before = state.clone();
        assert_eq!(state.place_mark(4), Err(TicTacToeError::InvalidMove { index: 4 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.place_mark(12), Err(TicTacToeError::InvalidMove { index: 12 }));
        assert_eq!(state.current_player, Player::X);
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_on_move() {
        let mut state = TicTacToeGameState::new();
        play_all(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status, Outcome::Won(Player::X));
        assert_eq!(state.get_winner(), Some(Player::X));
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.place_mark(8), Err(TicTacToeError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new();
        play_all(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, Outcome::Draw);
        assert_eq!(state.get_winner(), None);
        assert!(state.is_over());
    }

    #[test]
    fn test_reset_after_terminal_state() {
        let mut state = TicTacToeGameState::new();
        play_all(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state, TicTacToeGameState::new());
        assert!(state.place_mark(0).is_ok());
    }
}
