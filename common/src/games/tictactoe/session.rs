use crate::error::TicTacToeError;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Outcome, Player};
use super::win_detector::winning_line;

/// One human-versus-computer game. The UI forwards input here and reads the
/// board and outcome back after each call.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        let mut session = Self {
            state: TicTacToeGameState::new(),
            settings,
        };
        session.play_computer_turn();
        session
    }

    pub fn on_cell_selected(&mut self, index: usize) -> Result<(), TicTacToeError> {
        if self.state.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if self.state.current_player != self.settings.human_player {
            return Err(TicTacToeError::NotYourTurn);
        }

        self.state.place_mark(index)?;
        log!("{} marked cell {}", self.settings.human_player, index);

        if self.state.is_over() {
            self.log_result();
            return Ok(());
        }

        self.play_computer_turn();
        Ok(())
    }

    pub fn on_restart_requested(&mut self) {
        self.state.reset();
        log!("Game restarted, human plays {}", self.settings.human_player);
        self.play_computer_turn();
    }

    fn play_computer_turn(&mut self) {
        let computer = self.settings.computer_player();
        if self.state.is_over() || self.state.current_player != computer {
            return;
        }

        let input = BotInput::from_game_state(&self.state);
        let Some(index) = calculate_move(&input) else {
            return;
        };

        match self.state.place_mark(index) {
            Ok(()) => log!("{} (computer) marked cell {}", computer, index),
            Err(e) => {
                log!("Computer move {} rejected: {}", index, e);
                return;
            }
        }

        if self.state.is_over() {
            self.log_result();
        }
    }

    fn log_result(&self) {
        if let Some(message) = self.status_message() {
            log!("Game over: {}", message);
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn outcome(&self) -> Outcome {
        self.state.status
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn last_move(&self) -> Option<usize> {
        self.state.last_move
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn is_human_turn(&self) -> bool {
        !self.state.is_over() && self.state.current_player == self.settings.human_player
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(&self.state.board)
    }

    /// End-of-game text, `None` while the game is running.
    pub fn status_message(&self) -> Option<String> {
        match self.state.status {
            Outcome::Ongoing => None,
            Outcome::Won(player) => Some(format!("{} wins!", player)),
            Outcome::Draw => Some("It's a draw!".to_string()),
        }
    }

    pub fn restart_visible(&self) -> bool {
        self.state.is_over()
    }
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new(TicTacToeSessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Cell;

    fn human_as(player: Player) -> TicTacToeSession {
        TicTacToeSession::new(TicTacToeSessionSettings {
            human_player: player,
        })
    }

    fn marks(session: &TicTacToeSession, player: Player) -> usize {
        session.board().count(player)
    }

    #[test]
    fn test_new_session_waits_for_human_x() {
        let session = TicTacToeSession::default();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert!(session.is_human_turn());
        assert!(!session.restart_visible());
        assert_eq!(session.status_message(), None);
    }

    #[test]
    fn test_human_move_is_answered_by_computer() {
        let mut session = TicTacToeSession::default();
        session.on_cell_selected(0).unwrap();
        assert_eq!(session.board().get(0), Some(Cell::X));
        assert_eq!(marks(&session, Player::O), 1);
        assert_eq!(session.current_player(), Player::X);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_computer_answers_corner_with_center() {
        let mut session = TicTacToeSession::default();
        session.on_cell_selected(0).unwrap();
        assert_eq!(session.last_move(), Some(4));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = TicTacToeSession::default();
        session.on_cell_selected(0).unwrap();
        let before = *session.board();
        let taken = session.last_move().unwrap();
        assert_eq!(
            session.on_cell_selected(taken),
            Err(TicTacToeError::InvalidMove { index: taken })
        );
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut session = TicTacToeSession::default();
        assert!(session.on_cell_selected(9).is_err());
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_computer_opens_when_human_plays_o() {
        let session = human_as(Player::O);
        assert_eq!(marks(&session, Player::X), 1);
        assert_eq!(session.current_player(), Player::O);
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_human_cannot_beat_computer_by_playing_first_free_cell() {
        let mut session = TicTacToeSession::default();
        while !session.outcome().is_terminal() {
            let index = session
                .board()
                .cells()
                .iter()
                .position(|cell| *cell == Cell::Empty)
                .unwrap();
            session.on_cell_selected(index).unwrap();
        }
        assert_ne!(session.outcome(), Outcome::Won(Player::X));
        assert!(session.restart_visible());
        assert!(session.status_message().is_some());
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut session = TicTacToeSession::default();
        while !session.outcome().is_terminal() {
            let index = session
                .board()
                .cells()
                .iter()
                .position(|cell| *cell == Cell::Empty)
                .unwrap();
            session.on_cell_selected(index).unwrap();
        }
        let final_board = *session.board();
        let free = final_board.cells().iter().position(|cell| *cell == Cell::Empty);
        if let Some(index) = free {
            assert_eq!(session.on_cell_selected(index), Err(TicTacToeError::GameOver));
        }
        assert_eq!(session.board(), &final_board);
    }

    #[test]
    fn test_restart_after_terminal_state() {
        let mut session = TicTacToeSession::default();
        while !session.outcome().is_terminal() {
            let index = session
                .board()
                .cells()
                .iter()
                .position(|cell| *cell == Cell::Empty)
                .unwrap();
            session.on_cell_selected(index).unwrap();
        }
        session.on_restart_requested();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert_eq!(session.last_move(), None);
        assert!(!session.restart_visible());
    }

    #[test]
    fn test_restart_with_computer_x_replays_opening() {
        let mut session = human_as(Player::O);
        let opening = session.last_move();
        session.on_restart_requested();
        assert_eq!(marks(&session, Player::X), 1);
        assert_eq!(session.last_move(), opening);
    }

    #[test]
    fn test_status_messages() {
        let mut session = TicTacToeSession::default();
        session.state.board = "XOXXOOOXX".parse().unwrap();
        session.state.status = Outcome::Draw;
        assert_eq!(session.status_message().as_deref(), Some("It's a draw!"));

        session.state.status = Outcome::Won(Player::O);
        assert_eq!(session.status_message().as_deref(), Some("O wins!"));
    }

    #[test]
    fn test_winning_line_reported_for_won_board() {
        let mut session = TicTacToeSession::default();
        session.state.board = "OOOXX.X..".parse().unwrap();
        session.state.status = Outcome::Won(Player::O);
        assert_eq!(session.winning_line(), Some([0, 1, 2]));
    }
}
