use super::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub human_player: Player,
}

impl TicTacToeSessionSettings {
    pub fn computer_player(&self) -> Player {
        self.human_player.opponent()
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            human_player: Player::X,
        }
    }
}
