use super::board::{Board, get_available_moves, is_full};
use super::game_state::TicTacToeGameState;
use super::types::{Move, Player, Winner};
use super::win_detector::check_winner;

pub const X_WIN_SCORE: i32 = -1;
pub const O_WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;

/// The player whose win scores positive. Searches that should play well for
/// either side keep this as the maximizing player.
pub const SCORE_MAXIMIZER: Player = Player::O;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_player: state.current_player,
        }
    }
}

/// Picks the computer's cell for the side to move, or `None` on a finished board.
pub fn calculate_move(input: &BotInput) -> Option<usize> {
    best_move(&input.board, input.current_player, SCORE_MAXIMIZER).index
}

/// Exhaustive minimax over `board` with `mover` to play.
///
/// Leaf scores are absolute: an X win is -1 and an O win is +1 whoever is on
/// move and however deep the leaf is. Nodes where `mover == maximizing_player`
/// take the highest child score, the others take the lowest. Ties keep the
/// lowest cell index.
pub fn best_move(board: &Board, mover: Player, maximizing_player: Player) -> Move {
    if let Some(score) = leaf_score(board) {
        return Move::leaf(score);
    }

    let is_maximizing = mover == maximizing_player;
    let mut best: Option<Move> = None;

    for index in get_available_moves(board) {
        let next = board.with_mark(index, mover);
        let score = best_move(&next, mover.opponent(), maximizing_player).score;

        let improves = match best {
            None => true,
            Some(current) if is_maximizing => score > current.score,
            Some(current) => score < current.score,
        };
        if improves {
            best = Some(Move::new(index, score));
        }
    }

    // leaf_score covers full boards, so a candidate always exists here
    best.unwrap_or(Move::leaf(DRAW_SCORE))
}

pub fn leaf_score(board: &Board) -> Option<i32> {
    match check_winner(board) {
        Winner::Win(Player::X) => Some(X_WIN_SCORE),
        Winner::Win(Player::O) => Some(O_WIN_SCORE),
        Winner::NoWin if is_full(board) => Some(DRAW_SCORE),
        Winner::NoWin => None,
    }
}
