use super::board::Board;
use super::types::{Cell, Player, Winner};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_winner(board: &Board) -> Winner {
    match check_win_with_line(board) {
        Some((player, _)) => Winner::Win(player),
        None => Winner::NoWin,
    }
}

pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    check_win_with_line(board).map(|(_, line)| line)
}

pub fn check_win_with_line(board: &Board) -> Option<(Player, [usize; 3])> {
    WINNING_LINES
        .iter()
        .find_map(|&line| line_owner(board, line).map(|player| (player, line)))
}

fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Player> {
    let cells = board.cells();
    let first = cells[a];
    if first == Cell::Empty || first != cells[b] || first != cells[c] {
        return None;
    }
    first.player()
}
