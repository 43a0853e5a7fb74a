use std::fmt;
use std::str::FromStr;

use crate::error::TicTacToeError;
use super::types::{Cell, Outcome, Player, Winner};
use super::win_detector::check_winner;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// 3x3 grid stored row-major: index = y * 3 + x.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: &[Cell]) -> Result<Self, TicTacToeError> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| {
            TicTacToeError::invalid_board(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            ))
        })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: usize, player: Player) -> Result<(), TicTacToeError> {
        if !is_valid_move(self, index) {
            return Err(TicTacToeError::InvalidMove { index });
        }
        self.cells[index] = player.into();
        Ok(())
    }

    /// Copy with `index` set, for search over cells already known to be empty.
    pub(super) fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = player.into();
        next
    }

    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Accepts `X`, `O` and `.`, `-` or `_` for empty cells. Whitespace and `|`
    /// separators are skipped so rows can be written as `"XO.|.X.|..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (position, ch) in s.chars().enumerate() {
            let cell = match ch.to_ascii_uppercase() {
                'X' => Cell::X,
                'O' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' => continue,
                other => {
                    return Err(TicTacToeError::invalid_board(format!(
                        "unexpected character '{}' at position {}",
                        other, position
                    )));
                }
            };
            cells.push(cell);
        }
        Board::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    matches!(board.get(index), Some(Cell::Empty))
}

pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, TicTacToeError> {
    let mut next = *board;
    next.place(index, player)?;
    Ok(next)
}

pub fn is_full(board: &Board) -> bool {
    board.cells.iter().all(|cell| !cell.is_empty())
}

pub fn is_terminal(board: &Board) -> bool {
    check_winner(board) != Winner::NoWin || is_full(board)
}

pub fn outcome(board: &Board) -> Outcome {
    match check_winner(board) {
        Winner::Win(player) => Outcome::Won(player),
        Winner::NoWin if is_full(board) => Outcome::Draw,
        Winner::NoWin => Outcome::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_not_full_or_terminal() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
        assert_eq!(outcome(&board), Outcome::Ongoing);
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::new();
        let next = apply_move(&board, 4, Player::X).unwrap();
        assert_eq!(next.get(4), Some(Cell::X));
        assert_eq!(board.get(4), Some(Cell::Empty));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            apply_move(&board, 9, Player::X),
            Err(TicTacToeError::InvalidMove { index: 9 })
        );
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(
            apply_move(&board, 0, Player::O),
            Err(TicTacToeError::InvalidMove { index: 0 })
        );
    }

    #[test]
    fn test_place_mutates_in_place() {
        let mut board = Board::new();
        board.place(8, Player::O).unwrap();
        assert_eq!(board.get(8), Some(Cell::O));
        assert!(board.place(8, Player::X).is_err());
        assert_eq!(board.get(8), Some(Cell::O));
    }

    #[test]
    fn test_full_draw_board() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Outcome::Draw);
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_won_board_is_terminal_before_full() {
        let board: Board = "XXX......".parse().unwrap();
        assert!(!is_full(&board));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Outcome::Won(Player::X));
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let result = Board::from_cells(&[Cell::Empty; 8]);
        assert!(matches!(result, Err(TicTacToeError::InvalidBoard { .. })));
        let result = Board::from_cells(&[Cell::Empty; 10]);
        assert!(matches!(result, Err(TicTacToeError::InvalidBoard { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let result: Result<Board, _> = "XO?......".parse();
        assert!(matches!(result, Err(TicTacToeError::InvalidBoard { .. })));
    }

    #[test]
    fn test_display_renders_rows() {
        let board: Board = "XO.|.X.|..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_count_marks() {
        let board: Board = "XOX.O....".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }
}
