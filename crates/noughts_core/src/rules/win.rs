//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// The three rows, top to bottom.
pub const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
];

/// The three columns, left to right.
pub const COLS: [[Position; 3]; 3] = [
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
];

/// The main diagonal (top-left to bottom-right).
pub const MAIN_DIAGONAL: [Position; 3] =
    [Position::TopLeft, Position::Center, Position::BottomRight];

/// The anti diagonal (top-right to bottom-left).
pub const ANTI_DIAGONAL: [Position; 3] =
    [Position::TopRight, Position::Center, Position::BottomLeft];

/// All 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    ROWS[0],
    ROWS[1],
    ROWS[2],
    COLS[0],
    COLS[1],
    COLS[2],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

/// Returns the lines that pass through the given position: its row, its
/// column, and whichever diagonals it lies on (2 to 4 lines).
pub fn lines_through(pos: Position) -> Vec<[Position; 3]> {
    let mut lines = Vec::with_capacity(4);
    lines.push(ROWS[pos.row()]);
    lines.push(COLS[pos.col()]);
    if pos.row() == pos.col() {
        lines.push(MAIN_DIAGONAL);
    }
    if pos.row() + pos.col() == 2 {
        lines.push(ANTI_DIAGONAL);
    }
    lines
}

/// Returns the player occupying all three squares of the line, if any.
fn line_winner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Checks only the lines through the last-placed position.
///
/// After a move at `pos`, a new winning line must contain `pos`, so testing
/// its row, column, and applicable diagonals suffices (at most 4 checks
/// instead of 8). Returns the completed line for UI highlighting.
#[instrument(skip(board))]
pub fn winning_line_through(board: &Board, pos: Position) -> Option<[Position; 3]> {
    lines_through(pos)
        .into_iter()
        .find(|line| line_winner(board, *line).is_some())
}

/// Scans all 8 lines and returns the first completed one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line_winner(board, *line).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| line_winner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some(ROWS[0]));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_through_center_includes_both_diagonals() {
        let lines = lines_through(Position::Center);
        assert_eq!(lines.len(), 4);
        assert!(lines.contains(&MAIN_DIAGONAL));
        assert!(lines.contains(&ANTI_DIAGONAL));
    }

    #[test]
    fn test_lines_through_edge_has_no_diagonal() {
        let lines = lines_through(Position::TopCenter);
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&ROWS[0]));
        assert!(lines.contains(&COLS[1]));
    }

    #[test]
    fn test_winning_line_through_matches_full_scan() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::X));
        assert_eq!(
            winning_line_through(&board, Position::Center),
            winning_line(&board)
        );
        assert_eq!(
            winning_line_through(&board, Position::BottomLeft),
            Some(ANTI_DIAGONAL)
        );
    }

    #[test]
    fn test_winning_line_through_misses_unrelated_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        // BottomLeft shares no line with the completed top row.
        assert_eq!(winning_line_through(&board, Position::BottomLeft), None);
    }
}
