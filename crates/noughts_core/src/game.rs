//! Game state machine: validated moves, win/draw detection, undo.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::{draw, win};
use crate::types::{Board, Player, Square};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
///
/// Invariant: `status` is [`GameStatus::Won`] iff a line of three matching
/// non-empty squares exists on the board, and [`GameStatus::Draw`] iff the
/// board is full with no such line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current: Player,
    status: GameStatus,
    history: Vec<Move>,
    winning_line: Option<[Position; 3]>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::with_starting(Player::X)
    }

    /// Creates a new game with the given starting player.
    pub fn with_starting(starting: Player) -> Self {
        Self {
            board: Board::new(),
            current: starting,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Resets the game to an empty board with the given starting player.
    #[instrument(skip(self))]
    pub fn reset(&mut self, starting: Player) {
        debug!(%starting, "Resetting game");
        *self = Self::with_starting(starting);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After a game-ending move this stays on the player who made it.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has ended in a win or a draw.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the number of moves on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the completed winning line, for UI highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the status is re-evaluated: a completed line through the
    /// placed square wins for the mover, a full board with no line is a
    /// draw, otherwise the turn passes to the opponent. Returns the
    /// resulting status.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] when the game has already ended and
    /// [`MoveError::SquareOccupied`] when the square is taken. Both leave
    /// the game untouched.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mover = self.current;
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(Move::new(mover, pos));

        if let Some(line) = win::winning_line_through(&self.board, pos) {
            debug!(winner = %mover, "Game won");
            self.status = GameStatus::Won(mover);
            self.winning_line = Some(line);
        } else if draw::is_full(&self.board) {
            debug!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current = mover.opponent();
        }

        Ok(self.status)
    }

    /// Undoes the most recent move, returning it.
    ///
    /// The mark is removed, the mover becomes the current player again, and
    /// any win/draw status is cleared along with the cached winning line.
    /// Undo is allowed after a game-ending move; the score kept by the
    /// frontend is intentionally not adjusted.
    ///
    /// Returns `None` when there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.history.pop()?;
        debug!(%mov, "Undoing move");
        self.board.set(mov.position, Square::Empty);
        self.current = mov.player;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        Some(mov)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.make_move(Position::TopLeft).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut game = Game::new();
        // X: top row, O: middle row
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        let status = game.make_move(Position::TopRight).unwrap();
        assert_eq!(status, GameStatus::Won(Player::X));

        let before = game.clone();
        assert_eq!(
            game.make_move(Position::BottomLeft),
            Err(MoveError::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_winning_line_is_cached() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        game.make_move(Position::TopRight).unwrap();
        assert_eq!(game.winning_line(), Some(win::ROWS[0]));
    }

    #[test]
    fn test_undo_is_exact_inverse() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        let before = game.clone();
        game.make_move(Position::TopLeft).unwrap();
        let undone = game.undo().unwrap();
        assert_eq!(undone, Move::new(Player::O, Position::TopLeft));
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_after_win_clears_status() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft).unwrap();
        game.make_move(Position::MiddleLeft).unwrap();
        game.make_move(Position::TopCenter).unwrap();
        game.make_move(Position::Center).unwrap();
        game.make_move(Position::TopRight).unwrap();
        assert!(game.is_over());

        game.undo().unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.current_player(), Player::X);
        assert!(game.board.is_empty(Position::TopRight));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut game = Game::new();
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        game.reset(Player::O);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current_player(), Player::O);
        assert!(game.board().is_empty(Position::Center));
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
