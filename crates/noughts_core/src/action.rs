//! First-class move events and their errors.
//!
//! Moves are domain events, not side effects. The game records them in a
//! linear history, which is what makes undo an exact inverse.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Player;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
