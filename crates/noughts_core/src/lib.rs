//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything a frontend needs to run a two-player game:
//! the board and its cells, validated moves, win/draw detection, and a
//! linear undo history. It performs no I/O and knows nothing about rendering.

#![warn(missing_docs)]

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use position::Position;
pub use types::{Board, Player, Square};
