//! End-to-end tests for game flow: legal sequences, termination, undo.

use noughts_core::rules::win;
use noughts_core::{Game, GameStatus, Move, MoveError, Player, Position};

/// Plays positions alternately from a fresh game, stopping at game end.
fn play(positions: &[Position]) -> Game {
    let mut game = Game::new();
    for pos in positions {
        if game.is_over() {
            break;
        }
        game.make_move(*pos).expect("legal move");
    }
    game
}

#[test]
fn test_every_game_ends_within_nine_moves() {
    // Fill the board in an order that happens to end in a draw.
    let game = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomRight,
    ]);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
}

#[test]
fn test_winner_declared_iff_line_is_uniform() {
    let game = play(&[
        Position::Center,
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::MiddleRight, // X completes the middle row
    ]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(win::check_winner(game.board()), Some(Player::X));
    assert_eq!(game.winning_line(), Some(win::ROWS[1]));
}

#[test]
fn test_status_agrees_with_board_scan_throughout() {
    let sequence = [
        Position::TopLeft,
        Position::Center,
        Position::BottomLeft,
        Position::TopRight,
        Position::MiddleLeft, // X completes the left column
    ];
    let mut game = Game::new();
    for pos in sequence {
        game.make_move(pos).expect("legal move");
        match game.status() {
            GameStatus::Won(player) => {
                assert_eq!(win::check_winner(game.board()), Some(player));
            }
            GameStatus::InProgress | GameStatus::Draw => {
                assert_eq!(win::check_winner(game.board()), None);
            }
        }
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_o_can_win() {
    let game = play(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::MiddleRight,
        Position::TopRight, // O completes the anti diagonal
    ]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.winning_line(), Some(win::ANTI_DIAGONAL));
}

#[test]
fn test_undo_rewinds_a_whole_game() {
    let sequence = [
        Position::Center,
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::MiddleRight,
    ];
    let mut game = Game::new();
    let mut snapshots = vec![game.clone()];
    for pos in sequence {
        game.make_move(pos).expect("legal move");
        snapshots.push(game.clone());
    }
    assert!(game.is_over());

    // Undo one move at a time; each step must restore the prior snapshot.
    for snapshot in snapshots.iter().rev().skip(1) {
        assert!(game.undo().is_some());
        assert_eq!(&game, snapshot);
    }
    assert_eq!(game.undo(), None);
}

#[test]
fn test_undo_then_replay_reaches_same_state() {
    let mut game = Game::new();
    game.make_move(Position::Center).expect("legal move");
    game.make_move(Position::TopLeft).expect("legal move");

    let undone = game.undo().expect("history present");
    assert_eq!(undone, Move::new(Player::O, Position::TopLeft));
    game.make_move(Position::TopLeft).expect("legal move");

    assert_eq!(game.move_count(), 2);
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_illegal_moves_are_no_ops() {
    let mut game = Game::new();
    game.make_move(Position::Center).expect("legal move");

    let before = game.clone();
    assert!(matches!(
        game.make_move(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    ));
    assert_eq!(game, before);

    // Finish the game (X completes the middle row), then verify moves are
    // rejected without effect.
    game.make_move(Position::TopLeft).expect("legal move");
    game.make_move(Position::MiddleLeft).expect("legal move");
    game.make_move(Position::TopCenter).expect("legal move");
    game.make_move(Position::MiddleRight).expect("legal move");
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    let before = game.clone();
    assert!(matches!(
        game.make_move(Position::BottomLeft),
        Err(MoveError::GameOver)
    ));
    assert_eq!(game, before);
}
