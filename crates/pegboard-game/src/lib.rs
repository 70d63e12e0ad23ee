//! Game session management for cross-shaped peg solitaire.
//!
//! This crate builds the playable game on top of the board model in
//! `pegboard-core`:
//!
//! - [`Game`]: applies jumps, keeps the [`Session`] counters, evaluates game-over
//!   and handles cell selection through
//!   [`handle_cell_activation`](Game::handle_cell_activation).
//! - [`Session`]: the `Idle -> Active -> Ended` state machine with an externally
//!   ticked clock.
//! - [`BestTimeStore`] and [`record_win`]: best winning time tracking over an
//!   abstract key-value store.
//! - [`GameController`] and [`GameObserver`]: the event boundary used by
//!   front-ends.
//!
//! # Examples
//!
//! ```
//! use pegboard_core::{Board, Position};
//! use pegboard_game::Game;
//!
//! let board = Board::from_pegs([Position::new(1, 3), Position::new(2, 3)]).unwrap();
//! let mut game = Game::from_board(board);
//!
//! game.handle_cell_activation(1, 3);
//! game.handle_cell_activation(3, 3);
//!
//! let outcome = game.outcome().expect("one peg left");
//! assert!(outcome.is_victory);
//! ```

pub use self::{best_time::*, controller::*, error::*, game::*, session::*};

mod best_time;
mod controller;
mod error;
mod game;
mod session;
