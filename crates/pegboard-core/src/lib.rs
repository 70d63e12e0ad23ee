//! Core data structures for the cross-shaped peg solitaire board.
//!
//! This crate models the fixed 7×7 board and the rules for a single jump. It
//! holds no session state; counters, timing and selection live in
//! `pegboard-game`.
//!
//! # Overview
//!
//! - [`Position`] and [`Direction`]: coordinates on the grid and the four jump
//!   directions.
//! - [`CellState`]: invalid (outside the cross), occupied or empty.
//! - [`Board`]: the grid itself, starting from [`INITIAL_LAYOUT`], with a text
//!   notation for building arbitrary positions.
//! - [`Jump`] and [`JumpError`]: move legality, application and enumeration.
//!
//! # Examples
//!
//! ```
//! use pegboard_core::{Board, Position};
//!
//! let mut board = Board::new();
//! assert!(board.has_valid_moves());
//!
//! let jump = board.check_jump(Position::new(5, 3), Position::CENTER).unwrap();
//! board.apply_jump(jump);
//! assert_eq!(board.peg_count(), 31);
//! ```

pub use self::{board::*, cell_state::*, jump::*, position::*};

mod board;
mod cell_state;
mod jump;
mod position;
