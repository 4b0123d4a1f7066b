//! # Connect Four Board
//!
//! A Connect Four board model: a fixed 6×7 grid of colored tokens with
//! gravity-driven insertion and four-in-a-row detection along rows, columns,
//! and both diagonals.
//!
//! The board is a plain `Copy` value with no turn management and no
//! game-over lock; callers drive the game by alternating [`Board::insert`]
//! and [`Board::winner`] themselves.
//!
//! ```
//! use connect_four_board::{Board, Cell};
//!
//! let mut board = Board::new();
//! for _ in 0..4 {
//!     board.insert(Cell::Red, 3).unwrap();
//! }
//! assert_eq!(board.winner(), Some(Cell::Red));
//! ```
//!
//! ## Modules
//!
//! - [`board`] — Board grid, cell type, insertion, win scan
//! - [`error`] — Structured error types

pub mod board;
pub mod error;

pub use board::{Board, Cell, COLS, ROWS, WIN_LEN};
pub use error::InsertError;
