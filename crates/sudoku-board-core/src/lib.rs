//! Core board state for a Sudoku data-entry application.
//!
//! This crate holds the logical state behind a 9x9 Sudoku board UI: the grid
//! of cell values and the identity of the currently selected cell. It knows
//! nothing about widgets or key codes; a GUI collaborator forwards selection
//! and digit-entry events into it and reads cell values back for rendering.
//!
//! # Overview
//!
//! The crate is organized around four types:
//!
//! - [`Position`]: a range-checked (x, y) board coordinate
//! - [`Digit`]: type-safe representation of digits 1-9
//! - [`DigitInput`]: a raw input candidate from key translation, not
//!   guaranteed to name a digit
//! - [`Board`]: the 81-cell grid plus the current selection
//!
//! # Examples
//!
//! ```
//! use sudoku_board_core::{Board, DigitInput, Position};
//!
//! let mut board = Board::new();
//!
//! // A click on a cell arms it for the next digit entry
//! board.select(Position::new(4, 4));
//!
//! // A key press arrives as a translated candidate string
//! board.enter_digit(&DigitInput::from("5"));
//!
//! assert_eq!(board.value_at(Position::new(4, 4)), 5);
//! assert_eq!(board.selection(), None); // a successful write disarms the cell
//! ```

pub mod board;
pub mod digit;
pub mod input;
pub mod position;

// Re-export commonly used types
pub use self::{board::Board, digit::Digit, input::DigitInput, position::Position};
