//! The board: cell grid plus current selection.

use crate::{Digit, DigitInput, Position};

/// The state behind a Sudoku board UI: 81 cell values and the currently
/// selected cell.
///
/// The board is pure data entry. It does not validate Sudoku rules
/// (duplicate digits in a row, column, or box are accepted), and it has no
/// way to clear a filled cell: `0` and non-digit input are rejected, and no
/// erase operation exists.
///
/// Mutation follows a two-step protocol driven by the GUI collaborator:
/// a selection event arms a cell via [`select`], and a subsequent digit
/// entry via [`enter_digit`] writes into the armed cell and disarms it.
/// Invalid entries are ignored without touching either the grid or the
/// selection.
///
/// [`select`]: Self::select
/// [`enter_digit`]: Self::enter_digit
///
/// # Examples
///
/// ```
/// use sudoku_board_core::{Board, DigitInput, Position};
///
/// let mut board = Board::new();
/// let pos = Position::new(0, 0);
///
/// board.select(pos);
/// board.enter_digit(&DigitInput::from("7"));
/// assert_eq!(board.value_at(pos), 7);
///
/// // The selection was consumed; further entries go nowhere
/// board.enter_digit(&DigitInput::from("3"));
/// assert_eq!(board.value_at(pos), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
    selection: Option<Position>,
}

impl Board {
    /// Creates an empty board with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::{Board, Position};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.selection(), None);
    /// for pos in Position::ALL {
    ///     assert_eq!(board.value_at(pos), 0);
    /// }
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; 81],
            selection: None,
        }
    }

    /// Selects the cell at the given position, overwriting any prior
    /// selection.
    ///
    /// Selection never modifies cell values. The selection persists across
    /// events that do not consume it (rejected digit entries, unrelated key
    /// presses) until overwritten by another `select` or cleared by a
    /// successful [`enter_digit`](Self::enter_digit).
    pub fn select(&mut self, pos: Position) {
        self.selection = Some(pos);
    }

    /// Returns the currently selected cell, or `None` if no cell is armed.
    #[must_use]
    pub const fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Enters a digit candidate into the selected cell.
    ///
    /// The entry is ignored, leaving the board entirely unchanged, when:
    ///
    /// - no cell is selected, or
    /// - `input` does not resolve to a digit 1-9 (non-numeric text, `0`,
    ///   or an out-of-range number).
    ///
    /// On success the digit is written at the selected position, replacing
    /// any prior value, and the selection is cleared. Sudoku rules are not
    /// checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::{Board, DigitInput, Position};
    ///
    /// let mut board = Board::new();
    /// let pos = Position::new(3, 5);
    ///
    /// board.select(pos);
    /// board.enter_digit(&DigitInput::from("0")); // rejected, still selected
    /// assert_eq!(board.value_at(pos), 0);
    /// assert_eq!(board.selection(), Some(pos));
    ///
    /// board.enter_digit(&DigitInput::from("8"));
    /// assert_eq!(board.value_at(pos), 8);
    /// assert_eq!(board.selection(), None);
    /// ```
    pub fn enter_digit(&mut self, input: &DigitInput) {
        let Some(pos) = self.selection else {
            return;
        };
        let Some(digit) = input.digit() else {
            return;
        };
        self.cells[pos.index()] = Some(digit);
        self.selection = None;
    }

    /// Returns the digit at the given position, or `None` for an empty cell.
    #[must_use]
    pub const fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns the numeric value at the given position, with 0 denoting an
    /// empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::{Board, DigitInput, Position};
    ///
    /// let mut board = Board::new();
    /// assert_eq!(board.value_at(Position::new(2, 2)), 0);
    ///
    /// board.select(Position::new(2, 2));
    /// board.enter_digit(&DigitInput::from("4"));
    /// assert_eq!(board.value_at(Position::new(2, 2)), 4);
    /// ```
    #[must_use]
    pub fn value_at(&self, pos: Position) -> u8 {
        self.digit_at(pos).map_or(0, Digit::value)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board_with(entries: &[(Position, &str)]) -> Board {
        let mut board = Board::new();
        for (pos, text) in entries {
            board.select(*pos);
            board.enter_digit(&DigitInput::from(*text));
        }
        board
    }

    #[test]
    fn test_new_board_is_empty_and_unselected() {
        let board = Board::new();
        assert_eq!(board.selection(), None);
        for pos in Position::ALL {
            assert_eq!(board.value_at(pos), 0);
            assert_eq!(board.digit_at(pos), None);
        }
    }

    #[test]
    fn test_select_overwrites_prior_selection() {
        let mut board = Board::new();
        board.select(Position::new(1, 1));
        board.select(Position::new(7, 2));
        assert_eq!(board.selection(), Some(Position::new(7, 2)));

        board.enter_digit(&DigitInput::from("6"));
        assert_eq!(board.value_at(Position::new(7, 2)), 6);
        assert_eq!(board.value_at(Position::new(1, 1)), 0);
    }

    #[test]
    fn test_enter_digit_without_selection_is_noop() {
        let mut board = board_with(&[(Position::new(0, 0), "7")]);
        let before = board.clone();

        for text in ["5", "0", "a"] {
            board.enter_digit(&DigitInput::from(text));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_successful_entry_clears_selection() {
        let mut board = Board::new();
        let pos = Position::new(4, 6);

        board.select(pos);
        board.enter_digit(&DigitInput::from("5"));
        assert_eq!(board.value_at(pos), 5);
        assert_eq!(board.selection(), None);

        // No intervening select: the follow-up entry must go nowhere
        board.enter_digit(&DigitInput::from("3"));
        for p in Position::ALL {
            let expected = if p == pos { 5 } else { 0 };
            assert_eq!(board.value_at(p), expected);
        }
    }

    #[test]
    fn test_zero_is_rejected_and_keeps_selection() {
        let mut board = board_with(&[(Position::new(2, 3), "9")]);
        let pos = Position::new(2, 3);

        board.select(pos);
        board.enter_digit(&DigitInput::from("0"));
        assert_eq!(board.value_at(pos), 9);
        assert_eq!(board.selection(), Some(pos));
    }

    #[test]
    fn test_non_numeric_input_is_rejected_and_keeps_selection() {
        let mut board = Board::new();
        let pos = Position::new(5, 5);

        board.select(pos);
        for text in ["a", "Backspace", "", "12"] {
            board.enter_digit(&DigitInput::from(text));
            assert_eq!(board.value_at(pos), 0, "text: {text:?}");
            assert_eq!(board.selection(), Some(pos), "text: {text:?}");
        }
    }

    #[test]
    fn test_entry_replaces_existing_value() {
        let pos = Position::new(6, 1);
        let board = board_with(&[(pos, "2"), (pos, "8")]);
        assert_eq!(board.value_at(pos), 8);
    }

    #[test]
    fn test_duplicate_digits_are_permitted() {
        // Same digit twice in one row: pure data entry, no rule checks
        let board = board_with(&[(Position::new(0, 0), "5"), (Position::new(1, 0), "5")]);
        assert_eq!(board.value_at(Position::new(0, 0)), 5);
        assert_eq!(board.value_at(Position::new(1, 0)), 5);
    }

    #[test]
    fn test_entry_scenario() {
        let mut board = Board::new();

        board.select(Position::new(0, 0));
        board.enter_digit(&DigitInput::from("7"));
        assert_eq!(board.value_at(Position::new(0, 0)), 7);

        board.select(Position::new(0, 0));
        board.enter_digit(&DigitInput::from("0"));
        assert_eq!(board.value_at(Position::new(0, 0)), 7);

        board.select(Position::new(8, 8));
        board.enter_digit(&DigitInput::from("9"));
        assert_eq!(board.value_at(Position::new(8, 8)), 9);
        assert_eq!(board.value_at(Position::new(0, 0)), 7);
    }

    proptest! {
        #[test]
        fn prop_select_never_mutates_grid(x in 0u8..9, y in 0u8..9, seed_x in 0u8..9, seed_y in 0u8..9, seed in 1u8..=9) {
            let mut board = board_with(&[(Position::new(seed_x, seed_y), seed.to_string().as_str())]);
            let values: Vec<u8> = Position::ALL.iter().map(|&p| board.value_at(p)).collect();

            board.select(Position::new(x, y));

            let after: Vec<u8> = Position::ALL.iter().map(|&p| board.value_at(p)).collect();
            prop_assert_eq!(values, after);
        }

        #[test]
        fn prop_unselected_entry_never_mutates(text in "\\PC{0,3}") {
            let mut board = Board::new();
            board.enter_digit(&DigitInput::from(text.as_str()));
            prop_assert_eq!(&board, &Board::new());
        }
    }
}
