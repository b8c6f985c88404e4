//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both coordinates are validated at construction time, so a
/// `Position` value is always in range and can index the board without
/// further checks.
///
/// # Examples
///
/// ```
/// use sudoku_board_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!(pos.x(), 0);
    /// assert_eq!(pos.y(), 8);
    /// ```
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a box index (0-8, left to right, top to
    /// bottom) and a cell index within that box (0-8 in the same order).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::Position;
    ///
    /// // Top-left cell of the center box
    /// assert_eq!(Position::from_box(4, 0), Position::new(3, 3));
    /// ```
    #[must_use]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        let x = (box_index % 3) * 3 + cell_index % 3;
        let y = (box_index / 3) * 3 + cell_index / 3;
        Self { x, y }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this position (0-80).
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).index(), 0);
    /// assert_eq!(Position::new(4, 4).index(), 40);
    /// assert_eq!(Position::new(8, 8).index(), 80);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3x3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 8).box_index(), 8);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_positions_cover_board() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_from_box_round_trip() {
        for box_index in 0..9 {
            for cell_index in 0..9 {
                let pos = Position::from_box(box_index, cell_index);
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_out_of_range_x_panics() {
        let _ = Position::new(9, 0);
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_out_of_range_y_panics() {
        let _ = Position::new(0, 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(4, 2)), "(4, 2)");
    }
}
