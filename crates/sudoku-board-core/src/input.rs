//! Raw digit-entry input from the key-translation layer.

use crate::Digit;

/// A candidate value produced by translating a raw key press.
///
/// Key-code-to-text translation is a platform concern that happens upstream
/// of the board core, and the text it produces is not guaranteed to name a
/// digit: it may be a letter, punctuation, a multi-character key name, or
/// the digit 0. [`DigitInput`] carries that text opaquely; [`Board::enter_digit`]
/// decides whether it resolves to a digit 1-9.
///
/// [`Board::enter_digit`]: crate::Board::enter_digit
///
/// # Examples
///
/// ```
/// use sudoku_board_core::{Digit, DigitInput};
///
/// assert_eq!(DigitInput::from("5").digit(), Some(Digit::D5));
/// assert_eq!(DigitInput::from("0").digit(), None);
/// assert_eq!(DigitInput::from("a").digit(), None);
/// assert_eq!(DigitInput::from("Escape").digit(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitInput {
    text: String,
}

impl DigitInput {
    /// Creates an input candidate from translated key text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the translated key text as received.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolves this candidate to a digit, or `None` if the text does not
    /// parse as an integer in the range 1-9.
    ///
    /// Zero is rejected: the board has no erase operation, so `0` is not a
    /// valid entry.
    #[must_use]
    pub fn digit(&self) -> Option<Digit> {
        let value = self.text.parse::<u8>().ok()?;
        Digit::try_from_value(value)
    }
}

impl From<&str> for DigitInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for DigitInput {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Digit> for DigitInput {
    fn from(digit: Digit) -> Self {
        Self::new(digit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_resolves() {
        for digit in Digit::ALL {
            assert_eq!(DigitInput::from(digit.as_str()).digit(), Some(digit));
        }
    }

    #[test]
    fn test_non_digit_text_rejected() {
        for text in ["", "0", "10", "a", "-1", "5.0", " 5", "Enter", "Escape"] {
            assert_eq!(DigitInput::from(text).digit(), None, "text: {text:?}");
        }
    }

    #[test]
    fn test_from_digit_round_trips() {
        assert_eq!(DigitInput::from(Digit::D7).digit(), Some(Digit::D7));
    }
}
