//! Parsing the human seat's typed answers.
//!
//! These functions only validate text; nothing here touches game state, so a
//! failed parse leaves the round exactly as it was and the caller re-prompts.

use crate::card::Suit;
use crate::error::InputError;

fn first_char(text: &str) -> Result<char, InputError> {
    text.trim().chars().next().ok_or(InputError::Empty)
}

/// Parses a `y`/`n` answer. Only the first character is considered.
///
/// # Errors
///
/// Returns [`InputError::Empty`] or [`InputError::NotYesNo`].
pub fn parse_yes_no(text: &str) -> Result<bool, InputError> {
    match first_char(text)?.to_ascii_lowercase() {
        'y' => Ok(true),
        'n' => Ok(false),
        _ => Err(InputError::NotYesNo),
    }
}

/// Parses a suit letter, rejecting `excluded` (the turned-down suit).
///
/// # Errors
///
/// Returns [`InputError::Empty`], [`InputError::UnknownSuit`], or
/// [`InputError::TurnedDownSuit`].
pub fn parse_suit(text: &str, excluded: Option<Suit>) -> Result<Suit, InputError> {
    let suit = Suit::from_letter(first_char(text)?).ok_or(InputError::UnknownSuit)?;
    if excluded == Some(suit) {
        return Err(InputError::TurnedDownSuit);
    }
    Ok(suit)
}

/// Parses a 1-based card position for a hand of `len` cards.
///
/// Returns the zero-based index.
///
/// # Errors
///
/// Returns [`InputError::Empty`], [`InputError::NotANumber`], or
/// [`InputError::OutOfRange`].
pub fn parse_position(text: &str, len: usize) -> Result<usize, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    let position: usize = text.parse().map_err(|_| InputError::NotANumber)?;
    if position == 0 || position > len {
        return Err(InputError::OutOfRange { max: len });
    }
    Ok(position - 1)
}
