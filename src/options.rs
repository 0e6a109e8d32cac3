//! Game configuration options.

use crate::bidding::DEFAULT_CALL_THRESHOLD;
use crate::seat::Seat;

/// Configuration options for a Euchre game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use euchre_engine::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_call_threshold(34)
///     .with_human_seat(Some(Seat::Three))
///     .with_points_to_win(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Strength an automated seat needs to order up or name trump.
    ///
    /// Lower values make automated seats bid more aggressively.
    pub call_threshold: u16,
    /// Seat answered by the human input boundary, or `None` for four
    /// automated seats.
    pub human_seat: Option<Seat>,
    /// Points a team needs to win the game.
    pub points_to_win: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            call_threshold: DEFAULT_CALL_THRESHOLD,
            human_seat: Some(Seat::One),
            points_to_win: 11,
        }
    }
}

impl GameOptions {
    /// Sets the bidding threshold for automated seats.
    ///
    /// # Example
    ///
    /// ```
    /// use euchre_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_call_threshold(25);
    /// assert_eq!(options.call_threshold, 25);
    /// ```
    #[must_use]
    pub const fn with_call_threshold(mut self, threshold: u16) -> Self {
        self.call_threshold = threshold;
        self
    }

    /// Sets which seat, if any, is human-controlled.
    ///
    /// # Example
    ///
    /// ```
    /// use euchre_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_human_seat(None);
    /// assert_eq!(options.human_seat, None);
    /// ```
    #[must_use]
    pub const fn with_human_seat(mut self, seat: Option<Seat>) -> Self {
        self.human_seat = seat;
        self
    }

    /// Sets the points needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use euchre_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_points_to_win(7);
    /// assert_eq!(options.points_to_win, 7);
    /// ```
    #[must_use]
    pub const fn with_points_to_win(mut self, points: u8) -> Self {
        self.points_to_win = points;
        self
    }
}
