//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// A stacked deal does not account for the 24 cards exactly once.
    #[error("stacked deal must give five distinct cards to each seat")]
    InvalidDeal,
    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur while bidding for trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    /// Invalid game state for bidding.
    #[error("invalid game state for bidding")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The decision is not allowed at this point of bidding.
    #[error("decision not allowed at this point of bidding")]
    InvalidDecision,
    /// The flipped suit was turned down and cannot be named.
    #[error("the turned-down suit cannot be named trump")]
    TurnedDownSuit,
    /// Discard position is outside the hand.
    #[error("card position out of range")]
    CardNotFound,
}

/// Errors that can occur while playing tricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Card position is outside the hand.
    #[error("card position out of range")]
    CardNotFound,
    /// The seat holds a card of the led suit and must play one.
    #[error("must follow the led suit")]
    MustFollowSuit,
}

/// Errors that can occur while scoring a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The round has not finished its five tricks.
    #[error("invalid game state for scoring")]
    InvalidState,
}

/// Errors from parsing the human seat's typed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[error("no input")]
    Empty,
    /// Expected `y` or `n`.
    #[error("please enter y or n")]
    NotYesNo,
    /// Not one of `c`, `d`, `h`, `s`.
    #[error("please enter c, d, h or s")]
    UnknownSuit,
    /// The suit was turned down this round.
    #[error("that suit was turned down")]
    TurnedDownSuit,
    /// Not a number.
    #[error("please enter a number")]
    NotANumber,
    /// Position outside `1..=max`.
    #[error("please enter a number between 1 and {max}")]
    OutOfRange {
        /// Largest valid position.
        max: usize,
    },
}

/// Errors from advancing an automated seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// A bidding decision was rejected.
    #[error(transparent)]
    Bid(#[from] BidError),
    /// A card play was rejected.
    #[error(transparent)]
    Play(#[from] PlayError),
}
