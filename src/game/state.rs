//! Game state types.

use crate::bidding::BidState;
use crate::seat::Seat;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next round to be dealt.
    WaitingForDeal,
    /// Trump is being determined.
    Bidding(BidState),
    /// The dealer holds six cards and must discard one.
    Discarding,
    /// Tricks are being played.
    Playing,
    /// All five tricks are played and the round can be scored.
    RoundOver,
    /// A team has reached the target score.
    GameOver,
}

/// Kind of decision the engine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Order the dealer to pick up the flipped card, or pass.
    OrderUp,
    /// As dealer, pick up the flipped card, or pass.
    PickUp,
    /// Name a suit other than the turned-down one, or pass.
    CallSuit,
    /// As dealer, name a suit other than the turned-down one.
    MustCall,
    /// As dealer, discard one of six cards.
    Discard,
    /// Lead any card to a new trick.
    Lead,
    /// Play to a trick, following suit if possible.
    Follow,
}

/// The seat due to act and what it must decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Seat to act.
    pub seat: Seat,
    /// Decision required.
    pub expected: Expected,
}
