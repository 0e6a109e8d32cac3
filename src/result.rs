//! Engine events and round results for the presentation layer.

use crate::card::{Card, Suit};
use crate::seat::{Seat, Team};

/// Something that happened at the table.
///
/// Every state change made through [`Game`](crate::Game) reports one of
/// these so a front end can narrate the round without inspecting internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A seat passed during bidding.
    Passed {
        /// Seat that passed.
        seat: Seat,
    },
    /// The flipped card's suit became trump and the dealer takes the card.
    ///
    /// `seat == dealer` when the dealer picked it up.
    OrderedUp {
        /// Seat that ordered the card up.
        seat: Seat,
        /// Dealer receiving the card.
        dealer: Seat,
        /// The flipped card.
        card: Card,
    },
    /// A suit was named trump in the second pass.
    TrumpNamed {
        /// Seat that named trump.
        seat: Seat,
        /// The trump suit.
        trump: Suit,
    },
    /// The dealer threw away a card after taking the flipped card.
    Discarded {
        /// The dealer.
        seat: Seat,
        /// Card discarded.
        card: Card,
    },
    /// A card was played to the current trick.
    Played {
        /// Seat that played.
        seat: Seat,
        /// Card played.
        card: Card,
    },
    /// A trick was completed.
    TrickWon {
        /// Seat that took the trick.
        seat: Seat,
        /// The winning card.
        card: Card,
        /// Tricks completed so far this round, 1 to 5.
        trick_no: u8,
    },
}

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    /// Calling team took three or four tricks.
    Made,
    /// Calling team took all five tricks.
    March,
    /// Calling team took fewer than three tricks.
    Euchred,
}

/// Points awarded for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// Team receiving the points.
    pub team: Team,
    /// Points awarded, 1 or 2.
    pub points: u8,
    /// How the round was decided.
    pub kind: ScoreKind,
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Trump for the round.
    pub trump: Suit,
    /// Seat that named trump.
    pub caller: Seat,
    /// Tricks taken by each team, indexed by [`Team::index`].
    pub tricks: [u8; 2],
    /// Points awarded this round.
    pub score: RoundScore,
    /// Game points for each team after this round.
    pub points: [u8; 2],
    /// Team that has reached the target, if any.
    pub winner: Option<Team>,
}
