//! A single trick: up to four plays, resolved by trick points.

use alloc::vec::Vec;

use crate::card::{Card, Suit, trick_point};
use crate::seat::Seat;

/// Plays in a complete trick.
pub const PLAYS_PER_TRICK: usize = 4;

/// One card played to a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// Seat that played the card.
    pub seat: Seat,
    /// The card played.
    pub card: Card,
}

/// The plays of one lead-to-four-plays cycle, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Seat,
    plays: Vec<Play>,
}

impl Trick {
    /// Creates an empty trick led by `leader`.
    #[must_use]
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYS_PER_TRICK),
        }
    }

    /// Seat that leads this trick.
    #[must_use]
    pub const fn leader(&self) -> Seat {
        self.leader
    }

    /// Plays so far, in order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// The card that opened the trick.
    #[must_use]
    pub fn lead(&self) -> Option<Card> {
        self.plays.first().map(|play| play.card)
    }

    /// Number of cards played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Returns whether no card has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Returns whether all four seats have played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYS_PER_TRICK
    }

    /// Seat due to play next, or `None` if the trick is complete.
    #[must_use]
    pub fn next_seat(&self) -> Option<Seat> {
        self.leader.ring().get(self.plays.len()).copied()
    }

    /// Returns whether `seat` has already played to this trick.
    #[must_use]
    pub fn has_played(&self, seat: Seat) -> bool {
        self.plays.iter().any(|play| play.seat == seat)
    }

    /// Records a play.
    ///
    /// Turn order and follow-suit are checked by [`Game::play`](crate::Game::play),
    /// not here.
    pub fn push(&mut self, seat: Seat, card: Card) {
        self.plays.push(Play { seat, card });
    }

    /// Trick points of each play so far, against this trick's lead.
    #[must_use]
    pub fn points(&self, trump: Suit) -> Vec<u8> {
        let Some(lead) = self.lead() else {
            return Vec::new();
        };
        let lead_suit = lead.effective_suit(trump);
        self.plays
            .iter()
            .map(|play| trick_point(play.card, trump, lead_suit))
            .collect()
    }

    /// The play currently taking the trick and its trick points.
    ///
    /// The first play to reach the highest value wins ties.
    #[must_use]
    pub fn winning(&self, trump: Suit) -> Option<(Play, u8)> {
        let points = self.points(trump);
        let mut best: Option<(Play, u8)> = None;
        for (play, point) in self.plays.iter().zip(points) {
            if best.is_none_or(|(_, top)| point > top) {
                best = Some((*play, point));
            }
        }
        best
    }

    /// Seat that wins the trick, once complete.
    #[must_use]
    pub fn winner(&self, trump: Suit) -> Option<Seat> {
        if !self.is_complete() {
            return None;
        }
        self.winning(trump).map(|(play, _)| play.seat)
    }
}
