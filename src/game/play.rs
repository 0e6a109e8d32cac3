use alloc::vec::Vec;

use tracing::debug;

use crate::error::PlayError;
use crate::policy::{FollowView, follow, lead_index};
use crate::result::Event;
use crate::seat::Seat;
use crate::trick::Trick;

use super::{Game, GameState};

/// Tricks in a round.
pub const TRICKS_PER_ROUND: usize = 5;

impl Game {
    /// Starts trick play; the seat left of the dealer leads first.
    pub(super) fn begin_play(&mut self) {
        self.trick = Some(Trick::new(self.dealer.left()));
        self.state = GameState::Playing;
    }

    /// Positions in `seat`'s hand that may be played right now.
    ///
    /// Every position when leading or when void in the led suit; otherwise
    /// only the cards whose effective suit matches the lead. Empty if it is
    /// not `seat`'s turn to play.
    #[must_use]
    pub fn legal_plays(&self, seat: Seat) -> Vec<usize> {
        let (Some(trick), Some(trump)) = (self.trick.as_ref(), self.trump) else {
            return Vec::new();
        };
        if self.state != GameState::Playing || trick.next_seat() != Some(seat) {
            return Vec::new();
        }
        let hand = &self.hands[seat.index()];
        let legal = trick
            .lead()
            .map(|lead| hand.legal_indices(lead, trump))
            .unwrap_or_default();
        if legal.is_empty() {
            (0..hand.len()).collect()
        } else {
            legal
        }
    }

    /// Plays the card at `index` from `seat`'s hand to the current trick.
    ///
    /// Returns the play, followed by the trick result when this was the
    /// fourth card.
    ///
    /// # Errors
    ///
    /// Returns an error if tricks are not being played, it is not `seat`'s
    /// turn, `index` is out of range, or the card does not follow suit while
    /// the seat holds one that does. State is unchanged on error.
    pub fn play(&mut self, seat: Seat, index: usize) -> Result<Vec<Event>, PlayError> {
        if self.state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }
        let trump = self.trump.ok_or(PlayError::InvalidState)?;
        let trick = self.trick.as_mut().ok_or(PlayError::InvalidState)?;
        if trick.next_seat() != Some(seat) {
            return Err(PlayError::NotYourTurn);
        }

        let hand = &mut self.hands[seat.index()];
        if index >= hand.len() {
            return Err(PlayError::CardNotFound);
        }
        if let Some(lead) = trick.lead() {
            if !hand.is_legal(index, lead, trump) {
                return Err(PlayError::MustFollowSuit);
            }
        }

        let card = hand.remove(index).ok_or(PlayError::CardNotFound)?;
        trick.push(seat, card);
        debug!(seat = seat.number(), card = %card, "play");

        let mut events = alloc::vec![Event::Played { seat, card }];
        if let Some(event) = self.complete_trick() {
            events.push(event);
        }
        Ok(events)
    }

    /// Resolves the current trick if all four seats have played.
    fn complete_trick(&mut self) -> Option<Event> {
        let trump = self.trump?;
        if !self.trick.as_ref()?.is_complete() {
            return None;
        }
        let trick = self.trick.take()?;
        let (winning, _) = trick.winning(trump)?;

        self.tricks_won[winning.seat.index()] += 1;
        self.tricks.push(trick);
        debug_assert!(self.is_consistent());
        let trick_no = self.tricks.len() as u8;
        debug!(
            seat = winning.seat.number(),
            card = %winning.card,
            trick_no,
            "trick won"
        );

        if self.tricks.len() == TRICKS_PER_ROUND {
            self.state = GameState::RoundOver;
        } else {
            self.trick = Some(Trick::new(winning.seat));
        }

        Some(Event::TrickWon {
            seat: winning.seat,
            card: winning.card,
            trick_no,
        })
    }

    /// The card an automated seat plays to the current trick.
    pub(super) fn automated_play(&mut self, seat: Seat) -> usize {
        let cards = self.hands[seat.index()].cards();
        let len = cards.len();
        let choice = match (self.trick.as_ref(), self.trump, self.caller) {
            (Some(trick), Some(trump), Some(caller)) if !trick.is_empty() => {
                let decision = follow(&FollowView {
                    cards,
                    trump,
                    trick,
                    seat,
                    caller,
                });
                debug!(seat = seat.number(), choice = ?decision.choice, "follow");
                decision.index
            }
            (_, Some(trump), _) => lead_index(cards, trump),
            _ => None,
        };
        choice.unwrap_or_else(|| self.random_index(len))
    }
}
