use tracing::debug;

use crate::bidding::{
    BidDecision, BidState, BidTable, forced_call, order_up_decision, pick_up_decision,
    suit_call_decision,
};
use crate::card::Suit;
use crate::error::BidError;
use crate::hand::discard_index;
use crate::result::Event;
use crate::seat::Seat;
use crate::strength::Strength;

use super::{Game, GameState};

impl Game {
    /// Applies a bidding decision for `seat`.
    ///
    /// In the first pass [`BidDecision::OrderUp`] makes the flipped suit trump
    /// (for the dealer this means picking the card up); in the second pass
    /// [`BidDecision::Call`] names any other suit. When the dealer takes the
    /// flipped card the game moves to [`GameState::Discarding`].
    ///
    /// # Errors
    ///
    /// Returns an error if bidding is not in progress, it is not `seat`'s
    /// turn, or the decision is not allowed at this point. State is unchanged
    /// on error.
    pub fn bid(&mut self, seat: Seat, decision: BidDecision) -> Result<Event, BidError> {
        let GameState::Bidding(state) = self.state else {
            return Err(BidError::InvalidState);
        };
        if state.seat(self.dealer) != Some(seat) {
            return Err(BidError::NotYourTurn);
        }
        let flipped = self.flipped.ok_or(BidError::InvalidState)?;
        let table = BidTable {
            dealer: self.dealer,
            flipped,
        };

        let next = state.next(table, decision)?;

        let event = match decision {
            BidDecision::Pass => Event::Passed { seat },
            BidDecision::OrderUp => Event::OrderedUp {
                seat,
                dealer: self.dealer,
                card: flipped,
            },
            BidDecision::Call(trump) => Event::TrumpNamed { seat, trump },
        };
        debug!(seat = seat.number(), ?decision, "bid");

        match next {
            BidState::TrumpFixed {
                trump,
                caller,
                picked_up,
            } => self.fix_trump(trump, caller, picked_up),
            open => self.state = GameState::Bidding(open),
        }

        Ok(event)
    }

    /// Writes trump and caller for the round and hands the flipped card to
    /// the dealer if it was taken.
    fn fix_trump(&mut self, trump: Suit, caller: Seat, picked_up: bool) {
        self.trump = Some(trump);
        self.caller = Some(caller);
        self.strengths = [None; 4];
        debug!(trump = %trump, caller = caller.number(), picked_up, "trump fixed");

        if picked_up && self.flip_on_table {
            if let Some(card) = self.flipped {
                self.hands[self.dealer.index()].push(card);
                self.flip_on_table = false;
            }
            self.state = GameState::Discarding;
        } else {
            self.begin_play();
        }
    }

    /// Discards the card at `index` from the dealer's six-card hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer is not holding six cards waiting to
    /// discard, `seat` is not the dealer, or `index` is out of range.
    pub fn discard(&mut self, seat: Seat, index: usize) -> Result<Event, BidError> {
        if self.state != GameState::Discarding {
            return Err(BidError::InvalidState);
        }
        if seat != self.dealer {
            return Err(BidError::NotYourTurn);
        }
        let card = self.hands[seat.index()]
            .remove(index)
            .ok_or(BidError::CardNotFound)?;
        self.discards.push(card);
        debug!(seat = seat.number(), card = %card, "discard");
        debug_assert!(self.is_consistent());

        self.begin_play();
        Ok(Event::Discarded { seat, card })
    }

    /// The decision an automated seat makes at the current bidding step.
    pub(super) fn automated_bid(&self, seat: Seat) -> BidDecision {
        let GameState::Bidding(state) = self.state else {
            return BidDecision::Pass;
        };
        let Some(flipped) = self.flipped else {
            return BidDecision::Pass;
        };
        let strength = self.strengths[seat.index()]
            .unwrap_or_else(|| Strength::evaluate(self.hands[seat.index()].cards()));
        let threshold = self.options.call_threshold;

        match state {
            BidState::AwaitOrderUp { .. } => order_up_decision(&strength, flipped, threshold),
            BidState::DealerMayPickUp => pick_up_decision(&strength, flipped, threshold),
            BidState::AwaitSuitCall { .. } => {
                suit_call_decision(&strength, flipped.suit, threshold)
            }
            BidState::DealerMustCall => BidDecision::Call(forced_call(&strength, flipped.suit)),
            BidState::TrumpFixed { .. } => BidDecision::Pass,
        }
    }

    /// The card an automated dealer throws away after picking up.
    pub(super) fn automated_discard(&mut self) -> usize {
        let cards = self.hands[self.dealer.index()].cards();
        let len = cards.len();
        let choice = self.trump.and_then(|trump| discard_index(cards, trump));
        choice.unwrap_or_else(|| self.random_index(len))
    }
}
