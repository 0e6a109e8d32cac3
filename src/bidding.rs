//! Trump determination as an explicit state machine.
//!
//! Bidding walks the table twice starting left of the dealer. In the first
//! pass each seat may order the flipped card up; the dealer gets the final say
//! and may pick it up. If everyone passes, the flipped suit is turned down and
//! the second pass lets each seat name any other suit. If the second pass
//! reaches the dealer unclaimed, the dealer must name one ("stick the dealer").
//!
//! [`BidState::next`] is a pure transition; the seat rotation is a single ring
//! walk parameterised by the dealer.

use crate::card::{Card, Suit};
use crate::error::BidError;
use crate::seat::Seat;
use crate::strength::{Strength, flip_value};

/// Default strength a seat needs before it will bid.
pub const DEFAULT_CALL_THRESHOLD: u16 = 30;

/// Bidding progress for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidState {
    /// A non-dealer seat may order up the flipped card.
    AwaitOrderUp {
        /// Seat to decide.
        seat: Seat,
    },
    /// Everyone else passed; the dealer may still pick the card up.
    DealerMayPickUp,
    /// The flipped suit is turned down; a non-dealer seat may name a suit.
    AwaitSuitCall {
        /// Seat to decide.
        seat: Seat,
    },
    /// The dealer must name a suit other than the turned-down one.
    DealerMustCall,
    /// Trump is settled for the round.
    TrumpFixed {
        /// The trump suit.
        trump: Suit,
        /// Seat that named trump.
        caller: Seat,
        /// Whether the dealer takes the flipped card into hand.
        picked_up: bool,
    },
}

/// A seat's answer while bidding is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidDecision {
    /// Decline.
    Pass,
    /// Make the flipped suit trump and have the dealer take the card.
    ///
    /// Used both for a non-dealer ordering up and for the dealer picking up.
    OrderUp,
    /// Name a trump suit in the second pass.
    Call(Suit),
}

/// The fixed facts bidding runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidTable {
    /// The dealer this round.
    pub dealer: Seat,
    /// The card turned face up after the deal.
    pub flipped: Card,
}

impl BidState {
    /// State at the start of bidding: the seat left of the dealer decides first.
    #[must_use]
    pub const fn opening(dealer: Seat) -> Self {
        Self::AwaitOrderUp {
            seat: dealer.left(),
        }
    }

    /// The seat expected to decide, or `None` once trump is fixed.
    #[must_use]
    pub const fn seat(&self, dealer: Seat) -> Option<Seat> {
        match *self {
            Self::AwaitOrderUp { seat } | Self::AwaitSuitCall { seat } => Some(seat),
            Self::DealerMayPickUp | Self::DealerMustCall => Some(dealer),
            Self::TrumpFixed { .. } => None,
        }
    }

    /// Returns whether trump has been fixed.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::TrumpFixed { .. })
    }

    /// Applies `decision` from the seat currently expected to act.
    ///
    /// # Errors
    ///
    /// Returns [`BidError::InvalidDecision`] if the decision is not one this
    /// state accepts (calling a suit in the first pass, ordering up in the
    /// second, passing when the dealer must call, or anything after trump is
    /// fixed), and [`BidError::TurnedDownSuit`] when naming the flipped suit
    /// in the second pass.
    pub fn next(self, table: BidTable, decision: BidDecision) -> Result<Self, BidError> {
        let dealer = table.dealer;
        let turned_down = table.flipped.suit;
        match (self, decision) {
            (Self::AwaitOrderUp { seat }, BidDecision::OrderUp) => Ok(Self::TrumpFixed {
                trump: turned_down,
                caller: seat,
                picked_up: true,
            }),
            (Self::AwaitOrderUp { seat }, BidDecision::Pass) => {
                let next = seat.left();
                Ok(if next == dealer {
                    Self::DealerMayPickUp
                } else {
                    Self::AwaitOrderUp { seat: next }
                })
            }
            (Self::DealerMayPickUp, BidDecision::OrderUp) => Ok(Self::TrumpFixed {
                trump: turned_down,
                caller: dealer,
                picked_up: true,
            }),
            (Self::DealerMayPickUp, BidDecision::Pass) => Ok(Self::AwaitSuitCall {
                seat: dealer.left(),
            }),
            (Self::AwaitSuitCall { .. } | Self::DealerMustCall, BidDecision::Call(suit))
                if suit == turned_down =>
            {
                Err(BidError::TurnedDownSuit)
            }
            (Self::AwaitSuitCall { seat }, BidDecision::Call(suit)) => Ok(Self::TrumpFixed {
                trump: suit,
                caller: seat,
                picked_up: false,
            }),
            (Self::AwaitSuitCall { seat }, BidDecision::Pass) => {
                let next = seat.left();
                Ok(if next == dealer {
                    Self::DealerMustCall
                } else {
                    Self::AwaitSuitCall { seat: next }
                })
            }
            (Self::DealerMustCall, BidDecision::Call(suit)) => Ok(Self::TrumpFixed {
                trump: suit,
                caller: dealer,
                picked_up: false,
            }),
            _ => Err(BidError::InvalidDecision),
        }
    }
}

/// Whether an automated non-dealer seat orders up the flipped card.
#[must_use]
pub fn order_up_decision(strength: &Strength, flipped: Card, threshold: u16) -> BidDecision {
    if strength[flipped.suit] >= threshold {
        BidDecision::OrderUp
    } else {
        BidDecision::Pass
    }
}

/// Whether an automated dealer picks up the flipped card.
///
/// The dealer counts the flipped card itself on top of the hand's total for
/// that suit.
#[must_use]
pub fn pick_up_decision(strength: &Strength, flipped: Card, threshold: u16) -> BidDecision {
    if strength[flipped.suit] + flip_value(flipped) >= threshold {
        BidDecision::OrderUp
    } else {
        BidDecision::Pass
    }
}

/// Second-pass decision for an automated seat that is free to pass.
///
/// Names the strongest eligible suit only if its total reaches `threshold`.
#[must_use]
pub fn suit_call_decision(strength: &Strength, turned_down: Suit, threshold: u16) -> BidDecision {
    let best = strength.best_call(turned_down);
    if strength[best] >= threshold {
        BidDecision::Call(best)
    } else {
        BidDecision::Pass
    }
}

/// The suit an automated dealer names when forced to call.
#[must_use]
pub fn forced_call(strength: &Strength, turned_down: Suit) -> Suit {
    strength.best_call(turned_down)
}
