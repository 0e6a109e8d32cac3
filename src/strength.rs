//! Hand strength per candidate trump suit, used by automated seats to bid.

use core::ops::Index;

use crate::card::{Card, Rank, Suit};

/// Flat value of an Ace outside the candidate trump suit.
const OFF_SUIT_ACE: u16 = 4;

/// Value of `card` if `trump` were named, or 0 if it does not count.
fn value_under(card: Card, trump: Suit) -> u16 {
    if card.is_right_bower(trump) {
        return 15;
    }
    if card.is_left_bower(trump) {
        return 13;
    }
    if card.suit == trump {
        return match card.rank {
            Rank::Ace => 11,
            Rank::King => 10,
            Rank::Queen => 9,
            Rank::Ten => 8,
            Rank::Nine => 7,
            Rank::Jack => 0,
        };
    }
    if card.rank == Rank::Ace {
        return OFF_SUIT_ACE;
    }
    0
}

/// Standalone value of the flipped card to a dealer considering picking it up.
#[must_use]
pub const fn flip_value(card: Card) -> u16 {
    match card.rank {
        Rank::Jack => 15,
        Rank::Ace => 11,
        Rank::King => 10,
        Rank::Queen => 9,
        Rank::Ten => 8,
        Rank::Nine => 7,
    }
}

/// Potential strength of a hand for each of the four candidate trump suits.
///
/// Indexed by [`Suit::index`]: Clubs, Diamonds, Hearts, Spades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strength(pub [u16; 4]);

impl Strength {
    /// Scores `cards` against every candidate trump suit.
    ///
    /// A card may count toward several suits at once: the Jack of Spades is
    /// worth 15 toward Spades and 13 toward Clubs.
    #[must_use]
    pub fn evaluate(cards: &[Card]) -> Self {
        let mut totals = [0; 4];
        for suit in Suit::ALL {
            totals[suit.index()] = cards.iter().map(|&card| value_under(card, suit)).sum();
        }
        Self(totals)
    }

    /// Total for `suit`.
    #[must_use]
    pub const fn get(&self, suit: Suit) -> u16 {
        self.0[suit.index()]
    }

    /// Adds `amount` to `suit`'s total.
    pub const fn add(&mut self, suit: Suit, amount: u16) {
        self.0[suit.index()] += amount;
    }

    /// The strongest suit other than `turned_down`.
    ///
    /// Ties go to the earlier suit in [`Suit::ALL`] order.
    #[must_use]
    pub fn best_call(&self, turned_down: Suit) -> Suit {
        let mut best = None::<Suit>;
        for suit in Suit::ALL {
            if suit == turned_down {
                continue;
            }
            if best.is_none_or(|current| self.get(suit) > self.get(current)) {
                best = Some(suit);
            }
        }
        // At least three suits are eligible.
        best.unwrap_or_else(|| turned_down.partner())
    }
}

impl Index<Suit> for Strength {
    type Output = u16;

    fn index(&self, suit: Suit) -> &u16 {
        &self.0[suit.index()]
    }
}
