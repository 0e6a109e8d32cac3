//! The 24-card Euchre deck.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 5;

/// The cards not yet dealt or flipped this round.
///
/// Dealing draws uniformly at random without replacement, so the deck itself
/// is kept in canonical order and never shuffled up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck.
    #[must_use]
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.build();
        deck
    }

    /// Populates every suit and rank combination.
    fn build(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
    }

    /// Discards all state and rebuilds the full 24 cards.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.build();
    }

    /// Number of cards still in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards still in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes one uniformly random card.
    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.remove(index))
    }

    /// Deals five random cards onto `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards remain.
    /// The deck and hand are left untouched in that case.
    pub fn deal<R: Rng + ?Sized>(&mut self, hand: &mut Hand, rng: &mut R) -> Result<(), DealError> {
        if self.cards.len() < HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }
        for _ in 0..HAND_SIZE {
            let card = self.draw(rng).ok_or(DealError::NotEnoughCards)?;
            hand.push(card);
        }
        Ok(())
    }

    /// Removes and returns one random card to turn face up.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is empty.
    pub fn flip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DealError> {
        self.draw(rng).ok_or(DealError::NotEnoughCards)
    }

    /// Removes the given cards, used when a deal is stacked.
    ///
    /// Returns `false` (and removes nothing) if any card is missing.
    pub(crate) fn remove_all(&mut self, cards: &[Card]) -> bool {
        if !cards.iter().all(|card| self.cards.contains(card)) {
            return false;
        }
        self.cards.retain(|card| !cards.contains(card));
        true
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
