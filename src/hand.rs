//! A seat's hand and the low-card discard policy.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};

/// Rank order scanned when shedding a non-trump card.
const OFF_SUIT_DISCARD_ORDER: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Rank order scanned when every card is trump. Jacks (the bowers) go last.
const ALL_TRUMP_DISCARD_ORDER: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Jack,
];

/// Picks the card to throw away under `trump`.
///
/// Scans ranks from nine upward and returns the first card whose effective
/// suit is not trump. If every card is trump, scans nine, ten, queen, king,
/// ace, jack instead. Within a rank, the earlier card in hand order wins.
///
/// Returns `None` only when `cards` is empty; callers fall back to a random
/// card in that case.
#[must_use]
pub fn discard_index(cards: &[Card], trump: Suit) -> Option<usize> {
    let all_trump = cards.iter().all(|card| card.is_trump(trump));
    if all_trump {
        first_by_rank(cards, &ALL_TRUMP_DISCARD_ORDER, |_| true)
    } else {
        first_by_rank(cards, &OFF_SUIT_DISCARD_ORDER, |card| !card.is_trump(trump))
    }
}

/// Index of the first card matching `keep` at the earliest rank in `order`.
pub(crate) fn first_by_rank(
    cards: &[Card],
    order: &[Rank],
    keep: impl Fn(Card) -> bool,
) -> Option<usize> {
    order.iter().find_map(|&rank| {
        cards
            .iter()
            .position(|&card| card.rank == rank && keep(card))
    })
}

/// Cards held by one seat.
///
/// Five cards after the deal, six for the dealer during the pickup exchange,
/// and one fewer after every trick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Indices of the cards that follow `lead`'s effective suit.
    ///
    /// An empty result means the seat may play any card.
    #[must_use]
    pub fn legal_indices(&self, lead: Card, trump: Suit) -> Vec<usize> {
        let lead_suit = lead.effective_suit(trump);
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.effective_suit(trump) == lead_suit)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns whether the card at `index` may be played to a trick led by `lead`.
    #[must_use]
    pub fn is_legal(&self, index: usize, lead: Card, trump: Suit) -> bool {
        let legal = self.legal_indices(lead, trump);
        (legal.is_empty() && index < self.cards.len()) || legal.contains(&index)
    }

    /// Number of trump cards held.
    #[must_use]
    pub fn trump_count(&self, trump: Suit) -> usize {
        self.cards.iter().filter(|card| card.is_trump(trump)).count()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
