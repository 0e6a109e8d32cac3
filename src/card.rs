//! Card types and trump-relative ranking.

use alloc::vec::Vec;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

/// Suit colour. Two suits of the same colour share a left bower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Clubs and Spades.
    Black,
    /// Diamonds and Hearts.
    Red,
}

impl Suit {
    /// All suits, in the order used to index strength vectors.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
        }
    }

    /// Returns the suit's colour.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Spades => Color::Black,
            Self::Diamonds | Self::Hearts => Color::Red,
        }
    }

    /// Returns the other suit of the same colour.
    ///
    /// When `self` is trump, the Jack of the returned suit is the left bower.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            Self::Clubs => Self::Spades,
            Self::Spades => Self::Clubs,
            Self::Diamonds => Self::Hearts,
            Self::Hearts => Self::Diamonds,
        }
    }

    /// Single-letter code used at the input boundary (`c`, `d`, `h`, `s`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }

    /// Looks a suit up by its letter code, case-insensitively.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'c' => Some(Self::Clubs),
            'd' => Some(Self::Diamonds),
            'h' => Some(Self::Hearts),
            's' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        })
    }
}

/// Card rank. Only 9 through Ace are in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending natural order.
    pub const ALL: [Self; 6] = [
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is the Jack of the trump suit.
    #[must_use]
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// Returns whether this card is the Jack of the suit sharing trump's colour.
    #[must_use]
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit != trump && self.suit.color() == trump.color()
    }

    /// The suit this card counts as once `trump` is fixed.
    ///
    /// Equal to the printed suit except for the left bower, which belongs to
    /// the trump suit.
    #[must_use]
    pub fn effective_suit(self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }

    /// Returns whether the card is trump.
    #[must_use]
    pub fn is_trump(self, trump: Suit) -> bool {
        self.effective_suit(trump) == trump
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 24;

/// Ranking value of `card` within a trick.
///
/// `lead_suit` is the effective suit of the card that opened the trick.
/// Trump cards score 7 (nine) through 13 (right bower); cards of the led suit
/// score 1 (nine) through 6 (ace); everything else scores 0. The trump branch
/// is checked first, so the Jack that becomes the left bower is never ranked
/// with its printed suit.
#[must_use]
pub fn trick_point(card: Card, trump: Suit, lead_suit: Suit) -> u8 {
    let suit = card.effective_suit(trump);
    if suit == trump {
        if card.is_right_bower(trump) {
            return 13;
        }
        if card.is_left_bower(trump) {
            return 12;
        }
        return match card.rank {
            Rank::Ace => 11,
            Rank::King => 10,
            Rank::Queen => 9,
            Rank::Ten => 8,
            Rank::Nine => 7,
            // Both trump-coloured jacks are handled above.
            Rank::Jack => 0,
        };
    }

    if suit == lead_suit {
        return match card.rank {
            Rank::Ace => 6,
            Rank::King => 5,
            Rank::Queen => 4,
            Rank::Jack => 3,
            Rank::Ten => 2,
            Rank::Nine => 1,
        };
    }

    0
}

/// Computes trick points for every card in `cards` against `lead`.
///
/// Re-run at the start of each trick; the result depends only on its inputs.
#[must_use]
pub fn assign_trick_points(cards: &[Card], trump: Suit, lead: Card) -> Vec<u8> {
    let lead_suit = lead.effective_suit(trump);
    cards
        .iter()
        .map(|&card| trick_point(card, trump, lead_suit))
        .collect()
}
