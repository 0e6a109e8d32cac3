//! Card-play heuristics for automated seats.
//!
//! Following is split in two: [`Situation`] condenses the table into the
//! handful of facts the heuristic looks at, and [`Situation::choice`] is a
//! flat decision table over those facts. [`follow`] then turns the chosen
//! branch into a card.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit, trick_point};
use crate::hand::{discard_index, first_by_rank};
use crate::seat::Seat;
use crate::trick::{PLAYS_PER_TRICK, Trick};

/// Lead order for non-trump cards, highest first.
const LEAD_ORDER: [Rank; 6] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
];

/// Lead order once only trump is left, highest first.
const TRUMP_LEAD_ORDER: [Rank; 6] = [
    Rank::Jack,
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Ten,
    Rank::Nine,
];

/// Card an automated seat leads with.
///
/// The highest non-trump card by natural rank; if the hand is all trump, the
/// highest trump with the bowers on top (right before left). Returns `None`
/// only for an empty hand.
#[must_use]
pub fn lead_index(cards: &[Card], trump: Suit) -> Option<usize> {
    if cards.len() == 1 {
        return Some(0);
    }
    first_by_rank(cards, &LEAD_ORDER, |card| !card.is_trump(trump))
        .or_else(|| cards.iter().position(|card| card.is_right_bower(trump)))
        .or_else(|| first_by_rank(cards, &TRUMP_LEAD_ORDER, |_| true))
}

/// Branch taken by an automated seat that is not leading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowChoice {
    /// Only one card left.
    OnlyCard,
    /// Follow suit with the best card, taking the lead.
    Overtake,
    /// Follow suit with the worst card.
    Duck,
    /// Void in the led suit; trump with the best trump.
    Ruff,
    /// Void in the led suit; trump with the cheapest trump that still wins.
    ConserveRuff,
    /// Shed a low card.
    Discard,
}

/// Facts an automated follower decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Situation {
    /// Cards left in hand.
    pub hand_size: usize,
    /// Whether the seat holds a card of the led suit.
    pub can_follow: bool,
    /// Whether the best candidate (led suit if following, else trump)
    /// outranks the current best play.
    pub can_beat: bool,
    /// Whether this seat plays the fourth card.
    pub last_to_act: bool,
    /// Whether the seat's partner currently holds the trick.
    pub partner_winning: bool,
    /// Trump cards held.
    pub trump_count: usize,
    /// Whether the seat that named trump has already played to this trick.
    pub caller_played: bool,
}

impl Situation {
    /// The branch to take.
    #[must_use]
    pub const fn choice(&self) -> FollowChoice {
        let protect_partner = self.last_to_act && self.partner_winning;
        match (
            self.hand_size,
            self.can_follow,
            self.can_beat,
            protect_partner,
            self.trump_count,
            self.caller_played,
        ) {
            (1, ..) => FollowChoice::OnlyCard,
            (_, true, true, false, _, _) => FollowChoice::Overtake,
            (_, true, _, _, _, _) => FollowChoice::Duck,
            (_, false, _, _, 0, _) | (_, false, false, _, _, _) | (_, false, _, true, _, _) => {
                FollowChoice::Discard
            }
            (_, false, true, false, 2.., false) => FollowChoice::ConserveRuff,
            (_, false, true, false, _, _) => FollowChoice::Ruff,
        }
    }
}

/// What an automated follower plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowDecision {
    /// Branch of the heuristic that was taken.
    pub choice: FollowChoice,
    /// Index of the card to play; `None` only if the hand is empty.
    pub index: Option<usize>,
}

/// Everything an automated follower can see.
#[derive(Debug, Clone, Copy)]
pub struct FollowView<'a> {
    /// The follower's cards.
    pub cards: &'a [Card],
    /// Trump this round.
    pub trump: Suit,
    /// The trick in progress, with at least the lead played.
    pub trick: &'a Trick,
    /// The follower.
    pub seat: Seat,
    /// The seat that named trump.
    pub caller: Seat,
}

impl FollowView<'_> {
    /// Condenses the view into a [`Situation`].
    #[must_use]
    pub fn situation(&self) -> Situation {
        let (lead_suit, current_best, holder) = self.standing();
        let points = self.points(lead_suit);

        let following = self.indices(|card| card.effective_suit(self.trump) == lead_suit);
        let trumps = self.indices(|card| card.is_trump(self.trump));
        let candidates = if following.is_empty() { &trumps } else { &following };
        let can_beat = candidates.iter().any(|&index| points[index] > current_best);

        Situation {
            hand_size: self.cards.len(),
            can_follow: !following.is_empty(),
            can_beat,
            last_to_act: self.trick.len() == PLAYS_PER_TRICK - 1,
            partner_winning: holder == Some(self.seat.partner()),
            trump_count: trumps.len(),
            caller_played: self.trick.has_played(self.caller),
        }
    }

    /// Led suit, best trick points so far and the seat holding them.
    fn standing(&self) -> (Suit, u8, Option<Seat>) {
        let lead_suit = self
            .trick
            .lead()
            .map_or(self.trump, |lead| lead.effective_suit(self.trump));
        match self.trick.winning(self.trump) {
            Some((play, point)) => (lead_suit, point, Some(play.seat)),
            None => (lead_suit, 0, None),
        }
    }

    fn points(&self, lead_suit: Suit) -> Vec<u8> {
        self.cards
            .iter()
            .map(|&card| trick_point(card, self.trump, lead_suit))
            .collect()
    }

    fn indices(&self, keep: impl Fn(Card) -> bool) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|&(_, &card)| keep(card))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Index of the highest-pointed card among `indices`, first one on ties.
fn best_of(indices: &[usize], points: &[u8]) -> Option<usize> {
    indices
        .iter()
        .copied()
        .reduce(|best, index| if points[index] > points[best] { index } else { best })
}

/// Index of the lowest-pointed card among `indices`, first one on ties.
fn worst_of(indices: &[usize], points: &[u8]) -> Option<usize> {
    indices
        .iter()
        .copied()
        .reduce(|worst, index| if points[index] < points[worst] { index } else { worst })
}

/// Chooses the card an automated seat plays when it is not leading.
#[must_use]
pub fn follow(view: &FollowView<'_>) -> FollowDecision {
    let situation = view.situation();
    let choice = situation.choice();
    let (lead_suit, current_best, _) = view.standing();
    let points = view.points(lead_suit);
    let trump = view.trump;

    let index = match choice {
        FollowChoice::OnlyCard => Some(0),
        FollowChoice::Overtake | FollowChoice::Duck => {
            let following = view.indices(|card| card.effective_suit(trump) == lead_suit);
            if choice == FollowChoice::Overtake {
                best_of(&following, &points)
            } else {
                worst_of(&following, &points)
            }
        }
        FollowChoice::Ruff => best_of(&view.indices(|card| card.is_trump(trump)), &points),
        FollowChoice::ConserveRuff => {
            let winners: Vec<usize> = view
                .indices(|card| card.is_trump(trump))
                .into_iter()
                .filter(|&index| points[index] > current_best)
                .collect();
            worst_of(&winners, &points)
        }
        FollowChoice::Discard => discard_index(view.cards, trump),
    };

    FollowDecision { choice, index }
}
