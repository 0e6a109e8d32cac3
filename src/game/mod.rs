//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::bidding::BidState;
use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::{Deck, HAND_SIZE};
use crate::error::{DealError, StepError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Event;
use crate::seat::{Seat, Team};
use crate::strength::Strength;
use crate::trick::Trick;

mod bid;
mod play;
mod score;
pub mod state;

pub use play::TRICKS_PER_ROUND;
pub use score::score_round;
pub use state::{Expected, GameState, Turn};

/// A Euchre game engine that owns the deck, the seats and the score.
///
/// The engine never blocks. [`Game::turn`] reports which seat must act next
/// and what it must decide; automated seats are advanced with
/// [`Game::step`] or [`Game::run_automated`], while the human seat answers
/// through [`Game::bid`], [`Game::discard`] and [`Game::play`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Cards not dealt or flipped this round.
    deck: Deck,
    /// Dealer for the current or next round.
    dealer: Seat,
    /// Each seat's hand, indexed by [`Seat::index`].
    hands: [Hand; 4],
    /// Bidding strength per seat, cleared once trump is fixed.
    strengths: [Option<Strength>; 4],
    /// The card flipped after the deal.
    flipped: Option<Card>,
    /// Whether the flipped card is still face up on the table.
    flip_on_table: bool,
    /// Cards the dealer threw away after picking up.
    discards: Vec<Card>,
    /// Trump for this round, written once.
    trump: Option<Suit>,
    /// Seat that named trump, written once.
    caller: Option<Seat>,
    /// Trick in progress.
    trick: Option<Trick>,
    /// Completed tricks this round.
    tricks: Vec<Trick>,
    /// Tricks won this round per seat.
    tricks_won: [u8; 4],
    /// Game points per team.
    points: [u8; 2],
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The first dealer is drawn at random.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use euchre_engine::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self::with_dealer(options, seed, Seat::One);
        game.dealer = Seat::ALL[game.rng.random_range(0..Seat::ALL.len())];
        game
    }

    /// Creates a new game with a fixed first dealer.
    #[must_use]
    pub fn with_dealer(options: GameOptions, seed: u64, dealer: Seat) -> Self {
        Self {
            options,
            state: GameState::WaitingForDeal,
            deck: Deck::new(),
            dealer,
            hands: Default::default(),
            strengths: [None; 4],
            flipped: None,
            flip_on_table: false,
            discards: Vec::new(),
            trump: None,
            caller: None,
            trick: None,
            tricks: Vec::new(),
            tricks_won: [0; 4],
            points: [0; 2],
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    const fn ensure_can_deal(&self) -> Result<(), DealError> {
        match self.state {
            GameState::WaitingForDeal => Ok(()),
            GameState::GameOver => Err(DealError::GameOver),
            _ => Err(DealError::InvalidState),
        }
    }

    /// Clears everything scoped to a single round.
    fn reset_round(&mut self) {
        self.deck.reset();
        for hand in &mut self.hands {
            hand.clear();
        }
        self.strengths = [None; 4];
        self.flipped = None;
        self.flip_on_table = false;
        self.discards.clear();
        self.trump = None;
        self.caller = None;
        self.trick = None;
        self.tricks.clear();
        self.tricks_won = [0; 4];
    }

    /// Turns `flipped` up, evaluates every hand and opens bidding.
    fn open_bidding(&mut self, flipped: Card) {
        self.flipped = Some(flipped);
        self.flip_on_table = true;
        for seat in Seat::ALL {
            self.strengths[seat.index()] = Some(Strength::evaluate(self.hands[seat.index()].cards()));
        }
        self.state = GameState::Bidding(BidState::opening(self.dealer));
        info!(
            dealer = self.dealer.number(),
            flipped = %flipped,
            "round dealt"
        );
    }

    /// Deals a new round: five random cards to each seat and one flipped card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the game is over.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        self.reset_round();

        for seat in Seat::ALL {
            self.deck.deal(&mut self.hands[seat.index()], &mut self.rng)?;
        }
        let flipped = self.deck.flip(&mut self.rng)?;
        self.open_bidding(flipped);
        Ok(())
    }

    /// Deals a round with fixed hands and flipped card, indexed by [`Seat::index`].
    ///
    /// The three cards not named stay in the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeal`] if any card is repeated, or a state
    /// error if a round is already in progress or the game is over.
    pub fn start_round_with(
        &mut self,
        hands: [[Card; HAND_SIZE]; 4],
        flipped: Card,
    ) -> Result<(), DealError> {
        self.ensure_can_deal()?;

        let mut dealt: Vec<Card> = hands.iter().flatten().copied().collect();
        dealt.push(flipped);
        let distinct = dealt
            .iter()
            .enumerate()
            .all(|(index, card)| !dealt[index + 1..].contains(card));
        if !distinct {
            return Err(DealError::InvalidDeal);
        }

        self.reset_round();
        if !self.deck.remove_all(&dealt) {
            return Err(DealError::InvalidDeal);
        }
        for (hand, cards) in self.hands.iter_mut().zip(hands) {
            *hand = Hand::from_cards(cards.to_vec());
        }
        self.open_bidding(flipped);
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat due to act and the decision it owes, if any.
    #[must_use]
    pub fn turn(&self) -> Option<Turn> {
        match self.state {
            GameState::Bidding(bid) => {
                let expected = match bid {
                    BidState::AwaitOrderUp { .. } => Expected::OrderUp,
                    BidState::DealerMayPickUp => Expected::PickUp,
                    BidState::AwaitSuitCall { .. } => Expected::CallSuit,
                    BidState::DealerMustCall => Expected::MustCall,
                    BidState::TrumpFixed { .. } => return None,
                };
                bid.seat(self.dealer).map(|seat| Turn { seat, expected })
            }
            GameState::Discarding => Some(Turn {
                seat: self.dealer,
                expected: Expected::Discard,
            }),
            GameState::Playing => {
                let trick = self.trick.as_ref()?;
                let seat = trick.next_seat()?;
                let expected = if trick.is_empty() {
                    Expected::Lead
                } else {
                    Expected::Follow
                };
                Some(Turn { seat, expected })
            }
            GameState::WaitingForDeal | GameState::RoundOver | GameState::GameOver => None,
        }
    }

    /// Returns whether `seat` is answered by the human input boundary.
    #[must_use]
    pub fn is_human(&self, seat: Seat) -> bool {
        self.options.human_seat == Some(seat)
    }

    /// Performs the pending decision for an automated seat.
    ///
    /// Returns no events if nobody is due to act or the seat to act is human.
    ///
    /// # Errors
    ///
    /// Returns an error if the automated decision is rejected, which indicates
    /// a broken invariant rather than a recoverable condition.
    pub fn step(&mut self) -> Result<Vec<Event>, StepError> {
        let Some(turn) = self.turn() else {
            return Ok(Vec::new());
        };
        if self.is_human(turn.seat) {
            return Ok(Vec::new());
        }

        match turn.expected {
            Expected::OrderUp | Expected::PickUp | Expected::CallSuit | Expected::MustCall => {
                let decision = self.automated_bid(turn.seat);
                Ok(alloc::vec![self.bid(turn.seat, decision)?])
            }
            Expected::Discard => {
                let index = self.automated_discard();
                Ok(alloc::vec![self.discard(turn.seat, index)?])
            }
            Expected::Lead | Expected::Follow => {
                let index = self.automated_play(turn.seat);
                Ok(self.play(turn.seat, index)?)
            }
        }
    }

    /// Steps automated seats until the human must act or the round is over.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Game::step`].
    pub fn run_automated(&mut self) -> Result<Vec<Event>, StepError> {
        let mut events = Vec::new();
        loop {
            let batch = self.step()?;
            if batch.is_empty() {
                return Ok(events);
            }
            events.extend(batch);
        }
    }

    /// Random card position, used when a policy finds nothing to pick.
    fn random_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Returns the dealer for the current or next round.
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns the card flipped this round.
    #[must_use]
    pub const fn flipped(&self) -> Option<Card> {
        self.flipped
    }

    /// Returns trump, once fixed.
    #[must_use]
    pub const fn trump(&self) -> Option<Suit> {
        self.trump
    }

    /// Returns the seat that named trump, once fixed.
    #[must_use]
    pub const fn caller(&self) -> Option<Seat> {
        self.caller
    }

    /// Returns a seat's hand.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// Returns a seat's bidding strength; `None` once trump is fixed.
    #[must_use]
    pub const fn strength(&self, seat: Seat) -> Option<Strength> {
        self.strengths[seat.index()]
    }

    /// Returns the trick in progress.
    #[must_use]
    pub const fn current_trick(&self) -> Option<&Trick> {
        self.trick.as_ref()
    }

    /// Returns the tricks completed this round.
    #[must_use]
    pub fn completed_tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// Returns the cards discarded by the dealer this round.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns the number of cards still in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the tricks a seat has won this round.
    #[must_use]
    pub const fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks_won[seat.index()]
    }

    /// Returns the tricks a team has won this round.
    #[must_use]
    pub const fn team_tricks(&self, team: Team) -> u8 {
        let [a, b] = team.seats();
        self.tricks_won[a.index()] + self.tricks_won[b.index()]
    }

    /// Returns a team's game points.
    #[must_use]
    pub const fn points(&self, team: Team) -> u8 {
        self.points[team.index()]
    }

    /// Returns the team that has reached the target score, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|team| self.points(*team) >= self.options.points_to_win)
    }

    /// Counts every card the round accounts for.
    ///
    /// Deck, hands, the flipped card while it is face up, discards and played
    /// cards. Always [`DECK_SIZE`] once a round has been dealt.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(Hand::len).sum();
        let played: usize = self.tricks.iter().map(Trick::len).sum::<usize>()
            + self.trick.as_ref().map_or(0, Trick::len);
        self.deck.remaining()
            + in_hands
            + usize::from(self.flip_on_table)
            + self.discards.len()
            + played
    }

    /// Returns whether the round accounts for all [`DECK_SIZE`] cards.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.card_count() == DECK_SIZE
    }
}
