//! Property tests over seeded deals and full automated rounds.

use std::collections::HashSet;

use euchre_engine::{
    BidDecision, BidState, BidTable, Card, DECK_SIZE, Deck, Game, GameOptions, GameState, Rank,
    Seat, Strength, Suit, TRICKS_PER_ROUND, Trick, trick_point,
};
use proptest::prelude::*;

fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

fn seat() -> impl Strategy<Value = Seat> {
    prop_oneof![
        Just(Seat::One),
        Just(Seat::Two),
        Just(Seat::Three),
        Just(Seat::Four),
    ]
}

/// Four distinct cards from the 24-card deck.
fn four_cards() -> impl Strategy<Value = Vec<Card>> {
    Just(Deck::new().cards().to_vec())
        .prop_shuffle()
        .prop_map(|cards| cards[..4].to_vec())
}

fn automated(threshold: u16) -> GameOptions {
    GameOptions::default()
        .with_human_seat(None)
        .with_call_threshold(threshold)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every deal hands out 20 distinct cards plus the flip, leaving three.
    #[test]
    fn prop_deal_is_a_partition(seed in any::<u64>(), dealer in seat()) {
        let mut game = Game::with_dealer(automated(30), seed, dealer);
        game.start_round().unwrap();

        let mut seen: HashSet<Card> = HashSet::new();
        for seat in Seat::ALL {
            prop_assert_eq!(game.hand(seat).len(), 5);
            seen.extend(game.hand(seat).cards().iter().copied());
        }
        seen.insert(game.flipped().unwrap());
        prop_assert_eq!(seen.len(), 21);
        prop_assert_eq!(game.cards_remaining(), 3);
        prop_assert_eq!(game.card_count(), DECK_SIZE);
    }

    /// A full automated round keeps all 24 cards accounted for at every step
    /// and ends with exactly five tricks.
    #[test]
    fn prop_round_conserves_cards(
        seed in any::<u64>(),
        dealer in seat(),
        threshold in 0u16..60,
    ) {
        let mut game = Game::with_dealer(automated(threshold), seed, dealer);
        game.start_round().unwrap();

        let mut steps = 0;
        while !game.step().unwrap().is_empty() {
            steps += 1;
            prop_assert!(game.is_consistent());
            for seat in Seat::ALL {
                let expected_max = if game.state() == GameState::Discarding && seat == dealer {
                    6
                } else {
                    5
                };
                prop_assert!(game.hand(seat).len() <= expected_max);
            }
            prop_assert!(steps <= 8 + 1 + 20);
        }

        prop_assert_eq!(game.state(), GameState::RoundOver);
        prop_assert_eq!(game.completed_tricks().len(), TRICKS_PER_ROUND);
        let total: u8 = Seat::ALL.iter().map(|seat| game.tricks_won(*seat)).sum();
        prop_assert_eq!(usize::from(total), TRICKS_PER_ROUND);
        prop_assert!(game.trump().is_some());
        prop_assert!(game.caller().is_some());
        prop_assert!(game.discards().len() <= 1);
    }

    /// Automated seats never renege: a seat that does not follow the led
    /// suit holds no card of that suit for the rest of the round.
    #[test]
    fn prop_automated_play_follows_suit(seed in any::<u64>(), dealer in seat()) {
        let mut game = Game::with_dealer(automated(30), seed, dealer);
        game.start_round().unwrap();
        game.run_automated().unwrap();
        let trump = game.trump().unwrap();
        let tricks = game.completed_tricks();

        for (number, trick) in tricks.iter().enumerate() {
            let lead_suit = trick.lead().unwrap().effective_suit(trump);
            for play in &trick.plays()[1..] {
                if play.card.effective_suit(trump) == lead_suit {
                    continue;
                }
                let later = tricks[number + 1..]
                    .iter()
                    .flat_map(Trick::plays)
                    .filter(|later| later.seat == play.seat);
                for held in later {
                    prop_assert_ne!(held.card.effective_suit(trump), lead_suit);
                }
            }
            prop_assert_eq!(trick.winner(trump), Some(trick.winning(trump).unwrap().0.seat));
        }
    }

    /// Replaying the same seed reproduces the same round exactly.
    #[test]
    fn prop_seeded_rounds_are_deterministic(seed in any::<u64>()) {
        let run = || {
            let mut game = Game::new(automated(30), seed);
            game.start_round().unwrap();
            let events = game.run_automated().unwrap();
            (events, game.finish_round().unwrap())
        };
        prop_assert_eq!(run(), run());
    }

    /// The winning card is the highest trick point, and it is trump or of
    /// the led suit.
    #[test]
    fn prop_trick_winner_is_highest(cards in four_cards(), trump in suit(), leader in seat()) {
        let mut trick = Trick::new(leader);
        for (seat, card) in leader.ring().into_iter().zip(&cards) {
            trick.push(seat, *card);
        }
        let lead_suit = cards[0].effective_suit(trump);
        let (winning, point) = trick.winning(trump).unwrap();

        for card in &cards {
            prop_assert!(trick_point(*card, trump, lead_suit) <= point);
        }
        let suit = winning.card.effective_suit(trump);
        prop_assert!(suit == trump || suit == lead_suit);
        // Distinct cards never tie above zero.
        let top = cards
            .iter()
            .filter(|card| trick_point(**card, trump, lead_suit) == point)
            .count();
        prop_assert_eq!(top, 1);
    }

    /// Strength evaluation and suit choice depend only on the hand.
    #[test]
    fn prop_strength_is_pure(cards in four_cards(), turned_down in suit()) {
        let first = Strength::evaluate(&cards);
        prop_assert_eq!(first, Strength::evaluate(&cards));
        prop_assert_ne!(first.best_call(turned_down), turned_down);

        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(first, Strength::evaluate(&reversed));
    }

    /// Passing all the way round always ends with the dealer forced to call,
    /// after exactly seven passes.
    #[test]
    fn prop_bidding_terminates(dealer in seat(), flipped_suit in suit(), call in suit()) {
        let table = BidTable { dealer, flipped: Card::new(flipped_suit, Rank::Nine) };
        let mut state = BidState::opening(dealer);
        let mut passes = 0;
        while state != BidState::DealerMustCall {
            state = state.next(table, BidDecision::Pass).unwrap();
            passes += 1;
            prop_assert!(passes <= 7);
        }
        prop_assert_eq!(passes, 7);

        let fixed = state.next(table, BidDecision::Call(call));
        if call == flipped_suit {
            prop_assert!(fixed.is_err());
        } else {
            prop_assert_eq!(
                fixed,
                Ok(BidState::TrumpFixed { trump: call, caller: dealer, picked_up: false })
            );
        }
    }
}
