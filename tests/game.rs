//! Game integration tests.

use euchre_engine::{
    BidDecision, BidError, BidState, Card, DECK_SIZE, DealError, Event, Expected, Game, GameOptions,
    GameState, PlayError, Rank, ScoreError, ScoreKind, Seat, StepError, Suit, TRICKS_PER_ROUND,
    Team, Turn, score_round,
};
use tracing_subscriber::EnvFilter;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn automated() -> GameOptions {
    GameOptions::default().with_human_seat(None)
}

/// Seat 1 holds both red bowers and the top diamonds; nine of diamonds is
/// turned up with seat 4 dealing.
fn stacked_deal() -> ([[Card; 5]; 4], Card) {
    let hands = [
        [
            card(Suit::Diamonds, Rank::Jack),
            card(Suit::Hearts, Rank::Jack),
            card(Suit::Diamonds, Rank::Ace),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Diamonds, Rank::Queen),
        ],
        [
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Clubs, Rank::King),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Hearts, Rank::Nine),
        ],
        [
            card(Suit::Spades, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Spades, Rank::Queen),
            card(Suit::Spades, Rank::Jack),
            card(Suit::Hearts, Rank::Ace),
        ],
        [
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Spades, Rank::Ten),
        ],
    ];
    (hands, card(Suit::Diamonds, Rank::Nine))
}

fn stacked_game(options: GameOptions) -> Game {
    let mut game = Game::with_dealer(options, 7, Seat::Four);
    let (hands, flipped) = stacked_deal();
    game.start_round_with(hands, flipped).unwrap();
    game
}

#[test]
fn options_builder_sets_fields() {
    let defaults = GameOptions::default();
    assert_eq!(defaults.call_threshold, 30);
    assert_eq!(defaults.human_seat, Some(Seat::One));
    assert_eq!(defaults.points_to_win, 11);

    let options = GameOptions::default()
        .with_call_threshold(40)
        .with_human_seat(Some(Seat::Three))
        .with_points_to_win(5);
    assert_eq!(options.call_threshold, 40);
    assert_eq!(options.human_seat, Some(Seat::Three));
    assert_eq!(options.points_to_win, 5);
}

#[test]
fn round_scoring() {
    let march = score_round(Team::One, 5);
    assert_eq!((march.team, march.points, march.kind), (Team::One, 2, ScoreKind::March));

    for tricks in [3, 4] {
        let made = score_round(Team::Two, tricks);
        assert_eq!((made.team, made.points, made.kind), (Team::Two, 1, ScoreKind::Made));
    }

    for tricks in 0..3 {
        let euchred = score_round(Team::One, tricks);
        assert_eq!(
            (euchred.team, euchred.points, euchred.kind),
            (Team::Two, 2, ScoreKind::Euchred)
        );
    }
}

#[test]
fn stacked_round_is_marched_by_the_caller() {
    init_tracing();
    let mut game = stacked_game(automated());

    assert_eq!(game.state(), GameState::Bidding(BidState::opening(Seat::Four)));
    assert_eq!(
        game.turn(),
        Some(Turn {
            seat: Seat::One,
            expected: Expected::OrderUp,
        })
    );
    assert_eq!(game.cards_remaining(), 3);
    assert!(game.is_consistent());
    assert_eq!(game.strength(Seat::One).map(|s| s[Suit::Diamonds]), Some(58));

    let events = game.run_automated().unwrap();
    assert_eq!(
        events[..2],
        [
            Event::OrderedUp {
                seat: Seat::One,
                dealer: Seat::Four,
                card: card(Suit::Diamonds, Rank::Nine),
            },
            Event::Discarded {
                seat: Seat::Four,
                card: card(Suit::Clubs, Rank::Nine),
            },
        ]
    );
    assert_eq!(events.len(), 2 + 4 * TRICKS_PER_ROUND + TRICKS_PER_ROUND);
    assert_eq!(
        events[2],
        Event::Played {
            seat: Seat::One,
            card: card(Suit::Diamonds, Rank::Jack),
        }
    );

    let won: Vec<(Seat, u8)> = events
        .iter()
        .filter_map(|event| match *event {
            Event::TrickWon { seat, trick_no, .. } => Some((seat, trick_no)),
            _ => None,
        })
        .collect();
    assert_eq!(
        won,
        [
            (Seat::One, 1),
            (Seat::One, 2),
            (Seat::One, 3),
            (Seat::One, 4),
            (Seat::One, 5),
        ]
    );

    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.turn(), None);
    assert_eq!(game.trump(), Some(Suit::Diamonds));
    assert_eq!(game.caller(), Some(Seat::One));
    assert_eq!(game.discards(), [card(Suit::Clubs, Rank::Nine)]);
    assert_eq!(game.tricks_won(Seat::One), 5);
    assert_eq!(game.team_tricks(Team::One), 5);
    assert!(Seat::ALL.iter().all(|seat| game.hand(*seat).is_empty()));
    assert_eq!(game.completed_tricks().len(), TRICKS_PER_ROUND);
    assert!(game.is_consistent());

    let result = game.finish_round().unwrap();
    assert_eq!(result.trump, Suit::Diamonds);
    assert_eq!(result.caller, Seat::One);
    assert_eq!(result.tricks, [5, 0]);
    assert_eq!(result.score.kind, ScoreKind::March);
    assert_eq!(result.points, [2, 0]);
    assert_eq!(result.winner, None);

    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.dealer(), Seat::One);
    assert_eq!(game.finish_round(), Err(ScoreError::InvalidState));
}

#[test]
fn every_step_accounts_for_all_cards() {
    let mut game = stacked_game(automated());

    let mut steps = 0;
    loop {
        let events = game.step().unwrap();
        if events.is_empty() {
            break;
        }
        steps += 1;
        assert_eq!(game.card_count(), DECK_SIZE);
        if game.state() == GameState::Discarding {
            assert_eq!(game.hand(Seat::Four).len(), 6);
        }
    }
    // Order up, discard, twenty plays.
    assert_eq!(steps, 22);
}

#[test]
fn human_is_asked_and_validated_during_bidding() {
    let mut game = stacked_game(GameOptions::default());

    assert!(game.is_human(Seat::One));
    assert_eq!(game.step(), Ok(Vec::new()));
    assert_eq!(game.bid(Seat::Two, BidDecision::Pass), Err(BidError::NotYourTurn));
    assert_eq!(
        game.bid(Seat::One, BidDecision::Call(Suit::Clubs)),
        Err(BidError::InvalidDecision)
    );
    assert_eq!(
        game.bid(Seat::One, BidDecision::Pass),
        Ok(Event::Passed { seat: Seat::One })
    );

    // Nobody else is strong enough, so the human is asked again in the
    // second pass.
    let events = game.run_automated().unwrap();
    assert_eq!(
        events,
        [
            Event::Passed { seat: Seat::Two },
            Event::Passed { seat: Seat::Three },
            Event::Passed { seat: Seat::Four },
        ]
    );
    assert_eq!(
        game.turn(),
        Some(Turn {
            seat: Seat::One,
            expected: Expected::CallSuit,
        })
    );

    let before = game.clone();
    assert_eq!(
        game.bid(Seat::One, BidDecision::Call(Suit::Diamonds)),
        Err(BidError::TurnedDownSuit)
    );
    assert_eq!(game.state(), before.state());

    assert_eq!(
        game.bid(Seat::One, BidDecision::Call(Suit::Hearts)),
        Ok(Event::TrumpNamed {
            seat: Seat::One,
            trump: Suit::Hearts,
        })
    );
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.trump(), Some(Suit::Hearts));
    assert_eq!(game.strength(Seat::One), None);
    // The turned-down card stays on the table.
    assert_eq!(game.hand(Seat::Four).len(), 5);
    assert!(game.is_consistent());
    assert_eq!(
        game.turn(),
        Some(Turn {
            seat: Seat::One,
            expected: Expected::Lead,
        })
    );

    // Lead the right bower.
    let events = game.play(Seat::One, 1).unwrap();
    assert_eq!(
        events,
        [Event::Played {
            seat: Seat::One,
            card: card(Suit::Hearts, Rank::Jack),
        }]
    );
    let events = game.run_automated().unwrap();
    assert_eq!(
        events,
        [
            Event::Played {
                seat: Seat::Two,
                card: card(Suit::Hearts, Rank::Nine),
            },
            Event::Played {
                seat: Seat::Three,
                card: card(Suit::Hearts, Rank::Ace),
            },
            Event::Played {
                seat: Seat::Four,
                card: card(Suit::Clubs, Rank::Nine),
            },
            Event::TrickWon {
                seat: Seat::One,
                card: card(Suit::Hearts, Rank::Jack),
                trick_no: 1,
            },
        ]
    );
    assert_eq!(game.turn().map(|turn| turn.seat), Some(Seat::One));
}

#[test]
fn human_dealer_discards_and_must_follow_suit() {
    let mut game = stacked_game(GameOptions::default().with_human_seat(Some(Seat::Four)));

    let events = game.run_automated().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(
        game.turn(),
        Some(Turn {
            seat: Seat::Four,
            expected: Expected::Discard,
        })
    );
    assert_eq!(game.hand(Seat::Four).len(), 6);
    assert!(game.is_consistent());

    assert_eq!(game.discard(Seat::One, 0), Err(BidError::NotYourTurn));
    assert_eq!(game.discard(Seat::Four, 6), Err(BidError::CardNotFound));
    assert_eq!(
        game.discard(Seat::Four, 1),
        Ok(Event::Discarded {
            seat: Seat::Four,
            card: card(Suit::Clubs, Rank::Nine),
        })
    );
    assert!(game.is_consistent());
    assert_eq!(game.discard(Seat::Four, 0), Err(BidError::InvalidState));
    assert_eq!(game.bid(Seat::Four, BidDecision::Pass), Err(BidError::InvalidState));

    // Seat 1 leads the right bower, seats 2 and 3 are void.
    let events = game.run_automated().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(
        game.turn(),
        Some(Turn {
            seat: Seat::Four,
            expected: Expected::Follow,
        })
    );

    // Hand is now 10♦, 10♣, 9♠, 10♠, 9♦.
    assert_eq!(game.legal_plays(Seat::Four), vec![0, 4]);
    assert!(game.legal_plays(Seat::One).is_empty());
    assert_eq!(game.play(Seat::Four, 1), Err(PlayError::MustFollowSuit));
    assert_eq!(game.play(Seat::Four, 9), Err(PlayError::CardNotFound));
    assert_eq!(game.play(Seat::One, 0), Err(PlayError::NotYourTurn));
    assert_eq!(game.hand(Seat::Four).len(), 5);

    let events = game.play(Seat::Four, 4).unwrap();
    assert_eq!(
        events,
        [
            Event::Played {
                seat: Seat::Four,
                card: card(Suit::Diamonds, Rank::Nine),
            },
            Event::TrickWon {
                seat: Seat::One,
                card: card(Suit::Diamonds, Rank::Jack),
                trick_no: 1,
            },
        ]
    );
    assert_eq!(game.completed_tricks().len(), 1);
    assert!(game.is_consistent());
    assert_eq!(game.current_trick().map(|trick| trick.leader()), Some(Seat::One));
}

#[test]
fn actions_out_of_phase_are_rejected() {
    let mut game = Game::with_dealer(automated(), 3, Seat::Two);

    assert_eq!(game.state(), GameState::WaitingForDeal);
    assert_eq!(game.turn(), None);
    assert_eq!(game.bid(Seat::Three, BidDecision::Pass), Err(BidError::InvalidState));
    assert_eq!(game.play(Seat::Three, 0), Err(PlayError::InvalidState));
    assert_eq!(game.finish_round(), Err(ScoreError::InvalidState));
    assert_eq!(game.step(), Ok(Vec::new()));

    game.start_round().unwrap();
    assert_eq!(game.start_round(), Err(DealError::InvalidState));
    assert_eq!(game.play(Seat::Three, 0), Err(PlayError::InvalidState));
    assert_eq!(game.discard(Seat::Two, 0), Err(BidError::InvalidState));
}

#[test]
fn stacked_deal_rejects_repeated_cards() {
    let mut game = Game::with_dealer(automated(), 1, Seat::One);
    let (mut hands, flipped) = stacked_deal();
    hands[2][0] = hands[0][0];

    assert_eq!(game.start_round_with(hands, flipped), Err(DealError::InvalidDeal));
    assert_eq!(game.state(), GameState::WaitingForDeal);

    let (hands, _) = stacked_deal();
    assert_eq!(
        game.start_round_with(hands, card(Suit::Diamonds, Rank::Jack)),
        Err(DealError::InvalidDeal)
    );
}

#[test]
fn seeded_rounds_deal_five_cards_each() {
    let mut game = Game::new(automated(), 2024);
    game.start_round().unwrap();

    for seat in Seat::ALL {
        assert_eq!(game.hand(seat).len(), 5);
    }
    assert_eq!(game.cards_remaining(), 3);
    assert!(game.flipped().is_some());
    assert!(game.is_consistent());
    assert!(matches!(game.state(), GameState::Bidding(_)));
}

#[test]
fn same_seed_plays_same_game() {
    let play = |seed| {
        let mut game = Game::new(automated(), seed);
        let mut log = Vec::new();
        game.start_round().unwrap();
        log.extend(game.run_automated().unwrap());
        let result = game.finish_round().unwrap();
        (log, result)
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn automated_game_runs_to_a_winner() {
    init_tracing();
    let mut game = Game::new(automated(), 31);
    let mut rounds = 0;

    let winner = loop {
        game.start_round().unwrap();
        let dealer = game.dealer();
        game.run_automated().unwrap();

        assert_eq!(game.state(), GameState::RoundOver);
        let tricks: u8 = Seat::ALL.iter().map(|seat| game.tricks_won(*seat)).sum();
        assert_eq!(usize::from(tricks), TRICKS_PER_ROUND);
        assert!(game.is_consistent());

        let result = game.finish_round().unwrap();
        assert_eq!(result.tricks[0] + result.tricks[1], 5);
        assert_eq!(game.dealer(), dealer.left());
        rounds += 1;

        if let Some(winner) = result.winner {
            break winner;
        }
    };

    assert!(rounds <= 21);
    assert_eq!(game.state(), GameState::GameOver);
    assert!(game.points(winner) >= 11);
    assert_eq!(game.winner(), Some(winner));
    assert_eq!(game.start_round(), Err(DealError::GameOver));
    assert_eq!(game.step(), Ok(Vec::new()));
}

#[test]
fn short_game_ends_after_a_march() {
    let mut game = stacked_game(automated().with_points_to_win(2));
    game.run_automated().unwrap();

    let result = game.finish_round().unwrap();
    assert_eq!(result.winner, Some(Team::One));
    assert_eq!(game.state(), GameState::GameOver);

    let (hands, flipped) = stacked_deal();
    assert_eq!(game.start_round_with(hands, flipped), Err(DealError::GameOver));
}

#[test]
fn step_errors_wrap_engine_errors() {
    let err = StepError::from(PlayError::MustFollowSuit);
    assert_eq!(err, StepError::Play(PlayError::MustFollowSuit));
    assert_eq!(err.to_string(), "must follow the led suit");
}
