//! A Euchre round engine with optional `no_std` support.
//!
//! Four seats in two partnerships play the 24-card game: one seat may be
//! answered by a human through an explicit request/response boundary, the
//! other three follow fixed heuristics. The crate provides a [`Game`] type
//! that runs each round through dealing, bidding for trump, the dealer's
//! pickup exchange, five tricks and scoring.
//!
//! # Example
//!
//! ```no_run
//! use euchre_engine::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_human_seat(None);
//! let mut game = Game::new(options, 42);
//! game.start_round().unwrap();
//! game.run_automated().unwrap();
//! let result = game.finish_round().unwrap();
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bidding;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod policy;
pub mod result;
pub mod seat;
pub mod strength;
pub mod trick;

// Re-export main types
pub use bidding::{BidDecision, BidState, BidTable};
pub use card::{Card, Color, DECK_SIZE, Rank, Suit, assign_trick_points, trick_point};
pub use deck::{Deck, HAND_SIZE};
pub use error::{BidError, DealError, InputError, PlayError, ScoreError, StepError};
pub use game::{Expected, Game, GameState, TRICKS_PER_ROUND, Turn, score_round};
pub use hand::{Hand, discard_index};
pub use options::GameOptions;
pub use policy::{FollowChoice, FollowDecision, FollowView, Situation, follow, lead_index};
pub use result::{Event, RoundResult, RoundScore, ScoreKind};
pub use seat::{Seat, Team};
pub use strength::{Strength, flip_value};
pub use trick::{Play, Trick};
