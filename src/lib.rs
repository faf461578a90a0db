//! A blackjack rules engine with basic-strategy and card-counting advice,
//! with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs each round: betting, the
//! deal, player decisions, dealer play, settlement, and cleanup. A [`Shoe`]
//! keeps a Zen running count, and every [`Hand`] can look up basic strategy
//! against the dealer's upcard.
//!
//! # Example
//!
//! ```no_run
//! use bjzen::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_training_mode(true);
//! let game = Game::new(options, 42);
//! let player = game.join("Ada", 1000).unwrap();
//! game.start_betting().unwrap();
//! game.bet(player, 100).unwrap();
//! game.deal().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod counting;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, Rank, Suit};
pub use counting::{CountTier, CountingAdvice, recommended_bet, zen_delta};
pub use error::{
    ActionError, AdviceError, BetError, CleanupError, DealError, ShoeError, ShowdownError,
    TableError,
};
pub use game::{Action, ActionOutcome, Game, GameState, LegalActions, TurnPosition};
pub use hand::{Hand, HandStatus};
pub use options::{GameOptions, RoundingMode};
pub use player::Player;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
pub use strategy::{Advice, Recommendation};
