//! A two-player War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the deck and both players,
//! deals the cards, resolves turns and settles wars when played cards tie.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, Player};
//!
//! let mut game = Game::default();
//! game.add_player(Player::new("Colin"));
//! game.add_player(Player::new("Valeria"));
//! game.build_deck();
//! game.deal().unwrap();
//!
//! let summary = game.play().unwrap();
//! assert_eq!(game.total_cards(), 52);
//! let _ = summary;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_VALUE, MIN_VALUE, Suit};
pub use error::{DealError, TurnError};
pub use game::{Game, GameState, MAX_PLAYERS, Seat};
pub use options::{GameOptions, PoolOrder};
pub use player::Player;
pub use result::{GameSummary, TurnResult, WarResult};
