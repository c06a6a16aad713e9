//! A blackjack round engine with discard tokens and tarot power-ups, with
//! optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs single-player rounds against
//! the dealer. House rules on top of standard blackjack:
//!
//! - a bust hand is not lost until the player stands; discard tokens remove
//!   cards from the hand to climb back under 21,
//! - hitting is refused at or above a hard-bust threshold (32 by default),
//! - winning streaks earn token refills and tarot cards that rewrite the hand.
//!
//! # Example
//!
//! ```
//! use tarotjack::{Game, GameOptions, RoundState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.next_round().unwrap();
//! if game.state() == RoundState::Playing && game.stand().unwrap().is_none() {
//!     let play = game.dealer_play().unwrap();
//!     println!("{} ({})", play.outcome.winner, play.outcome.reason);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod economy;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod options;
pub mod result;
pub mod score;
pub mod tarot;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Suit};
pub use deck::Deck;
pub use economy::{Economy, WinReward};
pub use error::{ActionError, DeckError, PowerUpError, RoundError};
pub use game::{Game, RoundState};
pub use hand::Hand;
pub use history::{History, HistoryEntry};
pub use options::GameOptions;
pub use result::{DealerPlay, Reason, RoundOutcome, Winner};
pub use tarot::{Inventory, Tarot};
