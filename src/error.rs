//! Error types for engine operations.
//!
//! Every error is a rejected action: the engine state is left as it was and
//! the status message explains what to do next.

use thiserror::Error;

use crate::card::CardId;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The player's score is at or above the hard-bust threshold.
    #[error("score too high, discard before hitting")]
    ScoreTooHigh,
    /// No discard tokens left.
    #[error("no discard tokens left")]
    NoTokens,
    /// Wrong number of selected cards.
    #[error("expected {expected} selected card(s), found {found}")]
    SelectionCount {
        /// Number of cards the action needs.
        expected: usize,
        /// Number of cards currently selected.
        found: usize,
    },
    /// Card index outside the player's hand.
    #[error("card index out of range")]
    IndexOutOfRange,
}

/// Errors that can occur when using or choosing tarot cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowerUpError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Inventory slot does not exist.
    #[error("inventory slot out of range")]
    SlotOutOfRange,
    /// Inventory slot holds no tarot card.
    #[error("inventory slot is empty")]
    EmptySlot,
    /// Wrong number of selected cards.
    #[error("expected {expected} selected card(s), found {found}")]
    SelectionCount {
        /// Number of cards the tarot card needs.
        expected: usize,
        /// Number of cards currently selected.
        found: usize,
    },
    /// Selected index outside the player's hand.
    #[error("card index out of range")]
    IndexOutOfRange,
    /// Every inventory slot is taken.
    #[error("no empty inventory slot")]
    InventoryFull,
    /// The tarot card is not part of the current offer.
    #[error("tarot card was not offered")]
    NotOffered,
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been resolved.
    #[error("invalid round state for starting a new round")]
    InvalidState,
}

/// Consistency violations found in dealt cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Two cards in play share an identity.
    #[error("duplicate card identity {0}")]
    DuplicateIdentity(CardId),
}
