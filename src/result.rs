//! Round outcome types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Nobody won.
    Push,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
            Self::Push => "Push",
        })
    }
}

/// Why the round ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The player was dealt a natural and the dealer was not.
    Blackjack,
    /// Both sides were dealt a natural.
    BothBlackjack,
    /// The player stood while over 21.
    PlayerBust,
    /// The dealer drew past 21.
    DealerBust,
    /// One side finished with more points.
    HigherScore,
    /// Both sides finished level.
    EqualScores,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "Blackjack",
            Self::BothBlackjack => "Both blackjack",
            Self::PlayerBust => "Player bust",
            Self::DealerBust => "Dealer bust",
            Self::HigherScore => "Higher score",
            Self::EqualScores => "Equal scores",
        })
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Who took the round.
    pub winner: Winner,
    /// Why.
    pub reason: Reason,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score with the hole card revealed.
    pub dealer_score: u8,
    /// Discard tokens granted by this round.
    pub tokens_awarded: u32,
    /// Whether the round ended in a tarot selection.
    pub tarot_offered: bool,
}

/// What the dealer did after the player stood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerPlay {
    /// Cards drawn by the dealer, in order.
    pub drawn: Vec<Card>,
    /// How the round resolved.
    pub outcome: RoundOutcome,
}
