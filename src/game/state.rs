//! Round state types.

/// Round state.
///
/// Exactly one state is active at a time. Dealing a round is not a state of
/// its own: it runs to completion and lands in `Playing` or, on an opening
/// blackjack, in `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player to hit, stand, discard or use a tarot card.
    Playing,
    /// The player stood; the dealer's hole card is up and the dealer draws next.
    DealerTurn,
    /// The round is resolved and the next one can be dealt.
    Result,
    /// A tarot reward is waiting to be chosen before the next round.
    TarotSelection,
}

impl RoundState {
    /// Returns whether the player's controls are live.
    #[must_use]
    pub const fn accepts_player_actions(self) -> bool {
        matches!(self, Self::Playing)
    }
}
