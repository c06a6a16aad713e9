//! Direct mutators for test scaffolding and developer tooling.
//!
//! None of these are part of normal play and none check the round state.

use crate::card::Card;
use crate::error::PowerUpError;
use crate::tarot::Tarot;

use super::Game;

impl Game {
    /// Puts a face-up copy of `card` into the player's hand under a fresh
    /// identity and returns it.
    pub fn add_card_to_hand(&self, card: Card) -> Card {
        let card = card.with_face_up(true).with_serial(self.mint_serial());
        self.player_hand.lock().add_card(card);
        log::debug!("debug: added {} to the player's hand", card.id());
        card
    }

    /// Places `tarot` in the first empty inventory slot.
    ///
    /// # Errors
    ///
    /// Returns an error if every slot is taken.
    pub fn add_power_up(&self, tarot: Tarot) -> Result<usize, PowerUpError> {
        self.inventory
            .lock()
            .add(tarot)
            .ok_or(PowerUpError::InventoryFull)
    }

    /// Adds `delta` discard tokens, clamping at zero.
    pub fn adjust_tokens(&self, delta: i32) {
        let mut economy = self.economy.lock();
        economy.tokens = economy.tokens.saturating_add_signed(delta);
    }

    /// Adds `delta` wins, clamping at zero.
    pub fn adjust_wins(&self, delta: i32) {
        let mut economy = self.economy.lock();
        economy.wins = economy.wins.saturating_add_signed(delta);
    }
}
