use alloc::format;

use crate::error::PowerUpError;
use crate::tarot::Tarot;

use super::{Game, RoundState};

impl Game {
    /// Uses the tarot card in `slot` on the selected player cards.
    ///
    /// - [`Tarot::Death`]: with the two selected indices sorted as
    ///   `(left, right)`, the left card becomes a copy of the right card under
    ///   a fresh identity.
    /// - [`Tarot::TheHangedMan`]: both selected cards leave the hand and their
    ///   identities stay out of every deck until the streak ends.
    ///
    /// The slot is emptied and the selection cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `Playing`, the slot is out of
    /// range or empty, or the selection does not hold exactly the number of
    /// valid cards the tarot card needs.
    pub fn use_power_up(&self, slot: usize) -> Result<Tarot, PowerUpError> {
        if !self.state().accepts_player_actions() {
            return Err(PowerUpError::InvalidState);
        }

        let inventory = self.inventory.lock();
        if slot >= inventory.capacity() {
            return Err(PowerUpError::SlotOutOfRange);
        }
        let tarot = inventory.get(slot).ok_or(PowerUpError::EmptySlot)?;
        drop(inventory);

        let selection = self.selection();
        let expected = tarot.selection_count();
        let &[first, second] = selection.as_slice() else {
            self.set_message(format!(
                "Select exactly {expected} cards to use {}.",
                tarot.name()
            ));
            return Err(PowerUpError::SelectionCount {
                expected,
                found: selection.len(),
            });
        };

        let hand_len = self.player_hand.lock().len();
        if first >= hand_len || second >= hand_len {
            return Err(PowerUpError::IndexOutOfRange);
        }

        match tarot {
            Tarot::Death => self.transform(first.min(second), first.max(second)),
            Tarot::TheHangedMan => self.remove_two(first.max(second), first.min(second)),
        }

        self.inventory.lock().take(slot);
        self.selection.lock().clear();
        self.check_identities();
        log::info!("used {} from slot {slot}", tarot.name());

        Ok(tarot)
    }

    fn transform(&self, left: usize, right: usize) {
        let serial = self.mint_serial();
        let mut hand = self.player_hand.lock();
        let source = hand.get(right).copied();
        if let Some(source) = source {
            hand.replace(left, source.with_serial(serial));
        }
        let value = hand.value();
        drop(hand);

        self.set_message(format!("Death transformed a card! Score: {value}"));
    }

    fn remove_two(&self, high: usize, low: usize) {
        let mut hand = self.player_hand.lock();
        let removed = [hand.remove(high), hand.remove(low)];
        let value = hand.value();
        drop(hand);

        let mut deck = self.deck.lock();
        for card in removed.into_iter().flatten() {
            deck.remove_permanently(card.id());
            log::debug!("{} removed until the streak ends", card.id());
        }
        drop(deck);

        self.set_message(format!(
            "The Hanged Man removed two cards from play! Score: {value}"
        ));
    }

    /// Takes `tarot` from the current offer and deals the next round.
    ///
    /// Returns the inventory slot the card went into.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `TarotSelection`, `tarot` was
    /// not offered, or no inventory slot is free.
    pub fn select_power_up(&self, tarot: Tarot) -> Result<usize, PowerUpError> {
        if self.state() != RoundState::TarotSelection {
            return Err(PowerUpError::InvalidState);
        }

        if !self.offer.lock().contains(&tarot) {
            return Err(PowerUpError::NotOffered);
        }

        let slot = self.inventory.lock().add(tarot);
        let Some(slot) = slot else {
            self.set_message("No empty slot for a tarot card.");
            return Err(PowerUpError::InventoryFull);
        };

        log::info!("{} placed in slot {slot}", tarot.name());
        self.deal_fresh();

        Ok(slot)
    }
}
