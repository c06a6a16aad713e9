use alloc::format;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Reason, RoundOutcome, Winner};
use crate::score::BLACKJACK;

use super::{Game, PROMPT, RoundState};

impl Game {
    fn ensure_playing(&self) -> Result<(), ActionError> {
        if self.state().accepts_player_actions() {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Over 21 the hand is bust but the round goes on: the player may still
    /// discard or stand. At or above the hard-bust threshold hitting is
    /// refused until a discard brings the score back down.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `Playing` or the player's
    /// score is at or above the hard-bust threshold.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let hard_bust = self.options.hard_bust;
        if self.player_score() >= hard_bust {
            self.set_message(format!(
                "Score too high! Discard cards to get below {hard_bust} before hitting again."
            ));
            return Err(ActionError::ScoreTooHigh);
        }

        self.selection.lock().clear();

        let card = self.draw(true);
        let mut hand = self.player_hand.lock();
        hand.add_card(card);
        let value = hand.value();
        drop(hand);

        if value >= hard_bust {
            self.set_message(format!(
                "Bust! Score is over {hard_bust}. Discard cards to continue hitting."
            ));
        } else if value > BLACKJACK {
            self.set_message("Bust! You can discard cards or stand to end your turn.");
        }

        Ok(card)
    }

    /// Player action: Stand (end the turn).
    ///
    /// A bust hand loses on the spot and `Some` outcome is returned. Otherwise
    /// the hole card is turned and the round moves to `DealerTurn`; call
    /// [`Game::dealer_play`] to finish it.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `Playing`.
    pub fn stand(&self) -> Result<Option<RoundOutcome>, ActionError> {
        self.ensure_playing()?;

        self.selection.lock().clear();
        self.dealer_hand.lock().reveal();

        if self.player_hand.lock().is_bust() {
            return Ok(Some(self.finish_round(Winner::Dealer, Reason::PlayerBust)));
        }

        *self.state.lock() = RoundState::DealerTurn;
        self.set_message("Dealer's turn.");
        log::debug!("player stands on {}", self.player_score());

        Ok(None)
    }

    /// Player action: Discard the single selected card for one token.
    ///
    /// Allowed while bust; this is how a bust hand is rescued.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `Playing`, no tokens are
    /// left, or the selection is not exactly one valid card.
    pub fn discard(&self) -> Result<Card, ActionError> {
        self.ensure_playing()?;

        let mut economy = self.economy.lock();
        if economy.tokens == 0 {
            drop(economy);
            self.set_message("No discard tokens left.");
            return Err(ActionError::NoTokens);
        }

        let selection = self.selection();
        let &[index] = selection.as_slice() else {
            drop(economy);
            self.set_message("Select exactly one card to discard.");
            return Err(ActionError::SelectionCount {
                expected: 1,
                found: selection.len(),
            });
        };

        let mut hand = self.player_hand.lock();
        let card = hand.remove(index).ok_or(ActionError::IndexOutOfRange)?;
        let value = hand.value();
        drop(hand);

        // Balance was checked above under the same guard.
        let spent = economy.spend_token();
        drop(economy);
        debug_assert!(spent);

        self.selection.lock().clear();
        log::debug!("discarded {}, score now {value}", card.id());

        let hard_bust = self.options.hard_bust;
        if value >= hard_bust {
            self.set_message(format!(
                "Still bust! Score is over {hard_bust}. Discard more cards to continue hitting."
            ));
        } else if value > BLACKJACK {
            self.set_message(format!(
                "Still bust, but you can hit again! Score is below {hard_bust}."
            ));
        } else {
            self.set_message(format!("Card discarded! {PROMPT}"));
        }

        Ok(card)
    }

    /// Toggles selection of the player's card at `index`.
    ///
    /// Returns whether the card is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `Playing` or `index` is
    /// outside the player's hand.
    pub fn toggle_select(&self, index: usize) -> Result<bool, ActionError> {
        self.ensure_playing()?;

        if index >= self.player_hand.lock().len() {
            return Err(ActionError::IndexOutOfRange);
        }

        let mut selection = self.selection.lock();
        if let Some(position) = selection.iter().position(|&i| i == index) {
            selection.remove(position);
            Ok(false)
        } else {
            selection.push(index);
            Ok(true)
        }
    }
}
