use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ActionError;
use crate::history::HistoryEntry;
use crate::result::{DealerPlay, Reason, RoundOutcome, Winner};
use crate::score::BLACKJACK;
use crate::tarot::Tarot;

use super::{Game, RoundState};

const fn outcome_message(winner: Winner, reason: Reason) -> &'static str {
    match (winner, reason) {
        (Winner::Player, Reason::Blackjack) => "Blackjack! You win!",
        (Winner::Push, Reason::BothBlackjack) => {
            "Both have Blackjack! It's a push. Your streak continues."
        }
        (Winner::Dealer, Reason::PlayerBust) => "Bust! Your winning streak has ended.",
        (Winner::Player, Reason::DealerBust) => "Dealer busts! You win!",
        (Winner::Player, _) => "You win!",
        (Winner::Dealer, _) => "Dealer wins! Your winning streak has ended.",
        (Winner::Push, _) => "It's a push! Your streak continues.",
    }
}

impl Game {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card and draws while below
    /// `dealer_stands_on`, soft or hard alike, then the round is resolved:
    ///
    /// 1. Dealer over 21: player wins.
    /// 2. Higher score wins.
    /// 3. Equal scores push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in `DealerTurn`.
    pub fn dealer_play(&self) -> Result<DealerPlay, ActionError> {
        if self.state() != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer_hand.lock().reveal();

        let mut drawn = Vec::new();
        while self.dealer_score() < self.options.dealer_stands_on {
            let card = self.draw(true);
            self.dealer_hand.lock().add_card(card);
            drawn.push(card);
        }

        let dealer_score = self.dealer_score();
        let player_score = self.player_score();

        let (winner, reason) = if dealer_score > BLACKJACK {
            (Winner::Player, Reason::DealerBust)
        } else if dealer_score > player_score {
            (Winner::Dealer, Reason::HigherScore)
        } else if dealer_score < player_score {
            (Winner::Player, Reason::HigherScore)
        } else {
            (Winner::Push, Reason::EqualScores)
        };

        let outcome = self.finish_round(winner, reason);
        Ok(DealerPlay { drawn, outcome })
    }

    /// Settles an opening natural: the hole card is turned and a dealer
    /// natural pushes.
    pub(super) fn resolve_natural(&self) -> RoundOutcome {
        let mut dealer = self.dealer_hand.lock();
        dealer.reveal();
        let dealer_blackjack = dealer.is_blackjack();
        drop(dealer);

        if dealer_blackjack {
            self.finish_round(Winner::Push, Reason::BothBlackjack)
        } else {
            self.finish_round(Winner::Player, Reason::Blackjack)
        }
    }

    /// Records the round and runs the win, push or loss path.
    ///
    /// A win whose tarot countdown runs out moves to `TarotSelection` when a
    /// slot is free; every other outcome lands in `Result`.
    pub(super) fn finish_round(&self, winner: Winner, reason: Reason) -> RoundOutcome {
        self.dealer_hand.lock().reveal();

        let player_score = self.player_score();
        let dealer_score = self.dealer_score();

        self.record_history(HistoryEntry {
            winner,
            reason,
            player_score,
            dealer_score,
            player_hand: self.player_hand.lock().cards().to_vec(),
            dealer_hand: self.dealer_hand.lock().revealed_cards(),
        });

        let mut outcome = RoundOutcome {
            winner,
            reason,
            player_score,
            dealer_score,
            tokens_awarded: 0,
            tarot_offered: false,
        };
        let mut message = String::from(outcome_message(winner, reason));
        let mut next_state = RoundState::Result;

        match winner {
            Winner::Player => {
                let reward = self.economy.lock().record_win(&self.options);

                if reward.tokens > 0 {
                    outcome.tokens_awarded = reward.tokens;
                    message.push_str(&format!(" You earned {} discard tokens!", reward.tokens));
                    log::info!("refill: {} discard tokens granted", reward.tokens);
                }

                if reward.tarot_due {
                    if self.inventory.lock().is_full() {
                        log::info!("tarot reward skipped, inventory is full");
                    } else {
                        let offer = {
                            let mut rng = self.rng.lock();
                            Tarot::draw_offer(&mut *rng, self.options.tarot_offer_size)
                        };
                        self.offer.replace(offer);
                        outcome.tarot_offered = true;
                        next_state = RoundState::TarotSelection;
                        message.push_str(" You earned a tarot card! Choose one.");
                    }
                }
            }
            Winner::Dealer => {
                self.economy.lock().record_loss();
                self.inventory.lock().clear();
                self.deck.lock().clear_removed();
            }
            Winner::Push => {}
        }

        *self.state.lock() = next_state;
        self.set_message(message);
        log::info!(
            "round over: {winner} ({reason}), player {player_score} vs dealer {dealer_score}"
        );

        outcome
    }
}
