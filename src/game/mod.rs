//! Round engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, CardId};
use crate::deck::Deck;
use crate::economy::Economy;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::history::{History, HistoryEntry};
use crate::options::GameOptions;
use crate::result::RoundOutcome;
use crate::tarot::{Inventory, Tarot};

mod actions;
mod dealer;
mod debug;
mod power_up;
pub mod state;

pub use state::RoundState;

const PROMPT: &str = "Your move: Hit or Stand?";

/// A single-player blackjack round engine.
///
/// The game owns the deck, both hands, the economy counters, the tarot
/// inventory and the history. Every mutation goes through its methods; each
/// runs to completion and leaves the engine in a well-defined [`RoundState`].
/// Pacing between deals is left to the caller.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// Undealt cards plus dealt and removed identities.
    pub deck: Mutex<Deck>,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The dealer's hand. The second card is dealt face down.
    pub dealer_hand: Mutex<Hand>,
    /// Wins, streak, tokens and reward countdowns.
    pub economy: Mutex<Economy>,
    /// Held tarot cards.
    pub inventory: Mutex<Inventory>,
    /// Finished rounds, newest first.
    history: Mutex<History>,
    /// Selected player-hand indices, in selection order.
    selection: Mutex<Vec<usize>>,
    /// Tarot cards on offer while in `TarotSelection`.
    offer: Mutex<Vec<Tarot>>,
    /// Status line for the player.
    message: Mutex<String>,
    /// Next identity serial for minted cards.
    next_serial: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The game starts in `Result` with empty hands; call
    /// [`Game::next_round`] to deal the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use tarotjack::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.next_round().unwrap();
    /// assert_eq!(game.player_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            state: Mutex::new(RoundState::Result),
            deck: Mutex::new(Deck::new()),
            player_hand: Mutex::new(Hand::new()),
            dealer_hand: Mutex::new(Hand::new()),
            economy: Mutex::new(Economy::new(&options)),
            inventory: Mutex::new(Inventory::new(options.inventory_slots)),
            history: Mutex::new(History::new(options.history_limit)),
            selection: Mutex::new(Vec::new()),
            offer: Mutex::new(Vec::new()),
            message: Mutex::new(String::new()),
            next_serial: AtomicU32::new(1),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            options,
        }
    }

    /// Shuffles a fresh deck and deals the next round once the current one
    /// is resolved.
    ///
    /// Permanently removed cards stay out of the new deck. Returns the outcome
    /// when the opening deal already decides the round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round state is `Result`.
    pub fn next_round(&self) -> Result<Option<RoundOutcome>, RoundError> {
        self.ensure_resolved()?;
        Ok(self.deal_fresh())
    }

    /// Deals the next round from `cards`, top card first.
    ///
    /// Deals player, dealer, player, dealer (face down). Removed identities
    /// are still skipped, and the deck rebuilds itself if `cards` runs out.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round state is `Result`.
    pub fn start_round_with(
        &self,
        cards: Vec<Card>,
    ) -> Result<Option<RoundOutcome>, RoundError> {
        self.ensure_resolved()?;
        self.deck.lock().restack(cards);
        log::debug!("starting round with a stacked deck");
        Ok(self.deal_opening())
    }

    fn ensure_resolved(&self) -> Result<(), RoundError> {
        if self.state() == RoundState::Result {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Deals a round from a fresh shuffle, whatever the current state.
    fn deal_fresh(&self) -> Option<RoundOutcome> {
        {
            let mut rng = self.rng.lock();
            self.deck.lock().refill(&mut *rng);
        }
        log::debug!("starting round with a fresh deck");
        self.deal_opening()
    }

    fn deal_opening(&self) -> Option<RoundOutcome> {
        self.player_hand.lock().clear();
        self.dealer_hand.lock().clear();
        self.selection.lock().clear();
        self.offer.lock().clear();

        let card = self.draw(true);
        self.player_hand.lock().add_card(card);
        let card = self.draw(true);
        self.dealer_hand.lock().add_card(card);
        let card = self.draw(true);
        self.player_hand.lock().add_card(card);
        let card = self.draw(false);
        self.dealer_hand.lock().add_card(card);

        self.check_identities();

        if self.player_hand.lock().is_blackjack() {
            return Some(self.resolve_natural());
        }

        *self.state.lock() = RoundState::Playing;
        self.set_message(PROMPT);
        None
    }

    /// Draws a card from the deck.
    fn draw(&self, face_up: bool) -> Card {
        let mut rng = self.rng.lock();
        self.deck.lock().deal_one(face_up, &mut *rng)
    }

    /// Returns a serial no deck card carries.
    fn mint_serial(&self) -> u32 {
        self.next_serial.fetch_add(1, Ordering::Relaxed)
    }

    /// Logs any identity shared by two cards in play.
    fn check_identities(&self) {
        let player = self.player_hand.lock().cards().to_vec();
        let dealer = self.dealer_hand.lock().cards().to_vec();
        if let Err(err) = Deck::check_unique(player.iter().chain(dealer.iter())) {
            log::error!("identity check failed: {err}");
        }
    }

    fn set_message(&self, message: impl Into<String>) {
        self.message.replace(message.into());
    }

    fn record_history(&self, entry: HistoryEntry) {
        self.history.lock().push(entry);
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.player_hand.lock().clone()
    }

    /// Returns a clone of the dealer's hand, face-down card included.
    pub fn dealer_hand(&self) -> Hand {
        self.dealer_hand.lock().clone()
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> u8 {
        self.player_hand.lock().value()
    }

    /// Returns the dealer's score over face-up cards only.
    pub fn dealer_score(&self) -> u8 {
        self.dealer_hand.lock().value()
    }

    /// Returns the status message.
    pub fn message(&self) -> String {
        self.message.lock().clone()
    }

    /// Returns a copy of the economy counters.
    pub fn economy(&self) -> Economy {
        *self.economy.lock()
    }

    /// Returns the recorded rounds, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.lock().to_vec()
    }

    /// Returns a clone of the tarot inventory.
    pub fn inventory(&self) -> Inventory {
        self.inventory.lock().clone()
    }

    /// Returns the selected hand indices in selection order.
    pub fn selection(&self) -> Vec<usize> {
        self.selection.lock().clone()
    }

    /// Returns the tarot cards on offer. Empty outside `TarotSelection`.
    pub fn tarot_offer(&self) -> Vec<Tarot> {
        self.offer.lock().clone()
    }

    /// Returns the number of undealt cards.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Returns the identities removed for the current streak.
    pub fn removed_cards(&self) -> Vec<CardId> {
        self.deck.lock().removed()
    }
}
