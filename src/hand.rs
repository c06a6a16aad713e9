//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::score;

/// An ordered hand of cards belonging to the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Replaces the card at `index`, returning the previous card.
    pub fn replace(&mut self, index: usize, card: Card) -> Option<Card> {
        self.cards
            .get_mut(index)
            .map(|slot| core::mem::replace(slot, card))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the first card (the dealer's up card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.cards.iter().all(|card| card.face_up)
    }

    /// Returns a fully revealed copy of the cards.
    #[must_use]
    pub fn revealed_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .map(|card| card.with_face_up(true))
            .collect()
    }

    /// Calculates the value of the face-up cards.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        score::score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score::is_soft(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        score::is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > score::BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
