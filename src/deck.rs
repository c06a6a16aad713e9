//! Deck construction and dealing.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, CardId, DECK_SIZE, Suit};
use crate::error::DeckError;

/// The undealt cards of a round plus the identities that may not be dealt.
///
/// The dealt set resets with every refill. The removed set survives refills
/// and only clears when the player's streak ends.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    /// Undealt cards, top of the deck first.
    undealt: Vec<Card>,
    /// Identities dealt since the last refill.
    dealt: HashSet<CardId>,
    /// Identities permanently removed for the current streak.
    removed: HashSet<CardId>,
}

impl Deck {
    /// Creates an empty deck. The first [`Deck::deal_one`] refills it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds all 52 rank and suit combinations and shuffles them.
    pub fn fresh_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the undealt cards with a fresh shuffled deck and clears the
    /// dealt set. Permanently removed identities are kept.
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.undealt = Self::fresh_shuffled(rng);
        self.dealt.clear();
    }

    /// Replaces the undealt cards with `cards`, dealt top first.
    pub fn restack(&mut self, cards: Vec<Card>) {
        self.undealt = cards;
        self.dealt.clear();
    }

    fn is_eligible(&self, card: &Card) -> bool {
        let id = card.id();
        !self.dealt.contains(&id) && !self.removed.contains(&id)
    }

    fn take(&mut self, index: usize, face_up: bool) -> Card {
        let card = self.undealt.remove(index);
        self.dealt.insert(card.id());
        log::debug!(
            "dealt {}, {} left in deck",
            card.id(),
            self.undealt.len()
        );
        card.with_face_up(face_up)
    }

    /// Deals the first card that is neither dealt nor removed.
    ///
    /// Never fails. If no eligible card is left the deck rebuilds itself from
    /// a fresh shuffle of the identities not yet dealt this round, so cards
    /// already in play are not dealt twice.
    pub fn deal_one<R: Rng + ?Sized>(&mut self, face_up: bool, rng: &mut R) -> Card {
        if let Some(index) = self.undealt.iter().position(|card| self.is_eligible(card)) {
            return self.take(index, face_up);
        }

        log::warn!(
            "no undealt card available ({} in deck), rebuilding from unseen cards",
            self.undealt.len()
        );
        self.rebuild(rng);

        if self.undealt.is_empty() {
            log::warn!("every identity was dealt this round, forgetting the dealt set");
            self.dealt.clear();
            self.rebuild(rng);
        }

        if self.undealt.is_empty() {
            log::error!(
                "all {} identities are removed, dealing past the removed set",
                self.removed.len()
            );
            self.undealt = Self::fresh_shuffled(rng);
        }

        self.take(0, face_up)
    }

    /// Replaces the undealt cards with a fresh shuffle of every eligible
    /// identity. The dealt set is kept.
    fn rebuild<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cards = Self::fresh_shuffled(rng);
        cards.retain(|card| self.is_eligible(card));
        self.undealt = cards;
    }

    /// Bars `id` from being dealt until [`Deck::clear_removed`].
    pub fn remove_permanently(&mut self, id: CardId) {
        self.removed.insert(id);
        self.undealt.retain(|card| card.id() != id);
    }

    /// Forgets every permanently removed identity.
    pub fn clear_removed(&mut self) {
        self.removed.clear();
    }

    /// Returns whether `id` was dealt since the last refill.
    #[must_use]
    pub fn is_dealt(&self, id: &CardId) -> bool {
        self.dealt.contains(id)
    }

    /// Returns whether `id` is permanently removed.
    #[must_use]
    pub fn is_removed(&self, id: &CardId) -> bool {
        self.removed.contains(id)
    }

    /// Returns the permanently removed identities, sorted.
    #[must_use]
    pub fn removed(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.removed.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the undealt cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.undealt
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.undealt.len()
    }

    /// Checks that no two cards share an identity.
    ///
    /// # Errors
    ///
    /// Returns the first identity seen twice.
    pub fn check_unique<'a, I>(cards: I) -> Result<(), DeckError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut seen = HashSet::new();
        for card in cards {
            if !seen.insert(card.id()) {
                return Err(DeckError::DuplicateIdentity(card.id()));
            }
        }
        Ok(())
    }
}
