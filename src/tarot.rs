//! Tarot power-ups and the inventory that holds them.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

/// A tarot card that rewrites the player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tarot {
    /// Death: of two selected cards, the left one becomes a copy of the right one.
    Death,
    /// The Hanged Man: destroys two selected cards for the rest of the streak.
    TheHangedMan,
}

impl Tarot {
    /// Every tarot card definition.
    pub const ALL: [Self; 2] = [Self::Death, Self::TheHangedMan];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Death => "Death",
            Self::TheHangedMan => "The Hanged Man",
        }
    }

    /// Short description of the effect.
    #[must_use]
    pub const fn effect(self) -> &'static str {
        match self {
            Self::Death => "Turn the left selected card into a copy of the right one",
            Self::TheHangedMan => "Remove two selected cards from play until your streak ends",
        }
    }

    /// Number of hand cards that must be selected to use this card.
    #[must_use]
    pub const fn selection_count(self) -> usize {
        match self {
            Self::Death | Self::TheHangedMan => 2,
        }
    }

    /// Draws up to `count` distinct definitions in random order.
    pub fn draw_offer<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Self> {
        let mut offer = Self::ALL.to_vec();
        offer.shuffle(rng);
        offer.truncate(count.max(1));
        offer
    }
}

/// Fixed-size tarot inventory. Each slot is empty or holds one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Option<Tarot>>,
}

impl Inventory {
    /// Creates an inventory with `capacity` empty slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Places `tarot` in the first empty slot and returns the slot index.
    pub fn add(&mut self, tarot: Tarot) -> Option<usize> {
        let index = self.first_empty()?;
        self.slots[index] = Some(tarot);
        Some(index)
    }

    /// Returns the card in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Tarot> {
        self.slots.get(slot).copied().flatten()
    }

    /// Empties `slot` and returns what it held.
    pub fn take(&mut self, slot: usize) -> Option<Tarot> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Returns the index of the first empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Returns whether every slot is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns the slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Tarot>] {
        &self.slots
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}
