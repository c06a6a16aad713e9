//! Card types and identities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// Stable identity of a card.
///
/// Cards from a fresh deck carry serial `0`, so rank and suit alone tell
/// them apart. Cards minted outside the deck (transform copies, injected
/// debug cards) get a non-zero serial and never collide with deck cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId {
    /// The rank of the card.
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
    /// Disambiguator for cards minted outside the deck.
    pub serial: u32,
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_label(self.rank), self.suit.symbol())?;
        if self.serial != 0 {
            write!(f, "#{}", self.serial)?;
        }
        Ok(())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is showing. Face-down cards score nothing.
    pub face_up: bool,
    /// Identity disambiguator, see [`CardId`].
    pub serial: u32,
}

impl Card {
    /// Creates a new face-up card with a deck identity.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score zero.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
            serial: 0,
        }
    }

    /// Returns the card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId {
            rank: self.rank,
            suit: self.suit,
            serial: self.serial,
        }
    }

    /// Returns a copy with the given face-up flag.
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    /// Returns a copy carrying a different identity serial.
    #[must_use]
    pub const fn with_serial(mut self, serial: u32) -> Self {
        self.serial = serial;
        self
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", rank_label(self.rank), self.suit.symbol())
        } else {
            f.write_str("??")
        }
    }
}

/// Returns the printed label for a rank.
#[must_use]
pub const fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
