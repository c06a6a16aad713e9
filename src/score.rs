//! Hand scoring with the soft-ace rule.

use crate::card::Card;

/// Score at which a hand busts when exceeded.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards.iter().filter(|card| card.face_up) {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a hand.
///
/// Face-down cards count zero. Aces count 11 and are demoted to 1 one at a
/// time while the total is over 21.
///
/// ```
/// use tarotjack::{Card, Suit, score};
///
/// let hand = [Card::new(Suit::Clubs, 10), Card::new(Suit::Diamonds, 9), Card::new(Suit::Hearts, 1)];
/// assert_eq!(score::score(&hand), 20);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the hand holds an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the hand is a natural: exactly two cards scoring 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}
