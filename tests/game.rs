//! Round engine integration tests.

use tarotjack::{
    ActionError, Card, Deck, Game, GameOptions, PowerUpError, Reason, RoundError, RoundState,
    Suit, Tarot, Winner,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn new_game() -> Game {
    Game::new(GameOptions::default(), 7)
}

/// Player 10+10 against a dealer 5 showing; the hole card is a 9.
fn twenty_vs_five() -> Vec<Card> {
    vec![
        card(Suit::Hearts, 10), // player
        card(Suit::Clubs, 5), // dealer up
        card(Suit::Diamonds, 10), // player
        card(Suit::Spades, 9), // dealer hole
        card(Suit::Spades, 13), // player hit
        card(Suit::Clubs, 2), // player hit
    ]
}

fn player_blackjack() -> Vec<Card> {
    vec![
        card(Suit::Spades, 10), // player
        card(Suit::Clubs, 7), // dealer up
        card(Suit::Diamonds, 1), // player
        card(Suit::Hearts, 6), // dealer hole
    ]
}

fn mutual_blackjack() -> Vec<Card> {
    vec![
        card(Suit::Spades, 1), // player
        card(Suit::Hearts, 1), // dealer up
        card(Suit::Spades, 13), // player
        card(Suit::Hearts, 12), // dealer hole
    ]
}

fn win_rounds(game: &Game, rounds: usize) {
    for _ in 0..rounds {
        let outcome = game.start_round_with(player_blackjack()).unwrap().unwrap();
        assert_eq!(outcome.winner, Winner::Player);
    }
}

/// Plays the current round to `Result`, standing on every hand and taking
/// the first tarot card offered.
fn play_out(game: &Game) {
    loop {
        match game.state() {
            RoundState::Playing => {
                game.stand().unwrap();
            }
            RoundState::DealerTurn => {
                game.dealer_play().unwrap();
            }
            RoundState::TarotSelection => {
                let offer = game.tarot_offer();
                game.select_power_up(offer[0]).unwrap();
            }
            RoundState::Result => return,
        }
    }
}

/// Busts the player on a stacked round and stands.
fn lose_round(game: &Game) {
    game.start_round_with(twenty_vs_five()).unwrap();
    game.hit().unwrap();
    game.stand().unwrap();
}

#[test]
fn new_game_waits_for_first_deal() {
    let game = new_game();
    assert_eq!(game.state(), RoundState::Result);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.economy().tokens, 5);

    game.next_round().unwrap();
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn opening_deal_hides_hole_card() {
    let game = new_game();
    let outcome = game
        .start_round_with(vec![
            card(Suit::Hearts, 9), // player
            card(Suit::Clubs, 10), // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 9), // dealer hole
        ])
        .unwrap();

    assert!(outcome.is_none());
    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.message(), "Your move: Hit or Stand?");
    assert_eq!(game.player_score(), 16);
    assert_eq!(game.dealer_score(), 10);

    let dealer = game.dealer_hand();
    assert!(dealer.cards()[0].face_up);
    assert!(!dealer.cards()[1].face_up);
}

#[test]
fn player_blackjack_wins_on_the_deal() {
    let game = new_game();
    let outcome = game.start_round_with(player_blackjack()).unwrap().unwrap();

    assert_eq!(outcome.winner, Winner::Player);
    assert_eq!(outcome.reason, Reason::Blackjack);
    assert_eq!(game.state(), RoundState::Result);
    assert_eq!(game.message(), "Blackjack! You win!");

    let dealer = game.dealer_hand();
    assert!(dealer.is_revealed());
    assert_eq!(game.dealer_score(), 13);

    let economy = game.economy();
    assert_eq!(economy.wins, 1);
    assert_eq!(economy.streak, 1);
    assert_eq!(economy.tokens, 5);

    let history = game.history();
    assert_eq!(history[0].winner, Winner::Player);
    assert_eq!(history[0].player_score, 21);
}

#[test]
fn mutual_blackjack_pushes_and_keeps_streak() {
    let game = new_game();
    win_rounds(&game, 1);

    let outcome = game.start_round_with(mutual_blackjack()).unwrap().unwrap();
    assert_eq!(outcome.winner, Winner::Push);
    assert_eq!(outcome.reason, Reason::BothBlackjack);
    assert_eq!(outcome.tokens_awarded, 0);

    let economy = game.economy();
    assert_eq!(economy.wins, 1);
    assert_eq!(economy.streak, 1);
    assert_eq!(economy.wins_until_refill, 2);
}

#[test]
fn live_round_cannot_be_redealt() {
    let game = new_game();
    win_rounds(&game, 2);
    game.start_round_with(twenty_vs_five()).unwrap();
    game.hit().unwrap();
    assert_eq!(game.player_score(), 30);

    assert_eq!(game.next_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.start_round_with(player_blackjack()).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.player_score(), 30);
    assert_eq!(game.economy().streak, 2);

    game.stand().unwrap();
    assert_eq!(game.economy().streak, 0);
    assert_eq!(game.history()[0].reason, Reason::PlayerBust);
}

#[test]
fn dealer_turn_cannot_be_redealt() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), RoundState::DealerTurn);

    assert_eq!(game.next_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.start_round_with(player_blackjack()).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(game.state(), RoundState::DealerTurn);
}

#[test]
fn pending_tarot_choice_cannot_be_skipped() {
    let game = new_game();
    win_rounds(&game, 5);
    assert_eq!(game.state(), RoundState::TarotSelection);
    let offer = game.tarot_offer();

    assert_eq!(game.next_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.start_round_with(player_blackjack()).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(game.state(), RoundState::TarotSelection);
    assert_eq!(game.tarot_offer(), offer);

    game.select_power_up(offer[0]).unwrap();
    assert_eq!(game.inventory().get(0), Some(offer[0]));
}

#[test]
fn hit_is_refused_at_hard_bust() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();

    game.hit().unwrap();
    assert_eq!(game.player_score(), 30);
    assert_eq!(
        game.message(),
        "Bust! You can discard cards or stand to end your turn."
    );

    game.hit().unwrap();
    assert_eq!(game.player_score(), 32);
    assert_eq!(game.state(), RoundState::Playing);

    assert_eq!(game.hit().unwrap_err(), ActionError::ScoreTooHigh);
    assert_eq!(game.player_hand().len(), 4);
    assert_eq!(game.player_score(), 32);
    assert!(game.message().starts_with("Score too high!"));
}

#[test]
fn stand_while_bust_loses_without_dealer_draw() {
    let game = new_game();
    win_rounds(&game, 2);
    game.add_power_up(Tarot::Death).unwrap();

    game.start_round_with(twenty_vs_five()).unwrap();
    game.hit().unwrap();

    let outcome = game.stand().unwrap().unwrap();
    assert_eq!(outcome.winner, Winner::Dealer);
    assert_eq!(outcome.reason, Reason::PlayerBust);
    assert_eq!(game.state(), RoundState::Result);

    let dealer = game.dealer_hand();
    assert!(dealer.is_revealed());
    assert_eq!(dealer.len(), 2);

    let economy = game.economy();
    assert_eq!(economy.streak, 0);
    assert_eq!(economy.wins, 0);
    assert!(game.inventory().slots().iter().all(Option::is_none));
    assert_eq!(game.history()[0].reason, Reason::PlayerBust);
}

#[test]
fn dealer_draws_to_seventeen_and_wins() {
    let game = new_game();
    game.start_round_with(vec![
        card(Suit::Hearts, 10), // player
        card(Suit::Clubs, 6), // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 5), // dealer hole
        card(Suit::Hearts, 3), // dealer draw
        card(Suit::Diamonds, 2), // dealer draw
        card(Suit::Clubs, 4), // dealer draw
        card(Suit::Spades, 9), // untouched
    ])
    .unwrap();

    assert!(game.stand().unwrap().is_none());
    assert_eq!(game.state(), RoundState::DealerTurn);
    assert!(game.dealer_hand().is_revealed());
    assert_eq!(game.dealer_score(), 11);

    let play = game.dealer_play().unwrap();
    assert_eq!(play.drawn.len(), 3);
    assert_eq!(play.outcome.dealer_score, 20);
    assert_eq!(play.outcome.winner, Winner::Dealer);
    assert_eq!(play.outcome.reason, Reason::HigherScore);
    assert_eq!(game.economy().streak, 0);
    assert_eq!(
        game.message(),
        "Dealer wins! Your winning streak has ended."
    );
}

#[test]
fn dealer_stands_on_seventeen() {
    let game = new_game();
    game.start_round_with(vec![
        card(Suit::Hearts, 10), // player
        card(Suit::Clubs, 10), // dealer up
        card(Suit::Diamonds, 9), // player
        card(Suit::Spades, 7), // dealer hole
        card(Suit::Hearts, 2), // never drawn
    ])
    .unwrap();

    game.stand().unwrap();
    let play = game.dealer_play().unwrap();
    assert!(play.drawn.is_empty());
    assert_eq!(play.outcome.winner, Winner::Player);
    assert_eq!(play.outcome.reason, Reason::HigherScore);
    assert_eq!(game.economy().wins, 1);
    assert_eq!(game.message(), "You win!");
}

#[test]
fn dealer_bust_pays_player() {
    let game = new_game();
    game.start_round_with(vec![
        card(Suit::Hearts, 10), // player
        card(Suit::Clubs, 10), // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 6), // dealer hole
        card(Suit::Spades, 10), // dealer draw
    ])
    .unwrap();

    game.stand().unwrap();
    let play = game.dealer_play().unwrap();
    assert_eq!(play.drawn.len(), 1);
    assert_eq!(play.outcome.winner, Winner::Player);
    assert_eq!(play.outcome.reason, Reason::DealerBust);
    assert_eq!(game.message(), "Dealer busts! You win!");
}

#[test]
fn equal_scores_push() {
    let game = new_game();
    win_rounds(&game, 1);
    game.start_round_with(vec![
        card(Suit::Hearts, 10), // player
        card(Suit::Clubs, 10), // dealer up
        card(Suit::Diamonds, 8), // player
        card(Suit::Spades, 8), // dealer hole
    ])
    .unwrap();

    game.stand().unwrap();
    let play = game.dealer_play().unwrap();
    assert_eq!(play.outcome.winner, Winner::Push);
    assert_eq!(play.outcome.reason, Reason::EqualScores);
    assert_eq!(game.economy().streak, 1);
    assert_eq!(game.history()[0].winner, Winner::Push);
}

#[test]
fn discard_needs_exactly_one_selected_card() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();
    game.hit().unwrap();

    assert_eq!(
        game.discard().unwrap_err(),
        ActionError::SelectionCount {
            expected: 1,
            found: 0
        }
    );

    assert!(game.toggle_select(0).unwrap());
    assert!(game.toggle_select(1).unwrap());
    assert_eq!(
        game.discard().unwrap_err(),
        ActionError::SelectionCount {
            expected: 1,
            found: 2
        }
    );
    assert_eq!(game.economy().tokens, 5);

    assert!(!game.toggle_select(1).unwrap());
    let discarded = game.discard().unwrap();
    assert_eq!(discarded.id(), card(Suit::Hearts, 10).id());
    assert_eq!(game.economy().tokens, 4);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.player_score(), 20);
    assert!(game.selection().is_empty());
    assert_eq!(game.message(), "Card discarded! Your move: Hit or Stand?");
}

#[test]
fn discard_rescues_hard_bust() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();
    game.hit().unwrap();
    game.hit().unwrap();
    assert_eq!(game.hit().unwrap_err(), ActionError::ScoreTooHigh);

    game.toggle_select(3).unwrap();
    game.discard().unwrap();
    assert_eq!(game.player_score(), 30);
    assert!(game.message().starts_with("Still bust, but you can hit again!"));
    assert!(game.hit().is_ok());
}

#[test]
fn last_token_pays_for_exactly_one_discard() {
    let game = new_game();
    game.adjust_tokens(-4);
    game.start_round_with(twenty_vs_five()).unwrap();
    game.hit().unwrap();

    game.toggle_select(2).unwrap();
    game.discard().unwrap();
    assert_eq!(game.economy().tokens, 0);
    assert_eq!(game.player_hand().len(), 2);

    game.toggle_select(0).unwrap();
    assert_eq!(game.discard().unwrap_err(), ActionError::NoTokens);
    assert_eq!(game.economy().tokens, 0);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.message(), "No discard tokens left.");
}

#[test]
fn discard_without_tokens_is_rejected() {
    let game = new_game();
    game.adjust_tokens(-5);
    game.start_round_with(twenty_vs_five()).unwrap();

    game.toggle_select(0).unwrap();
    assert_eq!(game.discard().unwrap_err(), ActionError::NoTokens);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn actions_rejected_outside_playing() {
    let game = new_game();
    game.start_round_with(player_blackjack()).unwrap();
    assert_eq!(game.state(), RoundState::Result);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.discard().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.toggle_select(0).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.use_power_up(0).unwrap_err(),
        PowerUpError::InvalidState
    );
    assert_eq!(
        game.select_power_up(Tarot::Death).unwrap_err(),
        PowerUpError::InvalidState
    );

    game.start_round_with(twenty_vs_five()).unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn toggle_select_checks_range() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();

    assert_eq!(
        game.toggle_select(2).unwrap_err(),
        ActionError::IndexOutOfRange
    );
    assert!(game.toggle_select(1).unwrap());
    assert!(!game.toggle_select(1).unwrap());
    assert!(game.selection().is_empty());
}

#[test]
fn every_third_win_refills_tokens() {
    let game = new_game();
    win_rounds(&game, 2);
    assert_eq!(game.economy().tokens, 5);

    let outcome = game.start_round_with(player_blackjack()).unwrap().unwrap();
    assert_eq!(outcome.tokens_awarded, 5);
    assert_eq!(game.economy().tokens, 10);
    assert_eq!(game.economy().wins_until_refill, 3);
    assert_eq!(
        game.message(),
        "Blackjack! You win! You earned 5 discard tokens!"
    );
}

#[test]
fn fifth_win_offers_tarot_selection() {
    let game = new_game();
    win_rounds(&game, 4);
    assert_eq!(game.state(), RoundState::Result);

    let outcome = game.start_round_with(player_blackjack()).unwrap().unwrap();
    assert!(outcome.tarot_offered);
    assert_eq!(game.state(), RoundState::TarotSelection);

    let offer = game.tarot_offer();
    assert_eq!(offer.len(), 2);

    let slot = game.select_power_up(offer[0]).unwrap();
    assert_eq!(slot, 0);
    assert_eq!(game.inventory().get(0), Some(offer[0]));
    assert_ne!(game.state(), RoundState::TarotSelection);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn tarot_selection_rejects_cards_not_offered() {
    let game = Game::new(GameOptions::default().with_tarot_offer_size(1), 3);
    win_rounds(&game, 5);
    assert_eq!(game.state(), RoundState::TarotSelection);

    let offer = game.tarot_offer();
    assert_eq!(offer.len(), 1);
    let other = Tarot::ALL.into_iter().find(|t| *t != offer[0]).unwrap();
    assert_eq!(
        game.select_power_up(other).unwrap_err(),
        PowerUpError::NotOffered
    );
    assert_eq!(game.state(), RoundState::TarotSelection);
}

#[test]
fn full_inventory_skips_tarot_reward() {
    let game = new_game();
    game.add_power_up(Tarot::Death).unwrap();
    game.add_power_up(Tarot::TheHangedMan).unwrap();
    assert_eq!(
        game.add_power_up(Tarot::Death).unwrap_err(),
        PowerUpError::InventoryFull
    );

    win_rounds(&game, 5);
    assert_eq!(game.state(), RoundState::Result);
    assert!(game.tarot_offer().is_empty());
    assert_eq!(game.economy().wins_until_tarot, 5);
}

#[test]
fn base_variant_never_offers_tarot() {
    let game = Game::new(GameOptions::default().with_tarot(false), 9);
    win_rounds(&game, 10);
    assert_eq!(game.state(), RoundState::Result);
    assert_eq!(game.economy().wins, 10);
}

#[test]
fn death_copies_right_card_onto_left() {
    let game = new_game();
    game.start_round_with(vec![
        card(Suit::Hearts, 5), // player
        card(Suit::Clubs, 9), // dealer up
        card(Suit::Spades, 13), // player
        card(Suit::Spades, 8), // dealer hole
    ])
    .unwrap();
    let slot = game.add_power_up(Tarot::Death).unwrap();

    game.toggle_select(1).unwrap();
    game.toggle_select(0).unwrap();
    assert_eq!(game.use_power_up(slot).unwrap(), Tarot::Death);

    let hand = game.player_hand();
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.cards()[0].rank, 13);
    assert_eq!(hand.cards()[0].suit, Suit::Spades);
    assert_ne!(hand.cards()[0].id(), hand.cards()[1].id());
    assert_eq!(game.player_score(), 20);
    assert_eq!(game.inventory().get(slot), None);
    assert!(game.selection().is_empty());
}

/// Deals 5♥ and K♠ against a dealer 17, hits a 2♦ and hangs the 5♥ and 2♦.
fn hang_two(game: &Game) -> [tarotjack::CardId; 2] {
    game.start_round_with(vec![
        card(Suit::Hearts, 5), // player
        card(Suit::Clubs, 9), // dealer up
        card(Suit::Spades, 13), // player
        card(Suit::Spades, 8), // dealer hole
        card(Suit::Diamonds, 2), // player hit
    ])
    .unwrap();
    game.hit().unwrap();
    let slot = game.add_power_up(Tarot::TheHangedMan).unwrap();

    game.toggle_select(0).unwrap();
    game.toggle_select(2).unwrap();
    game.use_power_up(slot).unwrap();

    [card(Suit::Hearts, 5).id(), card(Suit::Diamonds, 2).id()]
}

#[test]
fn hanged_man_removes_cards_for_the_streak() {
    let game = new_game();
    let removed = hang_two(&game);

    let hand = game.player_hand();
    assert_eq!(hand.len(), 1);
    assert_eq!(hand.cards()[0].id(), card(Suit::Spades, 13).id());
    assert_eq!(game.removed_cards().len(), 2);
    for id in &removed {
        assert!(game.removed_cards().contains(id));
    }

    // K♠ + 9 beats the dealer's 17, so the streak survives.
    game.add_card_to_hand(card(Suit::Hearts, 9));
    game.stand().unwrap();
    let play = game.dealer_play().unwrap();
    assert_eq!(play.outcome.winner, Winner::Player);

    for _ in 0..30 {
        game.next_round().unwrap();
        if game.removed_cards().is_empty() {
            break;
        }
        let dealt = game
            .player_hand()
            .cards()
            .iter()
            .chain(game.dealer_hand().cards())
            .map(Card::id)
            .collect::<Vec<_>>();
        assert!(removed.iter().all(|id| !dealt.contains(id)));
        play_out(&game);
    }
}

#[test]
fn loss_returns_hanged_cards_to_the_deck() {
    let game = new_game();
    hang_two(&game);
    assert_eq!(game.removed_cards().len(), 2);

    // K♠ alone loses to the dealer's 17.
    game.stand().unwrap();
    let play = game.dealer_play().unwrap();
    assert_eq!(play.outcome.winner, Winner::Dealer);
    assert!(game.removed_cards().is_empty());

    lose_round(&game);
    assert!(game.removed_cards().is_empty());
}

#[test]
fn power_up_rejections() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();

    assert_eq!(
        game.use_power_up(5).unwrap_err(),
        PowerUpError::SlotOutOfRange
    );
    assert_eq!(game.use_power_up(0).unwrap_err(), PowerUpError::EmptySlot);

    game.add_power_up(Tarot::Death).unwrap();
    game.toggle_select(0).unwrap();
    assert_eq!(
        game.use_power_up(0).unwrap_err(),
        PowerUpError::SelectionCount {
            expected: 2,
            found: 1
        }
    );
    assert_eq!(game.inventory().get(0), Some(Tarot::Death));
}

#[test]
fn history_keeps_ten_newest_first() {
    let game = new_game();
    for _ in 0..12 {
        game.start_round_with(mutual_blackjack()).unwrap();
    }
    win_rounds(&game, 1);

    let history = game.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0].winner, Winner::Player);
    assert!(history[1..].iter().all(|entry| entry.winner == Winner::Push));
    assert!(history[0].dealer_hand.iter().all(|card| card.face_up));
}

#[test]
fn injected_cards_get_fresh_identities() {
    let game = new_game();
    game.start_round_with(twenty_vs_five()).unwrap();

    let added = game.add_card_to_hand(card(Suit::Hearts, 10));
    assert_ne!(added.id(), card(Suit::Hearts, 10).id());
    assert_eq!(game.player_hand().len(), 3);
    assert_eq!(game.player_score(), 30);
}

#[test]
fn debug_adjustments_clamp_at_zero() {
    let game = new_game();
    game.adjust_tokens(10);
    assert_eq!(game.economy().tokens, 15);
    game.adjust_tokens(-100);
    assert_eq!(game.economy().tokens, 0);

    game.adjust_wins(3);
    assert_eq!(game.economy().wins, 3);
    game.adjust_wins(-5);
    assert_eq!(game.economy().wins, 0);
}

#[test]
fn short_stacked_deck_rebuilds_without_repeats() {
    let game = new_game();
    let stacked = [
        card(Suit::Hearts, 9), // player
        card(Suit::Clubs, 10), // dealer up
        card(Suit::Diamonds, 7), // player
    ];
    let outcome = game.start_round_with(stacked.to_vec()).unwrap();

    assert!(outcome.is_none());
    assert_eq!(game.state(), RoundState::Playing);

    let player = game.player_hand();
    let dealer = game.dealer_hand();
    assert_eq!(player.len(), 2);
    assert_eq!(dealer.len(), 2);

    let hole = dealer.cards()[1];
    assert!(!hole.face_up);
    assert!(stacked.iter().all(|card| card.id() != hole.id()));
    assert!(Deck::check_unique(player.cards().iter().chain(dealer.cards())).is_ok());
    assert_eq!(game.cards_remaining(), 48);
}
