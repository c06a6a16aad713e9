//! CLI tarot blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tarotjack::{Card, Game, GameOptions, Hand, RoundState, Suit};

fn main() {
    println!("Tarot blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    if let Err(err) = game.next_round() {
        println!("Round error: {err}");
        return;
    }

    loop {
        match game.state() {
            RoundState::Playing => {
                print_table(&game);
                println!("{}", game.message());
                println!(
                    "Actions: [h]it [s]tand [d]iscard [t N] toggle card N [u N] use tarot in slot N [q]uit"
                );
                if !player_turn(&game, &prompt_line("Action: ")) {
                    return;
                }
            }
            RoundState::DealerTurn => match game.dealer_play() {
                Ok(play) => {
                    if !play.drawn.is_empty() {
                        println!("Dealer draws {} card(s).", play.drawn.len());
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            },
            RoundState::Result => {
                print_table(&game);
                println!("{}", game.message());
                print_economy(&game);
                match prompt_line("Next round? ([enter] / q): ").as_str() {
                    "q" | "quit" => return,
                    _ => {
                        if let Err(err) = game.next_round() {
                            println!("Round error: {err}");
                        }
                    }
                }
            }
            RoundState::TarotSelection => {
                println!("{}", game.message());
                let offer = game.tarot_offer();
                for (index, tarot) in offer.iter().enumerate() {
                    println!("  [{index}] {}: {}", tarot.name(), tarot.effect());
                }
                let input = prompt_line("Choose a tarot card: ");
                if input == "q" || input == "quit" {
                    return;
                }
                let Some(tarot) = input.parse::<usize>().ok().and_then(|i| offer.get(i)) else {
                    println!("Please enter one of the listed numbers.");
                    continue;
                };
                if let Err(err) = game.select_power_up(*tarot) {
                    println!("Tarot error: {err}");
                }
            }
        }
    }
}

/// Runs one player command. Returns `false` to quit.
fn player_turn(game: &Game, input: &str) -> bool {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next().and_then(|word| word.parse::<usize>().ok());

    let result = match (command, argument) {
        ("h" | "hit", _) => game.hit().map(|_| ()).map_err(|err| err.to_string()),
        ("s" | "stand", _) => game.stand().map(|_| ()).map_err(|err| err.to_string()),
        ("d" | "discard", _) => game.discard().map(|_| ()).map_err(|err| err.to_string()),
        ("t" | "toggle", Some(index)) => game
            .toggle_select(index)
            .map(|_| ())
            .map_err(|err| err.to_string()),
        ("u" | "use", Some(slot)) => game
            .use_power_up(slot)
            .map(|_| ())
            .map_err(|err| err.to_string()),
        ("q" | "quit", _) => return false,
        _ => Err("unknown action".to_string()),
    };

    if let Err(err) = result {
        println!("Action error: {err}");
    }
    true
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    println!(
        "\nDealer: {} (value {})",
        format_hand(&game.dealer_hand(), &[]),
        game.dealer_score()
    );
    println!(
        "Player: {} (value {})",
        format_hand(&game.player_hand(), &game.selection()),
        game.player_score()
    );

    let slots = game
        .inventory()
        .slots()
        .iter()
        .enumerate()
        .map(|(slot, tarot)| match tarot {
            Some(tarot) => format!("[{slot}] {}", tarot.name()),
            None => format!("[{slot}] -"),
        })
        .collect::<Vec<_>>();
    println!("Tarot: {}", slots.join(" "));
    println!();
}

fn print_economy(game: &Game) {
    let economy = game.economy();
    println!(
        "Wins {} | streak {} | discard tokens {} | next refill in {} win(s)",
        economy.wins, economy.streak, economy.tokens, economy.wins_until_refill
    );
}

fn format_hand(hand: &Hand, selection: &[usize]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let text = format_card(card);
            if selection.contains(&index) {
                format!("[{text}]")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.face_up {
        return "??".to_string();
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
