use tarotjack::{
    Card, Economy, Game, GameOptions, Hand, HistoryEntry, Reason, RoundOutcome, RoundState, Suit,
    Tarot, Winner,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, tarot: bool) -> Self {
        Self {
            game: new_game(seed, tarot),
        }
    }

    pub fn reset(&mut self, seed: u32, tarot: bool) {
        self.game = new_game(seed, tarot);
    }

    pub fn next_round(&self) -> Result<JsValue, JsValue> {
        let outcome = self.game.next_round().map_err(js_err)?;
        to_js_value(&outcome.map(JsOutcome::from))
    }

    pub fn hit(&self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        let outcome = self.game.stand().map_err(js_err)?;
        to_js_value(&outcome.map(JsOutcome::from))
    }

    pub fn discard(&self) -> Result<(), JsValue> {
        self.game.discard().map(|_| ()).map_err(js_err)
    }

    pub fn toggle_select(&self, index: u32) -> Result<bool, JsValue> {
        self.game.toggle_select(index as usize).map_err(js_err)
    }

    pub fn dealer_play(&self) -> Result<JsValue, JsValue> {
        let play = self.game.dealer_play().map_err(js_err)?;
        to_js_value(&JsDealerPlay {
            drawn: play.drawn.into_iter().map(card_to_js).collect(),
            outcome: JsOutcome::from(play.outcome),
        })
    }

    pub fn use_power_up(&self, slot: u32) -> Result<String, JsValue> {
        self.game
            .use_power_up(slot as usize)
            .map(|tarot| tarot.name().to_string())
            .map_err(js_err)
    }

    pub fn select_power_up(&self, offer_index: u32) -> Result<u32, JsValue> {
        let offer = self.game.tarot_offer();
        let tarot = offer
            .get(offer_index as usize)
            .copied()
            .ok_or_else(|| JsValue::from_str("no tarot card at that offer index"))?;
        self.game
            .select_power_up(tarot)
            .map(|slot| slot as u32)
            .map_err(js_err)
    }

    pub fn debug_add_card(&self, suit: &str, rank: u8) -> Result<(), JsValue> {
        let suit = suit_from_str(suit).ok_or_else(|| JsValue::from_str("unknown suit"))?;
        self.game.add_card_to_hand(Card::new(suit, rank));
        Ok(())
    }

    pub fn debug_add_power_up(&self, name: &str) -> Result<u32, JsValue> {
        let tarot = Tarot::ALL
            .into_iter()
            .find(|tarot| tarot.name() == name)
            .ok_or_else(|| JsValue::from_str("unknown tarot card"))?;
        self.game
            .add_power_up(tarot)
            .map(|slot| slot as u32)
            .map_err(js_err)
    }

    pub fn debug_adjust_tokens(&self, delta: i32) {
        self.game.adjust_tokens(delta);
    }

    pub fn debug_adjust_wins(&self, delta: i32) {
        self.game.adjust_wins(delta);
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            message: self.game.message(),
            player: JsHand::from_hand(&self.game.player_hand()),
            dealer: JsHand::from_hand(&self.game.dealer_hand()),
            selection: self
                .game
                .selection()
                .into_iter()
                .map(|index| index as u32)
                .collect(),
            economy: JsEconomy::from(self.game.economy()),
            inventory: self
                .game
                .inventory()
                .slots()
                .iter()
                .map(|slot| slot.map(tarot_to_js))
                .collect(),
            tarot_offer: self.game.tarot_offer().into_iter().map(tarot_to_js).collect(),
            history: self
                .game
                .history()
                .into_iter()
                .map(JsHistoryEntry::from)
                .collect(),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

fn new_game(seed: u32, tarot: bool) -> Game {
    Game::new(GameOptions::default().with_tarot(tarot), u64::from(seed))
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    message: String,
    player: JsHand,
    dealer: JsHand,
    selection: Vec<u32>,
    economy: JsEconomy,
    inventory: Vec<Option<JsTarot>>,
    tarot_offer: Vec<JsTarot>,
    history: Vec<JsHistoryEntry>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<Option<JsCard>>,
    value: u8,
    is_soft: bool,
    is_bust: bool,
}

impl JsHand {
    fn from_hand(hand: &Hand) -> Self {
        Self {
            cards: hand
                .cards()
                .iter()
                .map(|card| card.face_up.then(|| card_to_js(*card)))
                .collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsTarot {
    name: &'static str,
    effect: &'static str,
}

#[derive(Serialize)]
struct JsEconomy {
    wins: u32,
    streak: u32,
    tokens: u32,
    wins_until_refill: u32,
    wins_until_tarot: u32,
}

impl From<Economy> for JsEconomy {
    fn from(economy: Economy) -> Self {
        Self {
            wins: economy.wins,
            streak: economy.streak,
            tokens: economy.tokens,
            wins_until_refill: economy.wins_until_refill,
            wins_until_tarot: economy.wins_until_tarot,
        }
    }
}

#[derive(Serialize)]
struct JsOutcome {
    winner: &'static str,
    reason: &'static str,
    player_score: u8,
    dealer_score: u8,
    tokens_awarded: u32,
    tarot_offered: bool,
}

impl From<RoundOutcome> for JsOutcome {
    fn from(outcome: RoundOutcome) -> Self {
        Self {
            winner: winner_to_str(outcome.winner),
            reason: reason_to_str(outcome.reason),
            player_score: outcome.player_score,
            dealer_score: outcome.dealer_score,
            tokens_awarded: outcome.tokens_awarded,
            tarot_offered: outcome.tarot_offered,
        }
    }
}

#[derive(Serialize)]
struct JsDealerPlay {
    drawn: Vec<JsCard>,
    outcome: JsOutcome,
}

#[derive(Serialize)]
struct JsHistoryEntry {
    winner: &'static str,
    reason: &'static str,
    player_score: u8,
    dealer_score: u8,
    player_hand: Vec<JsCard>,
    dealer_hand: Vec<JsCard>,
}

impl From<HistoryEntry> for JsHistoryEntry {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            winner: winner_to_str(entry.winner),
            reason: reason_to_str(entry.reason),
            player_score: entry.player_score,
            dealer_score: entry.dealer_score,
            player_hand: entry.player_hand.into_iter().map(card_to_js).collect(),
            dealer_hand: entry.dealer_hand.into_iter().map(card_to_js).collect(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn tarot_to_js(tarot: Tarot) -> JsTarot {
    JsTarot {
        name: tarot.name(),
        effect: tarot.effect(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn suit_from_str(suit: &str) -> Option<Suit> {
    Suit::ALL
        .into_iter()
        .find(|candidate| suit_to_str(*candidate).eq_ignore_ascii_case(suit))
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::Playing => "Playing",
        RoundState::DealerTurn => "DealerTurn",
        RoundState::Result => "Result",
        RoundState::TarotSelection => "TarotSelection",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Dealer => "Dealer",
        Winner::Push => "Push",
    }
}

fn reason_to_str(reason: Reason) -> &'static str {
    match reason {
        Reason::Blackjack => "Blackjack",
        Reason::BothBlackjack => "BothBlackjack",
        Reason::PlayerBust => "PlayerBust",
        Reason::DealerBust => "DealerBust",
        Reason::HigherScore => "HigherScore",
        Reason::EqualScores => "EqualScores",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
