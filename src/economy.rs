//! Win counters, discard tokens and reward countdowns.

use crate::options::GameOptions;

/// Rewards earned by a single win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinReward {
    /// Discard tokens granted by this win.
    pub tokens: u32,
    /// Whether the tarot countdown ran out on this win.
    pub tarot_due: bool,
}

/// Counters carried between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Economy {
    /// Cumulative wins, reset by a loss.
    pub wins: u32,
    /// Consecutive rounds won since the last loss.
    pub streak: u32,
    /// Discard tokens available.
    pub tokens: u32,
    /// Wins left until the next token refill.
    pub wins_until_refill: u32,
    /// Wins left until the next tarot reward.
    pub wins_until_tarot: u32,
}

impl Economy {
    /// Creates the counters for a new session.
    #[must_use]
    pub const fn new(options: &GameOptions) -> Self {
        Self {
            wins: 0,
            streak: 0,
            tokens: options.starting_tokens,
            wins_until_refill: options.refill_every,
            wins_until_tarot: options.tarot_every,
        }
    }

    /// Credits a win and runs the reward countdowns.
    pub fn record_win(&mut self, options: &GameOptions) -> WinReward {
        self.wins = self.wins.saturating_add(1);
        self.streak = self.streak.saturating_add(1);

        let mut reward = WinReward::default();

        self.wins_until_refill = self.wins_until_refill.saturating_sub(1);
        if self.wins_until_refill == 0 {
            self.tokens = self.tokens.saturating_add(options.refill_amount);
            self.wins_until_refill = options.refill_every;
            reward.tokens = options.refill_amount;
        }

        if options.tarot {
            self.wins_until_tarot = self.wins_until_tarot.saturating_sub(1);
            if self.wins_until_tarot == 0 {
                self.wins_until_tarot = options.tarot_every;
                reward.tarot_due = true;
            }
        }

        reward
    }

    /// Ends the streak. Tokens and countdowns are kept.
    pub const fn record_loss(&mut self) {
        self.wins = 0;
        self.streak = 0;
    }

    /// Spends one discard token. Returns `false` if none are left.
    #[must_use]
    pub const fn spend_token(&mut self) -> bool {
        if self.tokens == 0 {
            return false;
        }
        self.tokens -= 1;
        true
    }
}
