//! Game configuration options.

/// Configuration options for the round engine.
///
/// All balance constants live here. Use the builder pattern to customize
/// them:
///
/// ```
/// use tarotjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hard_bust(30)
///     .with_refill_every(4)
///     .with_tarot(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Discard tokens held when the engine is created.
    pub starting_tokens: u32,
    /// Wins needed for each discard-token refill.
    pub refill_every: u32,
    /// Tokens granted per refill.
    pub refill_amount: u32,
    /// Score at which hitting is refused until a discard.
    pub hard_bust: u8,
    /// Dealer draws while below this score.
    pub dealer_stands_on: u8,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
    /// Whether tarot cards are awarded (the extended variant).
    pub tarot: bool,
    /// Wins needed for each tarot reward.
    pub tarot_every: u32,
    /// Number of distinct tarot cards offered per reward.
    pub tarot_offer_size: usize,
    /// Number of tarot inventory slots.
    pub inventory_slots: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_tokens: 5,
            refill_every: 3,
            refill_amount: 5,
            hard_bust: 32,
            dealer_stands_on: 17,
            history_limit: 10,
            tarot: true,
            tarot_every: 5,
            tarot_offer_size: 2,
            inventory_slots: 2,
        }
    }
}

impl GameOptions {
    /// Sets the starting discard tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use tarotjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_tokens(0);
    /// assert_eq!(options.starting_tokens, 0);
    /// ```
    #[must_use]
    pub const fn with_starting_tokens(mut self, tokens: u32) -> Self {
        self.starting_tokens = tokens;
        self
    }

    /// Sets how many wins earn a token refill.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn with_refill_every(mut self, wins: u32) -> Self {
        self.refill_every = if wins == 0 { 1 } else { wins };
        self
    }

    /// Sets the number of tokens granted per refill.
    #[must_use]
    pub const fn with_refill_amount(mut self, tokens: u32) -> Self {
        self.refill_amount = tokens;
        self
    }

    /// Sets the hard-bust threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use tarotjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_hard_bust(28);
    /// assert_eq!(options.hard_bust, 28);
    /// ```
    #[must_use]
    pub const fn with_hard_bust(mut self, score: u8) -> Self {
        self.hard_bust = score;
        self
    }

    /// Sets the score the dealer stands on.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets the number of history entries kept.
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Enables or disables tarot rewards.
    ///
    /// # Example
    ///
    /// ```
    /// use tarotjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_tarot(false);
    /// assert!(!options.tarot);
    /// ```
    #[must_use]
    pub const fn with_tarot(mut self, enabled: bool) -> Self {
        self.tarot = enabled;
        self
    }

    /// Sets how many wins earn a tarot reward.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn with_tarot_every(mut self, wins: u32) -> Self {
        self.tarot_every = if wins == 0 { 1 } else { wins };
        self
    }

    /// Sets how many tarot cards are offered per reward.
    #[must_use]
    pub const fn with_tarot_offer_size(mut self, size: usize) -> Self {
        self.tarot_offer_size = size;
        self
    }

    /// Sets the number of inventory slots.
    #[must_use]
    pub const fn with_inventory_slots(mut self, slots: usize) -> Self {
        self.inventory_slots = slots;
        self
    }
}
