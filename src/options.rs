//! Table configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Advisory modes are explicit configuration: the engine only answers
/// strategy or counting questions when the matching mode is enabled.
///
/// ```
/// use bjzen::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_table_minimum(25)
///     .with_counting_mode(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Smallest accepted wager; players below it are removed after a round.
    pub table_minimum: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Undealt cards required per seat (dealer included) before a deal;
    /// below that the whole shoe is reshuffled.
    pub reshuffle_cards_per_seat: usize,
    /// Whether counting advice is offered.
    pub counting_mode: bool,
    /// Whether basic-strategy advice is offered.
    pub training_mode: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            table_minimum: 100,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            reshuffle_cards_per_seat: 5,
            counting_mode: false,
            training_mode: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table minimum.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_minimum(10);
    /// assert_eq!(options.table_minimum, 10);
    /// ```
    #[must_use]
    pub const fn with_table_minimum(mut self, minimum: usize) -> Self {
        self.table_minimum = minimum;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets how many undealt cards each seat needs before a deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_cards_per_seat(8);
    /// assert_eq!(options.reshuffle_cards_per_seat, 8);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_cards_per_seat(mut self, cards: usize) -> Self {
        self.reshuffle_cards_per_seat = cards;
        self
    }

    /// Enables or disables counting advice.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::GameOptions;
    ///
    /// let options = GameOptions::default().with_counting_mode(true);
    /// assert!(options.counting_mode);
    /// ```
    #[must_use]
    pub const fn with_counting_mode(mut self, enabled: bool) -> Self {
        self.counting_mode = enabled;
        self
    }

    /// Enables or disables basic-strategy advice.
    ///
    /// # Example
    ///
    /// ```
    /// use bjzen::GameOptions;
    ///
    /// let options = GameOptions::default().with_training_mode(true);
    /// assert!(options.training_mode);
    /// ```
    #[must_use]
    pub const fn with_training_mode(mut self, enabled: bool) -> Self {
        self.training_mode = enabled;
        self
    }
}
