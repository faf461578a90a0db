//! Round state types.

/// Round state.
///
/// A round moves strictly forward through these states; the engine is the
/// only thing that moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; players may join or leave.
    WaitingForPlayers,
    /// Accepting bets for the next round.
    CollectBets,
    /// Waiting for player decisions, one hand at a time.
    PlayerActions,
    /// Dealer plays out their hand.
    DealerAction,
    /// Hands are ready to be settled against the dealer.
    Settlement,
    /// Payouts are done; broke players are removed on cleanup.
    Cleanup,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the seating order.
    pub player_index: usize,
    /// Index into the player's hands (for splits).
    pub hand_index: usize,
}

/// A decision a player can take on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the wager and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

/// The decisions available on the hand whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalActions {
    /// Hit is allowed.
    pub hit: bool,
    /// Stand is allowed.
    pub stand: bool,
    /// Double down is allowed.
    pub double: bool,
    /// Split is allowed.
    pub split: bool,
}

impl LegalActions {
    /// Returns whether `action` is allowed.
    #[must_use]
    pub const fn allows(&self, action: Action) -> bool {
        match action {
            Action::Hit => self.hit,
            Action::Stand => self.stand,
            Action::Double => self.double,
            Action::Split => self.split,
        }
    }
}

/// What a performed action produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The card dealt by a hit.
    Hit(crate::card::Card),
    /// The hand stood.
    Stand,
    /// The single card dealt after doubling.
    Double(crate::card::Card),
    /// Indices of the original and the new hand after a split.
    Split(usize, usize),
}
