//! Typed errors, one enum per round phase.

use thiserror::Error;

/// Failures when seating or unseating players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No player with that ID is seated.
    #[error("no such player at the table")]
    PlayerNotFound,
    /// Cards are out; players may only leave between rounds or while betting.
    #[error("cannot leave while cards are in play")]
    RoundInProgress,
    /// Every player ID is taken.
    #[error("the table is full")]
    TableFull,
}

/// Failures when placing a wager or setting betting preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// No player with that ID is seated.
    #[error("no such player at the table")]
    PlayerNotFound,
    /// The wager exceeds the player's wallet.
    #[error("you cannot bet more than you have in your wallet")]
    InsufficientFunds,
    /// Bets are not being collected.
    #[error("bets are not being taken right now")]
    InvalidState,
    /// The wager is under the table minimum.
    #[error("you must bet at least the table minimum of {minimum}")]
    BelowMinimum {
        /// Smallest accepted wager.
        minimum: usize,
    },
    /// Maximum bet preference is below the minimum.
    #[error("maximum bet must not be below the minimum bet")]
    InvalidRange,
}

/// Failures when dealing the opening cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards can only be dealt once betting is open.
    #[error("betting has not been opened")]
    InvalidState,
    /// Nobody is seated.
    #[error("no players are seated")]
    NoPlayers,
    /// A seated player has not placed a bet.
    #[error("player {0} has not placed a bet")]
    BetsOutstanding(u8),
    /// The shoe ran out even after reshuffling.
    #[error("shoe is out of cards")]
    NotEnoughCards,
}

/// Failures of hit, stand, double down and split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Players are not acting right now.
    #[error("players are not acting right now")]
    InvalidState,
    /// Another hand has the turn.
    #[error("it is not this hand's turn")]
    NotYourTurn,
    /// No player with that ID is seated.
    #[error("no such player at the table")]
    PlayerNotFound,
    /// The player holds no hand at that index.
    #[error("no such hand")]
    HandNotFound,
    /// The hand has already stood or busted.
    #[error("hand is finished")]
    HandNotActive,
    /// Doubling is only allowed as the hand's first decision.
    #[error("doubling is only allowed as the first decision")]
    CannotDouble,
    /// Only two cards of the same rank can be split.
    #[error("only a pair can be split")]
    CannotSplit,
    /// The wallet cannot cover another wager equal to the hand's bet.
    #[error("wallet cannot cover another wager")]
    InsufficientFunds,
    /// The shoe is empty.
    #[error("shoe is out of cards")]
    NoCards,
}

/// Failures while the dealer plays or hands are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Called before the previous phase finished.
    #[error("round is not ready for this step")]
    InvalidState,
    /// The shoe ran dry while the dealer had to draw.
    #[error("shoe is out of cards")]
    NoCards,
}

/// Failure when closing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CleanupError {
    /// The round has not been settled yet.
    #[error("round has not been settled")]
    InvalidState,
}

/// Failures when asking for training or counting advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdviceError {
    /// Training mode is off.
    #[error("training mode is not enabled")]
    TrainingDisabled,
    /// Counting mode is off.
    #[error("counting mode is not enabled")]
    CountingDisabled,
    /// No player with that ID is seated.
    #[error("no such player at the table")]
    PlayerNotFound,
    /// The player has no hand awaiting a decision.
    #[error("no hand is awaiting a decision")]
    NoActiveHand,
    /// The hand or upcard falls outside the strategy tables.
    #[error("hand is outside the strategy tables")]
    UnrecognizedHand,
}

/// Failure when arranging the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The requested card is in neither the undealt nor the discard pile.
    #[error("card is not available in the shoe")]
    CardUnavailable,
}
