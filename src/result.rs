//! Settlement records returned by [`Game::settle`](crate::Game::settle).

use alloc::vec::Vec;

/// How a hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Beat the dealer's total, or the dealer busted.
    Win,
    /// Busted, or the dealer finished closer to 21.
    Lose,
    /// Same total as the dealer; the wager comes back.
    Push,
    /// Two-card 21 that the dealer did not tie.
    Blackjack,
}

/// Settlement of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Position of the hand among the player's hands.
    pub hand_index: usize,
    /// What happened.
    pub outcome: HandOutcome,
    /// Wager riding on the hand, doubled if the hand doubled down.
    pub bet: usize,
    /// Amount credited back to the wallet, stake included.
    pub payout: usize,
    /// Final hand total.
    pub player_value: u8,
    /// Final dealer total.
    pub dealer_value: u8,
}

/// Settlement of every hand a player held.
#[derive(Debug, Clone)]
pub struct PlayerResult {
    /// Seat the results belong to.
    pub player_id: u8,
    /// One entry per hand, in hand order.
    pub hands: Vec<HandResult>,
    /// Sum of the hand payouts.
    pub total_payout: usize,
    /// Payout minus everything wagered this round.
    pub net: isize,
    /// Wallet after the payout.
    pub wallet: usize,
}

/// Everything [`Game::settle`](crate::Game::settle) decided.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Seated players in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether that total exceeds 21.
    pub dealer_bust: bool,
    /// Running count with the hole card included.
    pub running_count: i32,
}
