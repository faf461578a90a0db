//! Zen card counting and bet sizing advice.

use crate::card::{CardValue, Rank};

/// Returns the Zen count delta for a card of the given rank.
///
/// Twos, threes and sevens add one; fours, fives and sixes add two; eights
/// and nines are neutral; tens and faces subtract two; aces subtract one.
#[must_use]
pub const fn zen_delta(rank: Rank) -> i32 {
    match rank.value() {
        CardValue::Ace => -1,
        CardValue::Pips(10) => -2,
        CardValue::Pips(8 | 9) => 0,
        CardValue::Pips(4..=6) => 2,
        CardValue::Pips(_) => 1,
    }
}

/// How favourable the remaining shoe is for the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountTier {
    /// More low cards than high cards remain; bet the minimum.
    Cold,
    /// High cards dominate; blackjacks and dealer busts become likely.
    Warm,
    /// The shoe is stacked with high cards.
    Hot,
}

impl CountTier {
    /// Classifies a running count.
    #[must_use]
    pub const fn from_count(count: i32) -> Self {
        if count <= 1 {
            Self::Cold
        } else if count <= 10 {
            Self::Warm
        } else {
            Self::Hot
        }
    }
}

/// Suggests a wager for the given running count.
///
/// Cold shoes bet `min_bet`. Warm shoes add one `unit` per point of count.
/// Hot shoes cap the linear part at ten units and add one more unit for every
/// three points.
#[must_use]
pub const fn recommended_bet(count: i32, min_bet: usize, unit: usize) -> usize {
    match CountTier::from_count(count) {
        CountTier::Cold => min_bet,
        CountTier::Warm => min_bet + unit * count as usize,
        CountTier::Hot => min_bet + unit * 10 + unit * (count / 3) as usize,
    }
}

/// Counting-mode advice for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingAdvice {
    /// The shoe's running count.
    pub running_count: i32,
    /// The tier the count falls in.
    pub tier: CountTier,
    /// Suggested wager from the player's betting preferences.
    pub recommended_bet: usize,
}
