use crate::counting::{CountTier, CountingAdvice, recommended_bet};
use crate::error::AdviceError;
use crate::strategy::{Advice, Recommendation};

use super::Game;

impl Game {
    /// Looks up basic strategy for the player's current hand.
    ///
    /// Only the dealer's upcard is consulted; the hole card stays hidden.
    /// Asking for advice does not use up the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if training mode is off, the player has no hand
    /// awaiting a decision, or the hand falls outside the strategy tables.
    pub fn strategy_advice(&self, player_id: u8) -> Result<Advice, AdviceError> {
        if !self.options.training_mode {
            return Err(AdviceError::TrainingDisabled);
        }
        if self.current_player() != Some(player_id) {
            return Err(AdviceError::NoActiveHand);
        }

        let upcard = self.dealer_upcard().ok_or(AdviceError::NoActiveHand)?;
        let hand_index = self.current_turn().hand_index;

        let players = self.players.lock();
        let hand = players
            .get(&player_id)
            .ok_or(AdviceError::PlayerNotFound)?
            .hands()
            .get(hand_index)
            .ok_or(AdviceError::NoActiveHand)?;
        hand.basic_strategy(upcard.value())
    }

    /// Resolves basic strategy against the actions the player can take now.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Game::strategy_advice`].
    pub fn training_hint(&self, player_id: u8) -> Result<Recommendation, AdviceError> {
        let advice = self.strategy_advice(player_id)?;
        let legal = self
            .legal_actions(player_id)
            .map_err(|_| AdviceError::NoActiveHand)?;
        Ok(advice.resolve(legal.double, legal.split))
    }

    /// Reports the running count and a bet sized from the player's betting
    /// preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if counting mode is off or the player is not seated.
    pub fn counting_advice(&self, player_id: u8) -> Result<CountingAdvice, AdviceError> {
        if !self.options.counting_mode {
            return Err(AdviceError::CountingDisabled);
        }

        let running_count = self.running_count();
        let players = self.players.lock();
        let player = players.get(&player_id).ok_or(AdviceError::PlayerNotFound)?;

        Ok(CountingAdvice {
            running_count,
            tier: CountTier::from_count(running_count),
            recommended_bet: recommended_bet(
                running_count,
                player.min_bet(),
                player.betting_unit(),
            ),
        })
    }

    /// Returns the tier of the current running count.
    ///
    /// # Errors
    ///
    /// Returns an error if counting mode is off.
    pub fn count_tier(&self) -> Result<CountTier, AdviceError> {
        if !self.options.counting_mode {
            return Err(AdviceError::CountingDisabled);
        }
        Ok(CountTier::from_count(self.running_count()))
    }
}
