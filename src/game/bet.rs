use alloc::vec::Vec;
use tracing::{debug, info};

use crate::error::{BetError, DealError};

use super::{Game, GameState, TurnPosition};

impl Game {
    /// Opens betting for the next round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is between rounds.
    pub fn start_betting(&self) -> Result<(), BetError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(BetError::InvalidState);
        }
        *state = GameState::CollectBets;
        Ok(())
    }

    /// Places a bet for the specified player.
    ///
    /// Betting again in the same round replaces the earlier bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not collecting bets, the player cannot
    /// be found, the bet is below the table minimum, or the player lacks
    /// funds.
    pub fn bet(&self, player_id: u8, amount: usize) -> Result<(), BetError> {
        if *self.state.lock() != GameState::CollectBets {
            return Err(BetError::InvalidState);
        }

        let minimum = self.options.table_minimum;
        if amount < minimum {
            return Err(BetError::BelowMinimum { minimum });
        }

        let mut players = self.players.lock();
        let player = players.get_mut(&player_id).ok_or(BetError::PlayerNotFound)?;

        let available = player.wallet() + player.current_bet();
        if amount > available {
            return Err(BetError::InsufficientFunds);
        }

        let previous = player.current_bet();
        player.credit(previous);
        player
            .debit(amount)
            .map_err(|_| BetError::InsufficientFunds)?;
        player.set_current_bet(amount);

        debug!(player_id, amount, wallet = player.wallet(), "bet placed");
        Ok(())
    }

    /// Records a player's betting preferences for counting advice.
    ///
    /// The betting unit is a tenth of the spread between `min_bet` and
    /// `max_bet`. Returns the unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, `min_bet` is below the
    /// table minimum, or `max_bet` is below `min_bet`.
    pub fn set_betting_preferences(
        &self,
        player_id: u8,
        min_bet: usize,
        max_bet: usize,
    ) -> Result<usize, BetError> {
        let minimum = self.options.table_minimum;
        if min_bet < minimum {
            return Err(BetError::BelowMinimum { minimum });
        }
        if max_bet < min_bet {
            return Err(BetError::InvalidRange);
        }

        let unit = (max_bet - min_bet) / 10;
        self.players
            .lock()
            .get_mut(&player_id)
            .ok_or(BetError::PlayerNotFound)?
            .set_betting_preferences(min_bet, unit);
        Ok(unit)
    }

    /// Deals initial cards to all players and the dealer.
    ///
    /// Last round's hands are discarded first, and the whole shoe is
    /// reshuffled if it has fewer than `reshuffle_cards_per_seat` cards for
    /// every seat, dealer included. Cards go round the table twice; the
    /// dealer's first card (the hole card) is dealt without counting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not collecting bets, nobody is seated,
    /// a seated player has not bet, or there are not enough cards in the
    /// shoe.
    pub fn deal(&self) -> Result<(), DealError> {
        if *self.state.lock() != GameState::CollectBets {
            return Err(DealError::InvalidState);
        }

        let seats: Vec<u8> = self.seats.lock().clone();
        if seats.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let mut shoe = self.shoe.lock();
        let mut players = self.players.lock();
        let mut dealer = self.dealer.lock();

        for &player_id in &seats {
            let player = players.get(&player_id).ok_or(DealError::InvalidState)?;
            if player.current_bet() == 0 {
                return Err(DealError::BetsOutstanding(player_id));
            }
        }

        for player in players.values_mut() {
            shoe.discard(player.clear_hands());
        }
        shoe.discard(dealer.clear_hands());

        let seat_count = seats.len() + 1;
        if shoe.remaining() < seat_count * self.options.reshuffle_cards_per_seat {
            shoe.reshuffle_all();
            info!(remaining = shoe.remaining(), "shoe reshuffled before the deal");
        }
        if shoe.remaining() < seat_count * 2 {
            return Err(DealError::NotEnoughCards);
        }

        for round in 0..2 {
            for player_id in &seats {
                let card = shoe.deal().ok_or(DealError::NotEnoughCards)?;
                if let Some(player) = players.get_mut(player_id) {
                    player.receive_card(card, 0);
                }
            }

            let card = if round == 0 {
                shoe.deal_silent()
            } else {
                shoe.deal()
            };
            dealer.receive_card(card.ok_or(DealError::NotEnoughCards)?, 0);
        }

        debug!(
            players = seats.len(),
            running_count = shoe.running_count(),
            "initial cards dealt"
        );
        drop(dealer);
        drop(players);
        drop(shoe);

        *self.current_turn.lock() = TurnPosition {
            player_index: 0,
            hand_index: 0,
        };
        *self.state.lock() = GameState::PlayerActions;
        self.advance_turn();

        Ok(())
    }
}
