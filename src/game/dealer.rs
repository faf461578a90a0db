use alloc::vec::Vec;
use tracing::{debug, info};

use crate::card::Card;
use crate::error::{CleanupError, ShowdownError};
use crate::hand::Hand;
use crate::options::RoundingMode;
use crate::player::Player;
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};

use super::{Game, GameState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Dealer stands once the total reaches this value.
const DEALER_STANDS_AT: u8 = 17;

impl Game {
    /// Plays out the dealer's hand.
    ///
    /// The dealer draws while the total is below 17. The hand total already
    /// counts a soft ace as 11, so the dealer stands on soft 17. Once done,
    /// the hole card is added to the running count.
    ///
    /// Returns the cards drawn, in order.
    ///
    /// # Errors
    ///
    /// Returns an error unless every player hand has finished, or if the shoe
    /// runs dry while the dealer must draw.
    pub fn dealer_play(&self) -> Result<Vec<Card>, ShowdownError> {
        if *self.state.lock() != GameState::DealerAction {
            return Err(ShowdownError::InvalidState);
        }

        let mut shoe = self.shoe.lock();
        let mut dealer = self.dealer.lock();
        let mut drawn = Vec::new();

        while dealer.hand().map_or(0, Hand::value) < DEALER_STANDS_AT {
            let card = shoe.deal().ok_or(ShowdownError::NoCards)?;
            dealer.receive_card(card, 0);
            drawn.push(card);
        }

        if let Some(&hole) = dealer.hand().and_then(|hand| hand.cards().first()) {
            shoe.reveal(hole);
        }

        debug!(
            total = dealer.hand().map_or(0, Hand::value),
            drawn = drawn.len(),
            running_count = shoe.running_count(),
            "dealer finished"
        );
        drop(dealer);
        drop(shoe);

        *self.state.lock() = GameState::Settlement;

        Ok(drawn)
    }

    /// Settles one hand against the dealer's total.
    fn settle_hand(&self, hand: &Hand, dealer_value: u8) -> (HandOutcome, usize) {
        let bet = hand.bet();
        let player_value = hand.value();

        if player_value > 21 || (dealer_value <= 21 && dealer_value > player_value) {
            (HandOutcome::Lose, 0)
        } else if dealer_value == player_value {
            (HandOutcome::Push, bet)
        } else if hand.is_natural() {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * self.options.blackjack_pays;
            let bonus = round_amount(winnings, self.options.rounding_blackjack);
            (HandOutcome::Blackjack, bet + bonus)
        } else {
            (HandOutcome::Win, bet * 2)
        }
    }

    /// Settles every hand and pays out.
    ///
    /// For each hand, in order: a bust loses; a dealer total at most 21 and
    /// above the player's loses; equal totals push and refund the wager; a
    /// two-card 21 pays the blackjack ratio on top of the wager; anything
    /// else wins even money.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn settle(&self) -> Result<RoundResult, ShowdownError> {
        if *self.state.lock() != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = self.dealer.lock();
        let dealer_value = dealer.hand().map_or(0, Hand::value);
        let dealer_bust = dealer_value > 21;
        drop(dealer);

        let seats = self.seats.lock();
        let mut players = self.players.lock();
        let mut player_results = Vec::new();

        for &player_id in seats.iter() {
            let Some(player) = players.get_mut(&player_id) else {
                continue;
            };
            if player.hands().is_empty() {
                continue;
            }

            let mut hand_results = Vec::new();
            let mut total_payout: usize = 0;

            for (hand_index, hand) in player.hands().iter().enumerate() {
                let (outcome, payout) = self.settle_hand(hand, dealer_value);
                total_payout += payout;

                hand_results.push(HandResult {
                    hand_index,
                    outcome,
                    bet: hand.bet(),
                    payout,
                    player_value: hand.value(),
                    dealer_value,
                });
            }

            let total_bet = player.sum_bets();
            player.credit(total_payout);

            #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
            let net = total_payout as isize - total_bet as isize;

            debug!(
                player_id,
                total_payout,
                net,
                wallet = player.wallet(),
                "player settled"
            );
            player_results.push(PlayerResult {
                player_id,
                hands: hand_results,
                total_payout,
                net,
                wallet: player.wallet(),
            });
        }
        drop(players);
        drop(seats);

        let running_count = self.running_count();
        info!(dealer_value, dealer_bust, running_count, "round settled");
        *self.state.lock() = GameState::Cleanup;

        Ok(RoundResult {
            players: player_results,
            dealer_value,
            dealer_bust,
            running_count,
        })
    }

    /// Closes the round.
    ///
    /// Players who can no longer cover the table minimum leave the table and
    /// their cards go to the discard pile. Everyone else keeps their hands on
    /// display until the next deal. Returns the removed players.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn finish_round(&self) -> Result<Vec<(u8, Player)>, CleanupError> {
        if *self.state.lock() != GameState::Cleanup {
            return Err(CleanupError::InvalidState);
        }

        let minimum = self.options.table_minimum;
        let mut shoe = self.shoe.lock();
        let mut seats = self.seats.lock();
        let mut players = self.players.lock();

        let mut removed = Vec::new();
        seats.retain(|player_id| {
            let Some(player) = players.get_mut(player_id) else {
                return false;
            };
            player.set_current_bet(0);
            if player.wallet() >= minimum {
                return true;
            }

            shoe.discard(player.clear_hands());
            if let Some(player) = players.remove(player_id) {
                info!(player_id, wallet = player.wallet(), "player below table minimum removed");
                removed.push((*player_id, player));
            }
            false
        });
        drop(players);
        drop(seats);
        drop(shoe);

        *self.state.lock() = GameState::WaitingForPlayers;
        Ok(removed)
    }
}
