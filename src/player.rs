//! Players, their bankrolls and split hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

/// A seat at the table: a bankroll and the hands played this round.
///
/// The dealer is a player with a single hand that never bets.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    wallet: usize,
    current_bet: usize,
    min_bet: usize,
    betting_unit: usize,
    hands: Vec<Hand>,
}

impl Player {
    /// Creates a player with the given bankroll.
    #[must_use]
    pub fn new(name: impl Into<String>, wallet: usize) -> Self {
        Self {
            name: name.into(),
            wallet,
            current_bet: 0,
            min_bet: 0,
            betting_unit: 0,
            hands: Vec::new(),
        }
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self::new("Dealer", 0)
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bankroll not currently wagered.
    #[must_use]
    pub const fn wallet(&self) -> usize {
        self.wallet
    }

    /// Returns the wager placed for the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the minimum bet used for counting advice.
    #[must_use]
    pub const fn min_bet(&self) -> usize {
        self.min_bet
    }

    /// Returns the betting unit used for counting advice.
    #[must_use]
    pub const fn betting_unit(&self) -> usize {
        self.betting_unit
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the first hand (the dealer's only hand).
    #[must_use]
    pub fn hand(&self) -> Option<&Hand> {
        self.hands.first()
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns the sum of the wagers on all hands.
    #[must_use]
    pub fn sum_bets(&self) -> usize {
        self.hands.iter().map(Hand::bet).sum()
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.wallet += amount;
    }

    pub(crate) fn debit(&mut self, amount: usize) -> Result<(), ActionError> {
        self.wallet = self
            .wallet
            .checked_sub(amount)
            .ok_or(ActionError::InsufficientFunds)?;
        Ok(())
    }

    pub(crate) const fn set_current_bet(&mut self, amount: usize) {
        self.current_bet = amount;
    }

    pub(crate) const fn set_betting_preferences(&mut self, min_bet: usize, betting_unit: usize) {
        self.min_bet = min_bet;
        self.betting_unit = betting_unit;
    }

    /// Gives a card to the hand at `hand_index`.
    ///
    /// If no hand exists there yet, a new hand is opened with the card and
    /// the current bet. Returns the index of the hand that took the card.
    pub fn receive_card(&mut self, card: Card, hand_index: usize) -> usize {
        if let Some(hand) = self.hands.get_mut(hand_index) {
            hand.add_card(card);
            hand_index
        } else {
            self.hands.push(Hand::with_card(card, self.current_bet));
            self.hands.len() - 1
        }
    }

    /// Checks that the hand at `hand_index` may be split.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist, is not a pair, or the
    /// bankroll cannot cover a second wager.
    pub fn can_split(&self, hand_index: usize) -> Result<(), ActionError> {
        let hand = self
            .hands
            .get(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        if !hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }
        if self.wallet < hand.bet() {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(())
    }

    /// Splits the pair at `hand_index` into two hands.
    ///
    /// The second card moves to a new hand appended after the others, with
    /// the same wager. `card_a` then goes to the original hand and `card_b`
    /// to the new one. Returns `(original, new)` hand indices. The bankroll
    /// is not touched; the engine debits the second wager.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Player::can_split`].
    pub fn split(
        &mut self,
        hand_index: usize,
        card_a: Card,
        card_b: Card,
    ) -> Result<(usize, usize), ActionError> {
        self.can_split(hand_index)?;

        let hand = &mut self.hands[hand_index];
        let moved = hand.take_split_card().ok_or(ActionError::CannotSplit)?;
        let bet = hand.bet();
        hand.add_card(card_a);

        let mut sibling = Hand::with_card(moved, bet);
        sibling.add_card(card_b);
        self.hands.push(sibling);

        Ok((hand_index, self.hands.len() - 1))
    }

    /// Removes all hands and returns their cards for discarding.
    pub fn clear_hands(&mut self) -> Vec<Card> {
        self.hands.drain(..).flat_map(Hand::into_cards).collect()
    }
}
