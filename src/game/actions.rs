use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::player::Player;

use super::{Action, ActionOutcome, Game, GameState, LegalActions};

impl Game {
    fn ensure_player_turn(&self, player_id: u8, hand_index: usize) -> Result<(), ActionError> {
        if *self.state.lock() != GameState::PlayerActions {
            return Err(ActionError::InvalidState);
        }

        if !self.is_player_turn(player_id, hand_index) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Whether `hand_index` of `player_id` is the hand being played.
    fn is_player_turn(&self, player_id: u8, hand_index: usize) -> bool {
        let turn = self.current_turn.lock();
        let seats = self.seats.lock();

        seats
            .get(turn.player_index)
            .is_some_and(|&current| current == player_id && turn.hand_index == hand_index)
    }

    /// Returns the decisions available to the player on their current hand.
    ///
    /// Hit and stand are always available. Doubling needs the hand's first
    /// decision and a bankroll covering its wager; splitting needs a pair and
    /// the same bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if no player is acting or it is not this player's
    /// turn.
    pub fn legal_actions(&self, player_id: u8) -> Result<LegalActions, ActionError> {
        let hand_index = self.current_turn().hand_index;
        self.ensure_player_turn(player_id, hand_index)?;

        let players = self.players.lock();
        let player = players.get(&player_id).ok_or(ActionError::PlayerNotFound)?;
        legal_actions_for(player, hand_index)
    }

    /// Performs `action` on the given hand.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn perform(
        &self,
        player_id: u8,
        hand_index: usize,
        action: Action,
    ) -> Result<ActionOutcome, ActionError> {
        match action {
            Action::Hit => self.hit(player_id, hand_index).map(ActionOutcome::Hit),
            Action::Stand => self
                .stand(player_id, hand_index)
                .map(|()| ActionOutcome::Stand),
            Action::Double => self
                .double_down(player_id, hand_index)
                .map(ActionOutcome::Double),
            Action::Split => self
                .split(player_id, hand_index)
                .map(|(original, new)| ActionOutcome::Split(original, new)),
        }
    }

    /// Deals one more card to the hand.
    ///
    /// The hand keeps the turn unless the card busts it; reaching 21 does
    /// not end it.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not acting, another hand has the
    /// turn, the hand is finished, or the shoe is empty.
    pub fn hit(&self, player_id: u8, hand_index: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player_id, hand_index)?;

        let mut shoe = self.shoe.lock();
        let mut players = self.players.lock();
        let hand = players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        if hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        let card = shoe.deal().ok_or(ActionError::NoCards)?;
        let total = hand.add_card(card);
        hand.mark_acted();
        debug!(player_id, hand_index, %card, total, "hit");

        drop(players);
        drop(shoe);
        self.advance_turn();

        Ok(card)
    }

    /// Ends the hand at its current total and passes the turn on.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not acting, another hand has the
    /// turn, or the hand is finished.
    pub fn stand(&self, player_id: u8, hand_index: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(player_id, hand_index)?;

        let mut players = self.players.lock();
        let hand = players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        if hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        hand.set_status(HandStatus::Stand);
        hand.mark_acted();
        debug!(player_id, hand_index, total = hand.value(), "stand");
        drop(players);

        self.advance_turn();

        Ok(())
    }

    /// Doubles the wager, deals exactly one card and ends the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotDouble`] after the hand's first decision
    /// and [`ActionError::InsufficientFunds`] when the wallet cannot match the
    /// wager, besides the turn errors of [`Game::hit`].
    pub fn double_down(&self, player_id: u8, hand_index: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(player_id, hand_index)?;

        let mut shoe = self.shoe.lock();
        let mut players = self.players.lock();
        let player = players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        let legal = legal_actions_for(player, hand_index)?;
        if !legal.double {
            let hand_bet = player.hands()[hand_index].bet();
            return Err(if player.wallet() < hand_bet {
                ActionError::InsufficientFunds
            } else {
                ActionError::CannotDouble
            });
        }

        let card = shoe.deal().ok_or(ActionError::NoCards)?;
        let bet = player.hands()[hand_index].bet();
        player.debit(bet)?;

        let hand = player
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        hand.double_down();
        let total = hand.add_card(card);

        // A bust already ended the hand
        if hand.status() == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        debug!(player_id, hand_index, %card, total, bet = hand.bet(), "double down");

        drop(players);
        drop(shoe);
        self.advance_turn();

        Ok(card)
    }

    /// Splits a pair into two hands, debiting a second equal wager.
    ///
    /// The second card opens a new hand after the player's other hands, each
    /// hand receives one card, and play continues on the original hand.
    /// Returns the indices of the original and the new hand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] unless the hand is a pair and
    /// [`ActionError::InsufficientFunds`] when the wallet cannot match the
    /// wager, besides the turn errors of [`Game::hit`].
    pub fn split(&self, player_id: u8, hand_index: usize) -> Result<(usize, usize), ActionError> {
        self.ensure_player_turn(player_id, hand_index)?;

        let mut shoe = self.shoe.lock();
        let mut players = self.players.lock();
        let player = players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;

        if player
            .hands()
            .get(hand_index)
            .is_some_and(|hand| hand.status() != HandStatus::Active)
        {
            return Err(ActionError::HandNotActive);
        }
        player.can_split(hand_index)?;

        if shoe.remaining() < 2 {
            return Err(ActionError::NoCards);
        }
        let card_a = shoe.deal().ok_or(ActionError::NoCards)?;
        let card_b = shoe.deal().ok_or(ActionError::NoCards)?;

        let bet = player.hands()[hand_index].bet();
        let (original, new) = player.split(hand_index, card_a, card_b)?;
        player.debit(bet)?;
        debug!(
            player_id,
            original,
            new,
            bet,
            wallet = player.wallet(),
            "split"
        );

        drop(players);
        drop(shoe);
        self.advance_turn();

        Ok((original, new))
    }
}

fn legal_actions_for(player: &Player, hand_index: usize) -> Result<LegalActions, ActionError> {
    let hand = player
        .hands()
        .get(hand_index)
        .ok_or(ActionError::HandNotFound)?;

    if hand.status() != HandStatus::Active {
        return Err(ActionError::HandNotActive);
    }

    let affordable = player.wallet() >= hand.bet();
    Ok(LegalActions {
        hit: true,
        stand: true,
        double: affordable && hand.is_first_decision(),
        split: affordable && hand.is_pair(),
    })
}
