//! Round engine and state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::{ShoeError, TableError};
use crate::hand::{Hand, HandStatus};
use crate::options::GameOptions;
use crate::player::Player;
use crate::shoe::Shoe;

mod actions;
mod advice;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, ActionOutcome, GameState, LegalActions, TurnPosition};

/// A blackjack round engine that manages players, betting, and round flow.
///
/// The game owns the shoe, the players and the dealer. Rounds run through
/// [`GameState`] in order; each public operation checks the state it needs
/// and is the only way to move the round forward.
///
/// The round state is not reachable from outside the crate:
///
/// ```compile_fail
/// use bjzen::{Game, GameOptions, GameState};
///
/// let game = Game::new(GameOptions::default(), 42);
/// *game.state.lock() = GameState::Settlement;
/// ```
pub struct Game {
    /// The shoe.
    pub(crate) shoe: Mutex<Shoe>,
    /// Table options.
    pub options: GameOptions,
    /// Current round state.
    pub(crate) state: Mutex<GameState>,
    /// Where the search for a free player ID starts.
    next_id: AtomicU8,
    /// Seating order; players act in this order.
    pub(crate) seats: Mutex<Vec<u8>>,
    /// Seated players (`player_id` -> player).
    pub(crate) players: Mutex<HashMap<u8, Player>>,
    /// The dealer.
    pub(crate) dealer: Mutex<Player>,
    /// Current turn position.
    current_turn: Mutex<TurnPosition>,
}

impl Game {
    /// Creates a new game whose shoe is shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjzen::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        Self::with_shoe(options, shoe)
    }

    /// Creates a new game around an existing shoe.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe) -> Self {
        Self {
            shoe: Mutex::new(shoe),
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            seats: Mutex::new(Vec::new()),
            players: Mutex::new(HashMap::new()),
            dealer: Mutex::new(Player::dealer()),
            current_turn: Mutex::new(TurnPosition {
                player_index: 0,
                hand_index: 0,
            }),
        }
    }

    /// Seats a new player with the given bankroll.
    ///
    /// Returns the assigned player ID. IDs of players who left are handed
    /// out again once the counter wraps.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::TableFull`] if every ID is taken.
    pub fn join(&self, name: impl Into<String>, money: usize) -> Result<u8, TableError> {
        let mut players = self.players.lock();
        let start = self.next_id.load(Ordering::SeqCst);
        let id = (0..=u8::MAX)
            .map(|offset| start.wrapping_add(offset))
            .find(|id| !players.contains_key(id))
            .ok_or(TableError::TableFull)?;
        self.next_id.store(id.wrapping_add(1), Ordering::SeqCst);

        let player = Player::new(name, money);
        debug!(player_id = id, name = player.name(), money, "player joined");
        players.insert(id, player);
        drop(players);

        self.seats.lock().push(id);
        Ok(id)
    }

    /// Removes a player from the table between rounds or while betting.
    ///
    /// A bet placed while bets are being collected is refunded, and held
    /// cards go to the discard pile. Returns the departing player.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are in play or the player is not seated.
    pub fn leave(&self, player_id: u8) -> Result<Player, TableError> {
        let state = *self.state.lock();
        match state {
            GameState::WaitingForPlayers | GameState::CollectBets | GameState::Cleanup => {}
            _ => return Err(TableError::RoundInProgress),
        }

        let mut player = self
            .players
            .lock()
            .remove(&player_id)
            .ok_or(TableError::PlayerNotFound)?;
        self.seats.lock().retain(|&id| id != player_id);

        if state == GameState::CollectBets {
            let bet = player.current_bet();
            player.credit(bet);
        }
        player.set_current_bet(0);
        self.shoe.lock().discard(player.clear_hands());

        debug!(player_id, wallet = player.wallet(), "player left");
        Ok(player)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.seats.lock().len()
    }

    /// Returns the seated player IDs in playing order.
    pub fn seats(&self) -> Vec<u8> {
        self.seats.lock().clone()
    }

    /// Returns whether nobody is left at the table.
    pub fn is_finished(&self) -> bool {
        self.seats.lock().is_empty()
    }

    /// Returns the number of undealt cards in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().remaining()
    }

    /// Returns the number of cards in the discard pile.
    pub fn cards_discarded(&self) -> usize {
        self.shoe.lock().discarded()
    }

    /// Returns the number of cards the shoe was built with.
    pub fn shoe_size(&self) -> usize {
        self.shoe.lock().total_cards()
    }

    /// Puts `draws` on top of the shoe so they are dealt in that order.
    ///
    /// Cards only move between the shoe's own piles, so nothing in play is
    /// touched and the running count is unchanged. Meant for replaying
    /// fixed scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CardUnavailable`] if a card is held in a hand.
    pub fn stack_shoe(&self, draws: &[Card]) -> Result<(), ShoeError> {
        self.shoe.lock().stack(draws)
    }

    /// Returns the number of cards held in player and dealer hands.
    pub fn cards_in_play(&self) -> usize {
        let players: usize = self
            .players
            .lock()
            .values()
            .flat_map(Player::hands)
            .map(Hand::len)
            .sum();
        let dealer: usize = self.dealer.lock().hands().iter().map(Hand::len).sum();
        players + dealer
    }

    /// Returns the shoe's running Zen count.
    pub fn running_count(&self) -> i32 {
        self.shoe.lock().running_count()
    }

    /// Returns the current round state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current turn position.
    pub fn current_turn(&self) -> TurnPosition {
        *self.current_turn.lock()
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` if there is no active turn (e.g., before dealing or after
    /// all hands have finished).
    pub fn current_player(&self) -> Option<u8> {
        if *self.state.lock() != GameState::PlayerActions {
            return None;
        }
        let turn = self.current_turn.lock();
        let seats = self.seats.lock();
        seats.get(turn.player_index).copied()
    }

    /// Returns a snapshot of the specified player.
    pub fn get_player(&self, player_id: u8) -> Option<Player> {
        self.players.lock().get(&player_id).cloned()
    }

    /// Returns the current bet for the specified player.
    pub fn get_bet(&self, player_id: u8) -> Option<usize> {
        self.players.lock().get(&player_id).map(Player::current_bet)
    }

    /// Returns the current bankroll for the specified player.
    pub fn get_money(&self, player_id: u8) -> Option<usize> {
        self.players.lock().get(&player_id).map(Player::wallet)
    }

    /// Returns the player's hands.
    ///
    /// Returns `None` if the player ID is not found.
    pub fn get_hands(&self, player_id: u8) -> Option<Vec<Hand>> {
        self.players
            .lock()
            .get(&player_id)
            .map(|player| player.hands().to_vec())
    }

    /// Returns a clone of the dealer's hand.
    ///
    /// Use [`Hand::public_cards`] to show it with the hole card hidden.
    pub fn get_dealer_hand(&self) -> Option<Hand> {
        self.dealer.lock().hand().cloned()
    }

    /// Returns the dealer's face-up card.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.lock().hand().and_then(Hand::upcard)
    }

    /// Moves the turn to the first active hand at or after its position.
    fn seek_active_hand(&self) {
        let mut turn = self.current_turn.lock();
        let seats = self.seats.lock();
        let players = self.players.lock();

        while let Some(player_id) = seats.get(turn.player_index) {
            let hand = players
                .get(player_id)
                .and_then(|player| player.hands().get(turn.hand_index));

            match hand {
                Some(hand) if hand.status() == HandStatus::Active => return,
                Some(_) => turn.hand_index += 1,
                None => {
                    turn.player_index += 1;
                    turn.hand_index = 0;
                }
            }
        }
    }

    /// Checks if every hand has finished its turn.
    fn all_players_done(&self) -> bool {
        let turn = self.current_turn.lock();
        let seats = self.seats.lock();
        turn.player_index >= seats.len()
    }

    /// Moves the turn past finished hands, handing over to the dealer once
    /// no player hand is left to act.
    fn advance_turn(&self) {
        self.seek_active_hand();
        if self.all_players_done() {
            *self.state.lock() = GameState::DealerAction;
            debug!("player actions finished");
        }
    }
}
