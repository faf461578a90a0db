//! Multi-deck shoe with a discard pile and running count.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::counting::zen_delta;
use crate::error::ShoeError;

/// A shoe of one or more shuffled decks.
///
/// Every card of the shoe is always in exactly one place: the undealt pile,
/// the discard pile, or a hand that the caller holds. The top of the undealt
/// pile is the end of the vector.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    discard: Vec<Card>,
    running_count: i32,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a shoe of `decks` decks shuffled from `seed`.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        Self::with_rng(decks, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a shoe using the given random source, shuffles it, and burns
    /// the top card.
    #[must_use]
    pub fn with_rng(decks: u8, rng: ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            cards.extend(Card::deck());
        }

        let mut shoe = Self {
            cards,
            discard: Vec::new(),
            running_count: 0,
            decks,
            rng,
        };
        shoe.shuffle();
        shoe.burn();
        shoe
    }

    /// Shuffles the undealt cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the discard pile to the undealt pile and shuffles everything.
    ///
    /// The running count is left alone; only dealing moves it.
    pub fn reshuffle_all(&mut self) {
        self.cards.append(&mut self.discard);
        self.shuffle();
        debug!(
            cards = self.cards.len(),
            running_count = self.running_count,
            "shoe reshuffled"
        );
    }

    /// Deals the top card and updates the running count.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.reveal(card);
        Some(card)
    }

    /// Deals the top card face down, leaving the running count untouched.
    pub fn deal_silent(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Applies the count for a card dealt silently that is now visible.
    pub const fn reveal(&mut self, card: Card) {
        self.running_count += zen_delta(card.rank());
    }

    /// Moves the top card straight to the discard pile without counting it.
    pub fn burn(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.discard.push(card);
        Some(card)
    }

    /// Adds cards from cleared hands to the discard pile.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discard.extend(cards);
    }

    /// Places the given cards on top of the shoe so they are dealt in order.
    ///
    /// Each card is taken from the undealt pile, or from the discard pile
    /// when the undealt pile holds no copy. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CardUnavailable`] if a requested card is in
    /// neither pile.
    pub fn stack(&mut self, draws: &[Card]) -> Result<(), ShoeError> {
        let mut cards = self.cards.clone();
        let mut discard = self.discard.clone();

        for card in draws {
            if let Some(position) = cards.iter().position(|c| c == card) {
                cards.remove(position);
            } else if let Some(position) = discard.iter().position(|c| c == card) {
                discard.remove(position);
            } else {
                return Err(ShoeError::CardUnavailable);
            }
        }

        cards.extend(draws.iter().rev());
        self.cards = cards;
        self.discard = discard;
        Ok(())
    }

    /// Returns the running Zen count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards the shoe was built with.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn build_burns_one_card_without_counting() {
        let shoe = Shoe::new(2, 7);
        assert_eq!(shoe.remaining(), 2 * DECK_SIZE - 1);
        assert_eq!(shoe.discarded(), 1);
        assert_eq!(shoe.running_count(), 0);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Shoe::new(1, 99);
        let mut b = Shoe::new(1, 99);
        for _ in 0..10 {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn silent_deal_skips_the_count_until_revealed() {
        let mut shoe = Shoe::new(1, 3);
        let five = Card::new(Rank::Five, Suit::Hearts);
        shoe.stack(&[five, five]).unwrap_err();
        shoe.stack(&[five]).unwrap();

        let card = shoe.deal_silent().unwrap();
        assert_eq!(card, five);
        assert_eq!(shoe.running_count(), 0);
        shoe.reveal(card);
        assert_eq!(shoe.running_count(), 2);
    }

    #[test]
    fn reshuffle_all_merges_discard_and_keeps_the_count() {
        let mut shoe = Shoe::new(1, 5);
        let five = Card::new(Rank::Five, Suit::Hearts);
        shoe.stack(&[five]).unwrap();
        let mut dealt: Vec<Card> = (0..10).filter_map(|_| shoe.deal()).collect();
        assert_eq!(dealt[0], five);
        let count = shoe.running_count();
        shoe.discard(dealt.drain(..));
        assert_eq!(shoe.remaining() + shoe.discarded(), DECK_SIZE);

        shoe.reshuffle_all();
        assert_eq!(shoe.remaining(), DECK_SIZE);
        assert_eq!(shoe.discarded(), 0);
        assert_eq!(shoe.running_count(), count);
    }

    #[test]
    fn empty_shoe_deals_nothing() {
        let mut shoe = Shoe::new(1, 1);
        while shoe.deal().is_some() {}
        assert_eq!(shoe.remaining(), 0);
        assert!(shoe.deal_silent().is_none());
        assert!(shoe.burn().is_none());
    }
}
