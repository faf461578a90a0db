//! Hand representation and ace-aware totals.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardValue, Rank};
use crate::error::AdviceError;
use crate::strategy::{
    Advice, HARD_TABLE, PAIR_TABLE, SOFT_TABLE, dealer_column, hard_row, pair_row, soft_row,
};

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood (or doubled without busting).
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// A sequence of cards held by one bettor, with its wager.
///
/// The total is maintained incrementally: an ace enters as 11 and is
/// demoted to 1, one ace at a time, while the total would otherwise exceed
/// 21. The card at index 0 is the first card dealt (the dealer's hole card).
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    /// Aces still counted as 11.
    soft_aces: u8,
    bet: usize,
    status: HandStatus,
    /// Whether the hand has taken a decision other than a split.
    acted: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
            bet,
            status: HandStatus::Active,
            acted: false,
        }
    }

    /// Creates a hand holding a single card.
    #[must_use]
    pub fn with_card(card: Card, bet: usize) -> Self {
        let mut hand = Self::new(bet);
        hand.add_card(card);
        hand
    }

    /// Adds a card to the hand and returns the new total.
    pub fn add_card(&mut self, card: Card) -> u8 {
        self.cards.push(card);
        self.count_card(card.value());

        if self.total > 21 {
            self.status = HandStatus::Bust;
        }
        self.total
    }

    fn count_card(&mut self, value: CardValue) {
        if value == CardValue::Ace {
            self.soft_aces += 1;
        }
        self.total = self.total.saturating_add(value.points());

        while self.total > 21 && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    fn recount(&mut self) {
        self.total = 0;
        self.soft_aces = 0;
        for index in 0..self.cards.len() {
            self.count_card(self.cards[index].value());
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards visible to the table: everything but the hole card.
    #[must_use]
    pub fn public_cards(&self) -> &[Card] {
        self.cards.get(1..).unwrap_or_default()
    }

    /// Returns the first face-up card (index 1), if dealt.
    #[must_use]
    pub fn upcard(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }

    /// Returns the current status of the hand.
    ///
    /// Only the game's actions change it:
    ///
    /// ```compile_fail
    /// use bjzen::{Hand, HandStatus};
    ///
    /// let mut hand = Hand::new(100);
    /// hand.set_status(HandStatus::Stand);
    /// ```
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the wager. The caller deals exactly one more card and stands.
    pub const fn double_down(&mut self) {
        self.bet *= 2;
        self.acted = true;
    }

    /// Returns whether the hand has yet to make its first decision.
    #[must_use]
    pub const fn is_first_decision(&self) -> bool {
        !self.acted
    }

    pub(crate) const fn mark_acted(&mut self) {
        self.acted = true;
    }

    /// Returns the current total.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.total
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.total > 21
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is exactly two cards of the same rank.
    ///
    /// A ten and a king are worth the same but are not a pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank() == self.cards[1].rank()
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card of a pair (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if !self.is_pair() {
            return None;
        }
        let card = self.cards.pop();
        self.recount();
        card
    }

    /// Removes every card from the hand.
    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Looks up the basic-strategy play against the dealer's upcard.
    ///
    /// # Errors
    ///
    /// Returns [`AdviceError::UnrecognizedHand`] for hands the tables do not
    /// cover: busted hands, totals below 5, and fewer than two cards.
    pub fn basic_strategy(&self, dealer_upcard: CardValue) -> Result<Advice, AdviceError> {
        if self.cards.len() < 2 || self.is_busted() {
            return Err(AdviceError::UnrecognizedHand);
        }
        let column = dealer_column(dealer_upcard)?;

        let advice = if self.is_soft() && self.is_pair() {
            PAIR_TABLE[0][column]
        } else if self.is_soft() {
            let non_ace_total = self.total - 11 * self.soft_aces;
            SOFT_TABLE[soft_row(non_ace_total)?][column]
        } else if self.is_pair() {
            let rank = self.cards[0].rank();
            if rank == Rank::Ace {
                return Err(AdviceError::UnrecognizedHand);
            }
            PAIR_TABLE[pair_row(rank.value().points())?][column]
        } else {
            HARD_TABLE[hard_row(self.total)?][column]
        };

        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new(10);
        for &rank in ranks {
            hand.add_card(card(rank));
        }
        hand
    }

    #[test]
    fn non_ace_cards_sum_their_values() {
        let hand = hand_of(&[Rank::Two, Rank::King, Rank::Five]);
        assert_eq!(hand.value(), 17);
        assert!(!hand.is_soft());
    }

    #[test]
    fn ace_counts_eleven_until_it_would_bust() {
        let mut hand = hand_of(&[Rank::Ace, Rank::Six]);
        assert_eq!(hand.value(), 17);
        assert!(hand.is_soft());

        hand.add_card(card(Rank::Nine));
        assert_eq!(hand.value(), 16);
        assert!(!hand.is_soft());
        assert_eq!(hand.status(), HandStatus::Active);
    }

    #[test]
    fn two_aces_make_soft_twelve() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace]);
        assert_eq!(hand.value(), 12);
        assert!(hand.is_soft());
        assert!(hand.is_pair());
    }

    #[test]
    fn bust_when_no_soft_ace_remains() {
        let hand = hand_of(&[Rank::Ace, Rank::Nine, Rank::Five, Rank::King]);
        assert_eq!(hand.value(), 25);
        assert!(hand.is_busted());
        assert_eq!(hand.status(), HandStatus::Bust);
    }

    #[test]
    fn ten_and_king_are_not_a_pair() {
        assert!(!hand_of(&[Rank::Ten, Rank::King]).is_pair());
        assert!(hand_of(&[Rank::King, Rank::King]).is_pair());
        assert!(!hand_of(&[Rank::Four, Rank::Four, Rank::Two]).is_pair());
    }

    #[test]
    fn split_card_removal_recounts_aces() {
        let mut hand = hand_of(&[Rank::Ace, Rank::Ace]);
        let split = hand.take_split_card().unwrap();
        assert_eq!(split.rank(), Rank::Ace);
        assert_eq!(hand.value(), 11);
        assert!(hand.is_soft());
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn public_cards_hide_the_hole_card() {
        let hand = hand_of(&[Rank::Nine, Rank::Queen, Rank::Two]);
        assert_eq!(hand.public_cards().len(), 2);
        assert_eq!(hand.upcard().map(Card::rank), Some(Rank::Queen));
        assert!(hand_of(&[Rank::Nine]).public_cards().is_empty());
    }

    #[test]
    fn strategy_uses_hard_table_for_hard_totals() {
        let hand = hand_of(&[Rank::Ten, Rank::Seven]);
        assert_eq!(hand.basic_strategy(CardValue::Pips(6)), Ok(Advice::Stand));

        let hand = hand_of(&[Rank::Six, Rank::Five]);
        assert_eq!(hand.basic_strategy(CardValue::Ace), Ok(Advice::Hit));
        assert_eq!(
            hand.basic_strategy(CardValue::Pips(10)),
            Ok(Advice::DoubleThenHit)
        );
    }

    #[test]
    fn strategy_uses_soft_table_by_non_ace_total() {
        let hand = hand_of(&[Rank::Ace, Rank::Seven]);
        assert_eq!(
            hand.basic_strategy(CardValue::Pips(3)),
            Ok(Advice::DoubleThenStand)
        );
        assert_eq!(hand.basic_strategy(CardValue::Pips(9)), Ok(Advice::Hit));

        let hand = hand_of(&[Rank::Ace, Rank::Two, Rank::Three]);
        assert_eq!(
            hand.basic_strategy(CardValue::Pips(4)),
            Ok(Advice::DoubleThenHit)
        );
    }

    #[test]
    fn strategy_splits_aces_against_every_upcard() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace]);
        for points in 2..=10 {
            assert_eq!(hand.basic_strategy(CardValue::Pips(points)), Ok(Advice::Split));
        }
        assert_eq!(hand.basic_strategy(CardValue::Ace), Ok(Advice::Split));
    }

    #[test]
    fn strategy_uses_pair_rows() {
        let nines = hand_of(&[Rank::Nine, Rank::Nine]);
        assert_eq!(nines.basic_strategy(CardValue::Pips(7)), Ok(Advice::Stand));
        assert_eq!(nines.basic_strategy(CardValue::Pips(8)), Ok(Advice::Split));

        let jacks = hand_of(&[Rank::Jack, Rank::Jack]);
        assert_eq!(jacks.basic_strategy(CardValue::Pips(5)), Ok(Advice::Stand));

        let fours = hand_of(&[Rank::Four, Rank::Four]);
        assert_eq!(fours.basic_strategy(CardValue::Pips(5)), Ok(Advice::Split));
        assert_eq!(fours.basic_strategy(CardValue::Pips(4)), Ok(Advice::Hit));
    }

    #[test]
    fn strategy_rejects_hands_outside_the_tables() {
        let busted = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(
            busted.basic_strategy(CardValue::Pips(6)),
            Err(AdviceError::UnrecognizedHand)
        );
        let single = hand_of(&[Rank::Five]);
        assert_eq!(
            single.basic_strategy(CardValue::Pips(6)),
            Err(AdviceError::UnrecognizedHand)
        );
        let hand = hand_of(&[Rank::Ten, Rank::Seven]);
        assert_eq!(
            hand.basic_strategy(CardValue::Pips(1)),
            Err(AdviceError::UnrecognizedHand)
        );
    }
}
