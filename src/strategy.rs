//! Basic-strategy lookup tables.
//!
//! The tables are fixed data. Rows select the player's hand category and
//! columns the dealer's upcard (2 through 10, then Ace).

use crate::card::CardValue;
use crate::error::AdviceError;

/// A basic-strategy recommendation as printed in the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double down if allowed, otherwise hit.
    DoubleThenHit,
    /// Double down if allowed, otherwise stand.
    DoubleThenStand,
    /// Split the pair.
    Split,
}

/// An [`Advice`] resolved against the actions the player can actually take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Hit.
    Hit,
    /// Stand.
    Stand,
    /// Double down.
    Double,
    /// Split the pair.
    Split,
    /// Splitting is advised but the player cannot cover a second wager.
    SplitUnavailable,
}

impl Advice {
    /// Resolves the advice given whether doubling and splitting are legal.
    #[must_use]
    pub const fn resolve(self, can_double: bool, can_split: bool) -> Recommendation {
        match self {
            Self::Hit => Recommendation::Hit,
            Self::Stand => Recommendation::Stand,
            Self::DoubleThenHit | Self::DoubleThenStand if can_double => Recommendation::Double,
            Self::DoubleThenHit => Recommendation::Hit,
            Self::DoubleThenStand => Recommendation::Stand,
            Self::Split if can_split => Recommendation::Split,
            Self::Split => Recommendation::SplitUnavailable,
        }
    }
}

const H: Advice = Advice::Hit;
const S: Advice = Advice::Stand;
const DH: Advice = Advice::DoubleThenHit;
const DS: Advice = Advice::DoubleThenStand;
const P: Advice = Advice::Split;

#[rustfmt::skip]
pub(crate) const HARD_TABLE: [[Advice; 10]; 7] = [
    // 2   3   4   5   6   7   8   9   10  A
    [S,  S,  S,  S,  S,  S,  S,  S,  S,  S], // 17-21
    [S,  S,  S,  S,  S,  H,  H,  H,  H,  H], // 13-16
    [H,  H,  S,  S,  S,  H,  H,  H,  H,  H], // 12
    [DH, DH, DH, DH, DH, DH, DH, DH, DH, H], // 11
    [DH, DH, DH, DH, DH, DH, DH, DH, H,  H], // 10
    [H,  DH, DH, DH, DH, H,  H,  H,  H,  H], // 9
    [H,  H,  H,  H,  H,  H,  H,  H,  H,  H], // 5-8
];

#[rustfmt::skip]
pub(crate) const SOFT_TABLE: [[Advice; 10]; 5] = [
    // 2   3   4   5   6   7   8   9   10  A
    [S,  S,  S,  S,  S,  S,  S,  S,  S,  S], // A/8, A/9, A/10
    [S,  DS, DS, DS, DS, S,  S,  H,  H,  H], // A/7
    [H,  DH, DH, DH, DH, H,  H,  H,  H,  H], // A/6
    [H,  H,  DH, DH, DH, H,  H,  H,  H,  H], // A/4, A/5
    [H,  H,  H,  DH, DH, H,  H,  H,  H,  H], // A/2, A/3
];

#[rustfmt::skip]
pub(crate) const PAIR_TABLE: [[Advice; 10]; 7] = [
    // 2   3   4   5   6   7   8   9   10  A
    [P,  P,  P,  P,  P,  P,  P,  P,  P,  P], // A/A, 8/8
    [S,  S,  S,  S,  S,  S,  S,  S,  S,  S], // 10/10
    [P,  P,  P,  P,  P,  S,  P,  P,  S,  S], // 9/9
    [P,  P,  P,  P,  P,  P,  H,  H,  H,  H], // 7/7, 3/3, 2/2
    [P,  P,  P,  P,  P,  H,  H,  H,  H,  H], // 6/6
    [DH, DH, DH, DH, DH, DH, DH, DH, H,  H], // 5/5
    [H,  H,  H,  P,  P,  H,  H,  H,  H,  H], // 4/4
];

/// Maps the dealer's upcard onto a table column.
pub(crate) const fn dealer_column(upcard: CardValue) -> Result<usize, AdviceError> {
    match upcard {
        CardValue::Ace => Ok(9),
        CardValue::Pips(points @ 2..=10) => Ok(points as usize - 2),
        CardValue::Pips(_) => Err(AdviceError::UnrecognizedHand),
    }
}

pub(crate) const fn hard_row(total: u8) -> Result<usize, AdviceError> {
    match total {
        17..=21 => Ok(0),
        13..=16 => Ok(1),
        12 => Ok(2),
        11 => Ok(3),
        10 => Ok(4),
        9 => Ok(5),
        5..=8 => Ok(6),
        _ => Err(AdviceError::UnrecognizedHand),
    }
}

/// Selects the soft-table row from the total of the cards beside the ace.
pub(crate) const fn soft_row(non_ace_total: u8) -> Result<usize, AdviceError> {
    match non_ace_total {
        8..=10 => Ok(0),
        7 => Ok(1),
        6 => Ok(2),
        4..=5 => Ok(3),
        2..=3 => Ok(4),
        _ => Err(AdviceError::UnrecognizedHand),
    }
}

/// Selects the pair-table row from the value of one card of a non-ace pair.
pub(crate) const fn pair_row(points: u8) -> Result<usize, AdviceError> {
    match points {
        8 => Ok(0),
        10 => Ok(1),
        9 => Ok(2),
        2 | 3 | 7 => Ok(3),
        6 => Ok(4),
        5 => Ok(5),
        4 => Ok(6),
        _ => Err(AdviceError::UnrecognizedHand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CardValue::Pips(2), 0)]
    #[case(CardValue::Pips(6), 4)]
    #[case(CardValue::Pips(10), 8)]
    #[case(CardValue::Ace, 9)]
    fn upcards_map_to_columns(#[case] upcard: CardValue, #[case] column: usize) {
        assert_eq!(dealer_column(upcard), Ok(column));
    }

    #[test]
    fn hard_rows_cover_five_through_twenty_one() {
        for total in 5..=21 {
            assert!(hard_row(total).is_ok(), "total {total}");
        }
        assert_eq!(hard_row(4), Err(AdviceError::UnrecognizedHand));
        assert_eq!(hard_row(22), Err(AdviceError::UnrecognizedHand));
    }

    #[test]
    fn soft_rows_cover_two_through_ten() {
        for total in 2..=10 {
            assert!(soft_row(total).is_ok(), "non-ace total {total}");
        }
        assert_eq!(soft_row(1), Err(AdviceError::UnrecognizedHand));
    }

    #[test]
    fn eights_and_aces_always_split() {
        assert!(PAIR_TABLE[0].iter().all(|&advice| advice == Advice::Split));
    }

    #[rstest]
    #[case(Advice::DoubleThenHit, false, false, Recommendation::Hit)]
    #[case(Advice::DoubleThenStand, false, false, Recommendation::Stand)]
    #[case(Advice::DoubleThenStand, true, false, Recommendation::Double)]
    #[case(Advice::Split, false, true, Recommendation::Split)]
    #[case(Advice::Split, true, false, Recommendation::SplitUnavailable)]
    fn advice_resolves_against_legal_actions(
        #[case] advice: Advice,
        #[case] can_double: bool,
        #[case] can_split: bool,
        #[case] expected: Recommendation,
    ) {
        assert_eq!(advice.resolve(can_double, can_split), expected);
    }
}
