//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Clubs,
            1 => Self::Diamonds,
            2 => Self::Hearts,
            _ => Self::Spades,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank, ordered the way ranks are laid out inside a 13-card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in index order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Ace,
            1 => Self::Two,
            2 => Self::Three,
            3 => Self::Four,
            4 => Self::Five,
            5 => Self::Six,
            6 => Self::Seven,
            7 => Self::Eight,
            8 => Self::Nine,
            9 => Self::Ten,
            10 => Self::Jack,
            11 => Self::Queen,
            _ => Self::King,
        }
    }

    const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the blackjack value of this rank.
    #[must_use]
    pub const fn value(self) -> CardValue {
        match self {
            Self::Ace => CardValue::Ace,
            Self::Ten | Self::Jack | Self::Queen | Self::King => CardValue::Pips(10),
            other => CardValue::Pips(other.index() + 1),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("Ace"),
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            other => write!(f, "{}", other.index() + 1),
        }
    }
}

/// Blackjack value of a card.
///
/// Face cards are worth ten. An ace is worth 11 unless that would bust the
/// hand holding it, in which case it is worth 1; the hand decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A fixed value in `2..=10`.
    Pips(u8),
    /// An ace.
    Ace,
}

impl CardValue {
    /// Returns the points this value adds to a hand when first taken.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Pips(points) => points,
            Self::Ace => 11,
        }
    }
}

/// A playing card, identified by its position `0..52` within a fresh deck.
///
/// The position decomposes as `rank = index % 13` and `suit = index / 13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(suit as u8 * 13 + rank.index())
    }

    /// Creates a card from its deck position, or `None` if `index >= 52`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < DECK_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the deck position of this card.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank of this card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0 % 13)
    }

    /// Returns the suit of this card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::from_index(self.0 / 13)
    }

    /// Returns the blackjack value of this card.
    #[must_use]
    pub const fn value(self) -> CardValue {
        self.rank().value()
    }

    /// Iterates over the 52 cards of one deck in index order.
    pub fn deck() -> impl Iterator<Item = Self> {
        (0..DECK_SIZE as u8).map(Self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank(), self.suit())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
