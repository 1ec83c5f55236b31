//! Euchre cards and the euchre pack.

use std::cmp::Ordering;
use std::{fmt::Display, str::FromStr};

use ansi_term::ANSIString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::PackError;
use crate::deck;
pub use crate::french::{ParseError, Rank, Suit};

/// The number of cards in a euchre pack.
pub const PACK_SIZE: usize = 24;

/// Ranks used in a euchre pack, in ascending order.
pub fn euchre_ranks() -> &'static [Rank] {
    &Rank::all_ranks()[Rank::Nine as usize..]
}

/// A playing card.
///
/// Equality compares both rank and suit. Trump-aware comparisons are provided by
/// [`cmp_trump`](Card::cmp_trump) and [`cmp_trick`](Card::cmp_trick); the natural, suit-blind
/// order is [`cmp_rank`](Card::cmp_rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card rank.
    pub rank: Rank,
    /// Card suit.
    pub suit: Suit,
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, of, suit) = s
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| ParseError::Card(s.to_string()))?;
        Card::from_words(rank, of, suit)
    }
}
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Card {
    /// Creates a new [`Card`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a card from the three words of `<Rank> of <Suit>`.
    fn from_words(rank: &str, of: &str, suit: &str) -> Result<Self, ParseError> {
        if of != "of" {
            return Err(ParseError::Card(format!("{rank} {of} {suit}")));
        }
        Ok(Card {
            rank: rank.parse()?,
            suit: suit.parse()?,
        })
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self.suit {
            Suit::Clubs | Suit::Spades => self.to_string().into(),
            Suit::Diamonds | Suit::Hearts => Red.paint(self.to_string()),
        }
    }

    pub fn is_face_or_ace(self) -> bool {
        self.rank >= Rank::Jack
    }

    /// The jack of the trump suit.
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// The jack of the other suit with the same color as trump.
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.next()
    }

    /// Returns true if the card belongs to the trump suit, counting the left bower.
    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump || self.is_left_bower(trump)
    }

    /// Returns the suit the card counts as when following, given the trump suit. The left
    /// bower counts as trump.
    pub fn effective_suit(self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }

    /// Natural order, by rank alone.
    pub fn cmp_rank(self, other: Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Orders cards with respect to the trump suit. Trump beats non-trump, the right bower beats
    /// the left bower, and the left bower beats all other trump. Everything else is ordered by
    /// rank alone.
    pub fn cmp_trump(self, other: Card, trump: Suit) -> Ordering {
        self.trump_key(trump).cmp(&other.trump_key(trump))
    }

    /// Orders cards played into a trick opened by `led`. Trump beats non-trump; otherwise a card
    /// following the led suit beats one that doesn't. Remaining ties are broken by
    /// [`cmp_trump`](Card::cmp_trump).
    pub fn cmp_trick(self, other: Card, led: Card, trump: Suit) -> Ordering {
        let led_suit = led.effective_suit(trump);
        let key = |c: Card| {
            let (is_trump, bower, rank) = c.trump_key(trump);
            (is_trump, c.effective_suit(trump) == led_suit, bower, rank)
        };
        key(self).cmp(&key(other))
    }

    fn trump_key(self, trump: Suit) -> (bool, u8, Rank) {
        let bower = if self.is_right_bower(trump) {
            2
        } else if self.is_left_bower(trump) {
            1
        } else {
            0
        };
        (self.is_trump(trump), bower, self.rank)
    }
}

/// A euchre pack.
pub type Pack = deck::Deck<Card>;
impl Default for Pack {
    fn default() -> Self {
        itertools::iproduct!(Suit::all_suits(), euchre_ranks())
            .map(|(&suit, &rank)| Card::new(rank, suit))
            .collect()
    }
}
impl FromStr for Pack {
    type Err = PackError;

    /// Reads the first [`PACK_SIZE`] cards from whitespace-separated `<Rank> of <Suit>` text.
    /// Neither the order nor the uniqueness of the cards is checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards: Vec<Card> = s
            .split_whitespace()
            .tuples::<(_, _, _)>()
            .take(PACK_SIZE)
            .map(|(rank, of, suit)| Card::from_words(rank, of, suit))
            .collect::<Result<_, _>>()?;
        if cards.len() < PACK_SIZE {
            return Err(PackError::Incomplete(cards.len()));
        }
        Ok(cards.into_iter().collect())
    }
}
