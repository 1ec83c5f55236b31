//! French-suited ranks and suits, and their textual names.

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use serde::{Deserialize, Serialize};

/// Failure to recognize the name of a rank, suit, or card.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown rank {0:?}")]
    Rank(String),
    #[error("unknown suit {0:?}")]
    Suit(String),
    #[error("malformed card {0:?}")]
    Card(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

const SUIT_NAMES: [&str; 4] = ["Spades", "Hearts", "Clubs", "Diamonds"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}
impl Suit {
    /// All suits, in pack order.
    pub fn all_suits() -> &'static [Suit; 4] {
        static SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
        &SUITS
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// The other suit of the same color.
    pub fn next(self) -> Suit {
        match self {
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
        }
    }

    pub fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }

    /// Returns the suit name, painted red for red suits.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self.color() {
            Color::Black => self.name().into(),
            Color::Red => Red.paint(self.name()),
        }
    }
}
impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUIT_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|idx| Suit::all_suits()[idx])
            .ok_or_else(|| ParseError::Suit(s.to_string()))
    }
}
impl TryFrom<char> for Suit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'S' | 's' => Suit::Spades,
            'H' | 'h' => Suit::Hearts,
            'C' | 'c' => Suit::Clubs,
            'D' | 'd' => Suit::Diamonds,
            _ => return Err(ParseError::Suit(c.to_string())),
        })
    }
}

const RANK_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}
impl Rank {
    /// All ranks, in ascending order.
    pub fn all_ranks() -> &'static [Rank; 13] {
        static RANKS: [Rank; 13] = [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ];
        &RANKS
    }

    pub fn name(self) -> &'static str {
        RANK_NAMES[self as usize]
    }
}
impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANK_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|idx| Rank::all_ranks()[idx])
            .ok_or_else(|| ParseError::Rank(s.to_string()))
    }
}
impl TryFrom<char> for Rank {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(ParseError::Rank(c.to_string())),
        })
    }
}
