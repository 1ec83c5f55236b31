//! Trick

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::euchre::{Card, Seat, Suit};

/// A trick played during a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    /// The trump suit for this trick.
    pub trump: Suit,
    /// The cards that have been played into this trick.
    pub cards: Vec<(Seat, Card)>,
    /// The index of the best card played.
    pub best: usize,
}

impl Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (seat, card)) in self.cards.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{seat:?}:{card}")?;
        }
        write!(f, "]")
    }
}

impl Trick {
    /// Creates a new trick.
    pub fn new(trump: Suit, leader: Seat, card: Card) -> Self {
        Self {
            trump,
            cards: vec![(leader, card)],
            best: 0,
        }
    }

    /// The lead card.
    pub fn lead(&self) -> (Seat, Card) {
        self.cards[0]
    }

    /// The best card.
    pub fn best(&self) -> (Seat, Card) {
        self.cards[self.best]
    }

    /// Plays a card into the trick. The card takes the lead only if it strictly beats the best
    /// card so far.
    pub fn play(&mut self, seat: Seat, card: Card) {
        let lead = self.lead().1;
        let best = self.best().1;
        if best.cmp_trick(card, lead, self.trump).is_lt() {
            self.best = self.cards.len();
        }
        self.cards.push((seat, card));
    }
}
