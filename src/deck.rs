//! A deck of cards, dealt from the top.

use std::iter::FromIterator;

use itertools::Itertools;

/// Number of riffles applied by [`Deck::shuffle`].
const RIFFLES: usize = 7;

/// A deck of cards, with a cursor pointing at the next card to deal.
///
/// Dealing never removes cards from the deck; [`reset`](Deck::reset) rewinds the cursor so the
/// same cards may be dealt again.
#[derive(Debug, Clone)]
pub struct Deck<C> {
    cards: Vec<C>,
    next: usize,
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards, next: 0 }
    }
}

impl<C> Deck<C> {
    /// The number of cards that have not been dealt.
    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// The cards in the deck, top first, including those already dealt.
    #[cfg(test)]
    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    /// Rewinds the cursor to the top of the deck.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

impl<C: Clone> Deck<C> {
    /// Deals the card under the cursor, or `None` if the deck is exhausted.
    pub fn deal_one(&mut self) -> Option<C> {
        let card = self.cards.get(self.next).cloned()?;
        self.next += 1;
        Some(card)
    }

    /// Performs a single perfect riffle: the deck is cut into two halves, which are interleaved
    /// starting with the bottom half.
    pub fn riffle(&mut self) {
        let half = self.cards.len() / 2;
        let (top, bottom) = self.cards.split_at(half);
        self.cards = bottom.iter().cloned().interleave(top.iter().cloned()).collect();
    }

    /// Shuffles the deck with a fixed sequence of perfect riffles. The result is fully
    /// determined by the current order of the deck. The cursor is left where it was.
    pub fn shuffle(&mut self) {
        for _ in 0..RIFFLES {
            self.riffle();
        }
    }
}
