//! Simple robot player.

use std::cmp::Ordering;

use log::debug;

use super::{BidRound, Card, Player, PlayerError, Suit};

/// Returns the index of the first card that no other card beats, among the cards selected by
/// `filter`.
fn position_best<P, C>(cards: &[Card], filter: P, cmp: C) -> Option<usize>
where
    P: Fn(Card) -> bool,
    C: Fn(Card, Card) -> Ordering,
{
    let mut best: Option<usize> = None;
    for (idx, &card) in cards.iter().enumerate() {
        if filter(card) && best.map_or(true, |b| cmp(cards[b], card).is_lt()) {
            best = Some(idx);
        }
    }
    best
}

fn most_valuable<P: Fn(Card) -> bool>(cards: &[Card], trump: Suit, filter: P) -> Option<usize> {
    position_best(cards, filter, |a, b| a.cmp_trump(b, trump))
}

fn least_valuable<P: Fn(Card) -> bool>(cards: &[Card], trump: Suit, filter: P) -> Option<usize> {
    position_best(cards, filter, |a, b| b.cmp_trump(a, trump))
}

/// A robot player following a fixed heuristic.
#[derive(Debug, Clone)]
pub struct Simple {
    name: String,
    hand: Vec<Card>,
}

impl Simple {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hand: vec![],
        }
    }

    /// Counts the trump cards ranked above the ten, including the left bower.
    fn count_above_ten(&self, trump: Suit) -> usize {
        self.hand
            .iter()
            .filter(|c| c.is_face_or_ace() && c.is_trump(trump))
            .count()
    }

    fn remove(&mut self, idx: Option<usize>) -> Result<Card, PlayerError> {
        let idx = idx.ok_or(PlayerError::EmptyHand)?;
        Ok(self.hand.remove(idx))
    }
}

impl Player for Simple {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn decide_trump(
        &mut self,
        upcard: Card,
        is_dealer: bool,
        round: BidRound,
    ) -> Result<Option<Suit>, PlayerError> {
        let (suit, needed) = match round {
            BidRound::First => (upcard.suit, 2),
            BidRound::Second if is_dealer => {
                debug!("{}: stuck with {}", self.name, upcard.suit.next());
                return Ok(Some(upcard.suit.next()));
            }
            BidRound::Second => (upcard.suit.next(), 1),
        };
        let count = self.count_above_ten(suit);
        debug!(
            "{}: {count} cards above the ten of {suit} in round {round}",
            self.name
        );
        Ok(if count >= needed { Some(suit) } else { None })
    }

    fn add_and_discard(&mut self, upcard: Card) -> Result<(), PlayerError> {
        self.hand.push(upcard);
        let idx = least_valuable(&self.hand, upcard.suit, |_| true);
        let card = self.remove(idx)?;
        debug!("{}: picks up {upcard}, discards {card}", self.name);
        Ok(())
    }

    fn lead_card(&mut self, trump: Suit) -> Result<Card, PlayerError> {
        let idx = most_valuable(&self.hand, trump, |c| !c.is_trump(trump))
            .or_else(|| most_valuable(&self.hand, trump, |_| true));
        let card = self.remove(idx)?;
        debug!("{}: leads {card}", self.name);
        Ok(card)
    }

    fn play_card(&mut self, led: Card, trump: Suit) -> Result<Card, PlayerError> {
        let led_suit = led.effective_suit(trump);
        let idx = most_valuable(&self.hand, trump, |c| c.effective_suit(trump) == led_suit)
            .or_else(|| least_valuable(&self.hand, trump, |_| true));
        let card = self.remove(idx)?;
        debug!("{}: plays {card} to {led}", self.name);
        Ok(card)
    }
}
