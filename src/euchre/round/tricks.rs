//! Tricks played during a round.

use std::convert::TryFrom;

use delegate::delegate;
use serde::{Deserialize, Serialize};

use super::TRICKS_PER_ROUND;
use crate::euchre::{Team, Trick};

/// Tricks played this round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tricks {
    tricks: Vec<Trick>,
}

impl Tricks {
    delegate! {
        to self.tricks {
            fn len(&self) -> usize;
        }
    }

    /// Records a completed trick.
    pub fn push(&mut self, trick: Trick) {
        assert!(!self.is_complete());
        self.tricks.push(trick);
    }

    /// Returns true once every trick of the round has been played.
    pub fn is_complete(&self) -> bool {
        self.len() == usize::from(TRICKS_PER_ROUND)
    }

    /// Counts the number of tricks won by the specified team.
    pub fn win_count(&self, team: Team) -> u8 {
        let count = self
            .tricks
            .iter()
            .filter(|t| Team::from(t.best().0) == team)
            .count();
        u8::try_from(count).expect("less than 256")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::euchre::{Card, Rank, Seat, Suit};

    fn won_by(seat: Seat) -> Trick {
        Trick::new(Suit::Spades, seat, Card::new(Rank::Ace, Suit::Spades))
    }

    #[test]
    fn test_win_count() {
        let mut tricks = Tricks::default();
        assert_eq!(0, tricks.len());
        for seat in [Seat::North, Seat::East, Seat::South, Seat::North] {
            tricks.push(won_by(seat));
        }
        assert!(!tricks.is_complete());
        tricks.push(won_by(Seat::West));
        assert!(tricks.is_complete());
        assert_eq!(3, tricks.win_count(Team::NorthSouth));
        assert_eq!(2, tricks.win_count(Team::EastWest));
    }
}
