//! Round state: bidding rules, contracts, and scoring.
//!
//! ## Gameplay
//!
//! A round is initiated by a deal, and then players bid for trump in clockwise order, starting to
//! the left of the dealer. In the first round of bidding each player may "order up" the upcard,
//! declaring its suit as trump; the dealer then picks up the upcard and discards another card.
//!
//! If all players pass, a second round of bidding follows, in which each player may name the
//! other suit of the upcard's color. The dealer is stuck: they must name a suit if no one else
//! does.
//!
//! The first trick is led by the player to the left of the dealer. Each trick involves a card
//! played, in clockwise order, from each player, and the winner of the trick leads the next.
//! After five tricks, the round is scored.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Card, PlayerError, Seat, Suit, Team};

mod tricks;
pub use tricks::Tricks;

/// The number of tricks played in a round.
pub const TRICKS_PER_ROUND: u8 = 5;

/// A round of bidding for trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidRound {
    /// Players may order up the suit of the upcard.
    First,
    /// Players may name the other suit of the upcard's color.
    Second,
}

impl Display for BidRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BidRound::First => "1",
            BidRound::Second => "2",
        })
    }
}

impl BidRound {
    /// Both rounds of bidding, in order.
    pub fn all_rounds() -> &'static [BidRound; 2] {
        static ROUNDS: [BidRound; 2] = [BidRound::First, BidRound::Second];
        &ROUNDS
    }

    /// Checks a bid against the rules for this round of bidding.
    pub fn validate(
        self,
        bid: Option<Suit>,
        upcard: Card,
        is_dealer: bool,
    ) -> Result<(), PlayerError> {
        match (self, bid) {
            (BidRound::First, Some(suit)) if suit != upcard.suit => {
                Err(PlayerError::MustOrderUpcardSuit(upcard.suit))
            }
            (BidRound::Second, Some(suit)) if suit == upcard.suit => {
                Err(PlayerError::CannotOrderUpcardSuit(upcard.suit))
            }
            (BidRound::Second, None) if is_dealer => Err(PlayerError::DealerMustOrderUp),
            _ => Ok(()),
        }
    }
}

/// The contract established by whomever orders up trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub maker: Seat,
    pub suit: Suit,
    pub round: BidRound,
}

impl Contract {
    /// The team committed to taking three or more tricks.
    pub fn makers(&self) -> Team {
        self.maker.team()
    }
}

/// How a round was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The makers took three or four tricks.
    Made,
    /// The makers took all five tricks.
    March,
    /// The makers took fewer than three tricks.
    Euchred,
}

/// The outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub team: Team,
    pub points: u8,
    pub outcome: Outcome,
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins {} points", self.team, self.points)
    }
}

impl RoundOutcome {
    /// Scores a finished round, given the team that made the contract and the number of tricks
    /// that team took.
    pub fn score(makers: Team, makers_count: u8) -> Self {
        let (team, points, outcome) = match makers_count {
            TRICKS_PER_ROUND => (makers, 2, Outcome::March),
            3..=4 => (makers, 1, Outcome::Made),
            _ => (makers.other(), 2, Outcome::Euchred),
        };
        RoundOutcome {
            team,
            points,
            outcome,
        }
    }

    /// Scores a finished round from the tricks that were played.
    pub fn from_tricks(contract: &Contract, tricks: &Tricks) -> Self {
        debug_assert!(tricks.is_complete());
        Self::score(contract.makers(), tricks.win_count(contract.makers()))
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;
    use crate::euchre::Rank;

    #[test]
    fn test_score() {
        for team in [Team::NorthSouth, Team::EastWest] {
            for count in 0..=2 {
                let outcome = RoundOutcome::score(team, count);
                assert_eq!(team.other(), outcome.team);
                assert_eq!(2, outcome.points);
                assert_eq!(Outcome::Euchred, outcome.outcome);
            }
            for count in 3..=4 {
                let outcome = RoundOutcome::score(team, count);
                assert_eq!(team, outcome.team);
                assert_eq!(1, outcome.points);
                assert_eq!(Outcome::Made, outcome.outcome);
            }
            let outcome = RoundOutcome::score(team, 5);
            assert_eq!(team, outcome.team);
            assert_eq!(2, outcome.points);
            assert_eq!(Outcome::March, outcome.outcome);
        }
    }

    #[test]
    fn test_validate_bid() {
        let upcard = Card::new(Rank::Nine, Suit::Hearts);
        let first = BidRound::First;
        let second = BidRound::Second;

        assert_matches!(first.validate(None, upcard, false), Ok(()));
        assert_matches!(first.validate(None, upcard, true), Ok(()));
        assert_matches!(first.validate(Some(Suit::Hearts), upcard, false), Ok(()));
        assert_matches!(
            first.validate(Some(Suit::Diamonds), upcard, false),
            Err(PlayerError::MustOrderUpcardSuit(Suit::Hearts))
        );

        assert_matches!(second.validate(None, upcard, false), Ok(()));
        assert_matches!(second.validate(Some(Suit::Clubs), upcard, true), Ok(()));
        assert_matches!(
            second.validate(Some(Suit::Hearts), upcard, false),
            Err(PlayerError::CannotOrderUpcardSuit(Suit::Hearts))
        );
        assert_matches!(
            second.validate(None, upcard, true),
            Err(PlayerError::DealerMustOrderUp)
        );
    }
}
