//! Players and their strategies.

use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{BidRound, Card, PlayerError, Seat, Suit};

mod console;
mod human;
#[cfg(test)]
mod scripted;
mod simple;
pub use console::{Console, Prompt};
pub use human::Human;
#[cfg(test)]
pub use scripted::Scripted;
pub use simple::Simple;

/// A trait that implements a euchre player. The player owns its hand.
pub trait Player {
    /// The player's name.
    fn name(&self) -> &str;

    /// The cards currently held.
    fn hand(&self) -> &[Card];

    /// Adds a dealt card to the player's hand.
    fn add_card(&mut self, card: Card);

    /// Asked during bidding, with all preceding players having passed. Returns the suit this
    /// player orders up as trump, or `None` to pass.
    ///
    /// In the [first](BidRound::First) round only the upcard's suit may be ordered up; in the
    /// [second](BidRound::Second) round it may not, and the dealer must not pass.
    fn decide_trump(
        &mut self,
        upcard: Card,
        is_dealer: bool,
        round: BidRound,
    ) -> Result<Option<Suit>, PlayerError>;

    /// The dealer picks up the upcard and discards a card, leaving the hand size unchanged.
    fn add_and_discard(&mut self, upcard: Card) -> Result<(), PlayerError>;

    /// Leads a new trick. The card is removed from the player's hand.
    fn lead_card(&mut self, trump: Suit) -> Result<Card, PlayerError>;

    /// Plays a card into an opened trick. The card is removed from the player's hand.
    fn play_card(&mut self, led: Card, trump: Suit) -> Result<Card, PlayerError>;

    /// Indicates that the player has made an invalid bid.
    ///
    /// The implementation may return true, if a retry is desired. Otherwise, the invalid bid
    /// will be converted into a fatal error.
    fn handle_error(&mut self, _err: &PlayerError) -> bool {
        false
    }
}

/// The strategies a player may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Heuristic robot player.
    Simple,
    /// Interactive player on the console.
    Human,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::Simple => "Simple",
            Strategy::Human => "Human",
        })
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Simple" => Ok(Strategy::Simple),
            "Human" => Ok(Strategy::Human),
            _ => Err(s.to_string()),
        }
    }
}

impl Strategy {
    /// Creates a player following this strategy. Human players interact on the console.
    pub fn into_player(self, name: &str) -> Box<dyn Player> {
        match self {
            Strategy::Simple => Box::new(Simple::new(name)),
            Strategy::Human => Box::new(Human::new(name, Console::default())),
        }
    }
}

/// The four players, indexed by table position.
pub struct Players([Box<dyn Player>; 4]);

impl Index<Seat> for Players {
    type Output = dyn Player;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.0[seat.index()].as_ref()
    }
}

impl IndexMut<Seat> for Players {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.0[seat.index()].as_mut()
    }
}

impl From<[Box<dyn Player>; 4]> for Players {
    fn from(players: [Box<dyn Player>; 4]) -> Self {
        Self(players)
    }
}

impl Players {
    /// Player names, in seat order.
    pub fn names(&self) -> [String; 4] {
        Seat::all_seats().map(|seat| self[seat].name().to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Ok(Strategy::Simple), "Simple".parse());
        assert_eq!(Ok(Strategy::Human), "Human".parse());
        assert_eq!(Err("simple".to_string()), "simple".parse::<Strategy>());
        assert_eq!("Human", Strategy::Human.to_string());
    }

    #[test]
    fn test_players_by_seat() {
        let players = Players::from(
            ["Ivan", "Judea", "Kunle", "Brian"].map(|name| Strategy::Simple.into_player(name)),
        );
        assert_eq!("Kunle", players[Seat::South].name());
        assert_eq!(
            ["Ivan", "Judea", "Kunle", "Brian"].map(String::from),
            players.names()
        );
    }
}
