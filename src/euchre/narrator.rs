//! Console narration of a game.

use std::io::Write;

use ansi_term::{ANSIString, ANSIStrings};

use super::{Card, Event, Observer, Outcome, Seat, Suit, Team};

/// Narrates game events as lines of text.
pub struct Narrator<W> {
    names: [String; 4],
    out: W,
    color: bool,
}

impl<W: Write> Narrator<W> {
    /// Creates a new [`Narrator`], given the player names in seat order.
    pub fn new(names: [String; 4], out: W, color: bool) -> Self {
        Self { names, out, color }
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }

    fn format_suit(&self, suit: Suit) -> String {
        self.format(&ANSIStrings(&[suit.to_ansi_string()]))
    }

    fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    fn team_names(&self, team: Team) -> String {
        let [a, b] = team.seats();
        format!("{} and {}", self.name(a), self.name(b))
    }

    fn played(&self, card: Card, verb: &str, seat: Seat) -> String {
        let parts: [ANSIString; 2] = [
            card.to_ansi_string(),
            format!(" {verb} by {}", self.name(seat)).into(),
        ];
        self.format(&ANSIStrings(&parts))
    }

    /// The lines narrating an event. Empty strings are blank lines.
    fn describe(&self, event: &Event) -> Vec<String> {
        match event {
            Event::Hand(number) => vec![format!("Hand {number}")],
            Event::Deal(dealer, upcard) => vec![
                format!("{} deals", self.name(*dealer)),
                format!("{} turned up", self.format_card(*upcard)),
            ],
            Event::Pass(seat) => vec![format!("{} passes", self.name(*seat))],
            Event::OrderUp(contract) => vec![
                format!(
                    "{} orders up {}",
                    self.name(contract.maker),
                    self.format_suit(contract.suit)
                ),
                String::new(),
            ],
            Event::Lead(seat, card) => vec![self.played(*card, "led", *seat)],
            Event::Play(seat, card) => vec![self.played(*card, "played", *seat)],
            Event::Trick(trick) => vec![
                format!("{} takes the trick", self.name(trick.best().0)),
                String::new(),
            ],
            Event::Round(outcome) => {
                let mut lines = vec![format!("{} win the hand", self.team_names(outcome.team))];
                match outcome.outcome {
                    Outcome::Made => (),
                    Outcome::March => lines.push("march!".to_string()),
                    Outcome::Euchred => lines.push("euchred!".to_string()),
                }
                lines
            }
            Event::Score {
                north_south,
                east_west,
            } => vec![
                format!("{} have {north_south} points", self.team_names(Team::NorthSouth)),
                format!("{} have {east_west} points", self.team_names(Team::EastWest)),
                String::new(),
            ],
            Event::Game(team) => vec![format!("{} win!", self.team_names(*team))],
        }
    }
}

impl<W: Write> Observer for Narrator<W> {
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        for line in self.describe(event) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::euchre::{BidRound, Contract, Rank, RoundOutcome, Trick};

    fn narrate(events: &[Event], color: bool) -> String {
        let names = ["Ivan", "Judea", "Kunle", "Brian"].map(String::from);
        let mut narrator = Narrator::new(names, vec![], color);
        for event in events {
            narrator.notify(event).unwrap();
        }
        String::from_utf8(narrator.out).unwrap()
    }

    #[test]
    fn test_bidding() {
        let upcard = Card::new(Rank::Jack, Suit::Diamonds);
        let events = [
            Event::Hand(0),
            Event::Deal(Seat::North, upcard),
            Event::Pass(Seat::East),
            Event::OrderUp(Contract {
                maker: Seat::South,
                suit: Suit::Hearts,
                round: BidRound::Second,
            }),
        ];
        let expect = "Hand 0\n\
                      Ivan deals\n\
                      Jack of Diamonds turned up\n\
                      Judea passes\n\
                      Kunle orders up Hearts\n\
                      \n";
        assert_eq!(expect, narrate(&events, false));
    }

    #[test]
    fn test_trick_and_score() {
        let trump = Suit::Spades;
        let mut trick = Trick::new(trump, Seat::West, Card::new(Rank::King, Suit::Hearts));
        trick.play(Seat::North, Card::new(Rank::Nine, Suit::Spades));
        let events = [
            Event::Lead(Seat::West, trick.cards[0].1),
            Event::Play(Seat::North, trick.cards[1].1),
            Event::Trick(trick),
            Event::Round(RoundOutcome::score(Team::EastWest, 2)),
            Event::Score {
                north_south: 2,
                east_west: 0,
            },
            Event::Game(Team::NorthSouth),
        ];
        let expect = "King of Hearts led by Brian\n\
                      Nine of Spades played by Ivan\n\
                      Ivan takes the trick\n\
                      \n\
                      Ivan and Kunle win the hand\n\
                      euchred!\n\
                      Ivan and Kunle have 2 points\n\
                      Judea and Brian have 0 points\n\
                      \n\
                      Ivan and Kunle win!\n";
        assert_eq!(expect, narrate(&events, false));
    }

    #[test]
    fn test_color() {
        let events = [Event::Deal(Seat::East, Card::new(Rank::Ace, Suit::Hearts))];
        let text = narrate(&events, true);
        assert!(text.contains("\u{1b}[31mAce of Hearts\u{1b}[0m"));
        let events = [Event::Deal(Seat::East, Card::new(Rank::Ace, Suit::Clubs))];
        assert_eq!("Judea deals\nAce of Clubs turned up\n", narrate(&events, true));
    }
}
