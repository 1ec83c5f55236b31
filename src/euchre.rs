//! The game of euchre.

mod card;
mod error;
mod game;
mod narrator;
mod player;
mod round;
mod seat;
mod trick;
mod transcript;
use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use self::card::Rank;
pub use self::card::{Card, Pack, ParseError, Suit};
pub use self::error::{GameError, PackError, PlayerError};
use self::game::Game;
use self::narrator::Narrator;
pub use self::player::{Player, Players, Strategy};
use self::round::{BidRound, Contract, Outcome, RoundOutcome, Tricks};
use self::seat::{Seat, Team};
use self::trick::Trick;
use self::transcript::Transcript;
use crate::args::Config;

/// An event that occurs during the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A new hand is starting.
    Hand(u32),
    /// The dealer dealt and revealed the upcard.
    Deal(Seat, Card),
    /// A player passed on declaring trump.
    Pass(Seat),
    /// A player ordered up trump.
    OrderUp(Contract),
    /// A player led a trick.
    Lead(Seat, Card),
    /// A player followed a trick.
    Play(Seat, Card),
    /// The trick is over.
    Trick(Trick),
    /// The round is over.
    Round(RoundOutcome),
    /// The running score, after a round.
    Score { north_south: u8, east_west: u8 },
    /// The game is over.
    Game(Team),
}

/// Receives the events of a game as they happen.
pub trait Observer {
    fn notify(&mut self, event: &Event) -> std::io::Result<()>;
}

impl Observer for Vec<Event> {
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        (**self).notify(event)
    }
}

impl<O: Observer> Observer for Option<O> {
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        match self {
            Some(observer) => observer.notify(event),
            None => Ok(()),
        }
    }
}

impl<A: Observer, B: Observer> Observer for (A, B) {
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        self.0.notify(event)?;
        self.1.notify(event)
    }
}

/// Runs a game on the console, as described by the command line.
pub fn cli_main(config: Config) -> anyhow::Result<()> {
    let players = Players::from(
        config
            .players
            .clone()
            .map(|entry| entry.strategy.into_player(&entry.name)),
    );
    let mut narrator = Narrator::new(players.names(), std::io::stdout(), config.color);
    let mut transcript = config
        .transcript
        .as_ref()
        .map(|_| Transcript::new(&config.players));

    let mut game = Game::new(config.pack, players)
        .with_target_score(config.target_score)
        .with_shuffle(config.shuffle);
    let winner = game.play(&mut (&mut narrator, &mut transcript))?;
    log::info!("{winner} wins");

    if let (Some(path), Some(transcript)) = (&config.transcript, &transcript) {
        let file = File::create(path)
            .with_context(|| format!("creating transcript {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), transcript)
            .with_context(|| format!("writing transcript {}", path.display()))?;
    }
    Ok(())
}
