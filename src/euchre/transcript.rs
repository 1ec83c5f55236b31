//! A serializable record of a game.

use serde::{Deserialize, Serialize};

use super::{Event, Observer};
use crate::args::PlayerEntry;

/// The players and every event of a game, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    players: Vec<PlayerEntry>,
    events: Vec<Event>,
}

impl Transcript {
    /// Creates an empty [`Transcript`] for the specified players, in seat order.
    pub fn new(players: &[PlayerEntry]) -> Self {
        Self {
            players: players.to_vec(),
            events: vec![],
        }
    }

    #[cfg(test)]
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Observer for Transcript {
    fn notify(&mut self, event: &Event) -> std::io::Result<()> {
        self.events.notify(event)
    }
}
