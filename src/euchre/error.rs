//! Error types

use super::{ParseError, Seat, Suit};

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error(transparent)]
    Card(#[from] ParseError),
    #[error("pack holds {0} cards, expected 24")]
    Incomplete(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// The dealer is required to choose a suit after all players have passed.
    #[error("the dealer must order up a suit")]
    DealerMustOrderUp,

    /// In the first round, only the upcard's suit may be ordered up.
    #[error("must order up {0}")]
    MustOrderUpcardSuit(Suit),

    /// In the second round, the upcard's suit has already been turned down.
    #[error("cannot order up {0}")]
    CannotOrderUpcardSuit(Suit),

    /// The player was asked for a card with none left to play.
    #[error("hand is empty")]
    EmptyHand,

    /// The interactive input ended while waiting for a decision.
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("pack is exhausted")]
    PackExhausted,
    #[error("no trump after bidding")]
    NoTrump,
    #[error("{seat}: {source}")]
    Player { seat: Seat, source: PlayerError },
    #[error("narration failed")]
    Narration(#[from] std::io::Error),
}

impl GameError {
    /// Attributes a [`PlayerError`] to the player at `seat`.
    pub fn player(seat: Seat, source: PlayerError) -> Self {
        GameError::Player { seat, source }
    }
}
