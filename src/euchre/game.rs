//! Game management.
//!
//! A game consists of a sequence of hands, by which [`Team`]s score points. A team wins the game
//! by reaching the target score.

use std::collections::HashMap;

use log::{info, trace};

use super::{
    BidRound, Card, Contract, Event, GameError, Observer, Pack, Players, RoundOutcome, Seat,
    Suit, Team, Trick, Tricks,
};
use super::round::TRICKS_PER_ROUND;


/// Cards dealt to each player in turn, starting to the left of the dealer.
const DEALING_PATTERN: [usize; 8] = [3, 2, 3, 2, 2, 3, 2, 3];

/// A game of euchre.
pub struct Game {
    /// The players, indexed by seat.
    players: Players,
    /// The pack, dealt afresh each hand.
    pack: Pack,
    /// The current scores.
    score: HashMap<Team, u8>,
    /// The target score.
    target_score: u8,
    /// Whether to shuffle the pack before each hand.
    shuffle: bool,
    /// The dealer of the current hand.
    dealer: Seat,
    /// The number of hands played so far.
    hand_number: u32,
}

impl Game {
    /// Creates a new game with North dealing first.
    pub fn new(pack: Pack, players: Players) -> Self {
        Self {
            players,
            pack,
            score: [(Team::NorthSouth, 0), (Team::EastWest, 0)]
                .iter()
                .copied()
                .collect(),
            target_score: 10,
            shuffle: false,
            dealer: Seat::North,
            hand_number: 0,
        }
    }

    /// Sets the target score.
    pub fn with_target_score(mut self, score: u8) -> Self {
        self.target_score = score;
        self
    }

    /// Sets whether the pack is shuffled before each hand.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Returns the winning team, if the game is over.
    pub fn winner(&self) -> Option<Team> {
        Team::all_teams()
            .iter()
            .copied()
            .find(|team| self.score(*team) >= self.target_score)
    }

    /// Returns the current score for the specified team.
    pub fn score(&self, team: Team) -> u8 {
        self.score.get(&team).copied().unwrap_or_default()
    }

    /// The dealer of the next hand.
    #[cfg(test)]
    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Plays hands until a team reaches the target score, and returns the winning team.
    pub fn play(&mut self, observer: &mut dyn Observer) -> Result<Team, GameError> {
        let winner = loop {
            if let Some(winner) = self.winner() {
                break winner;
            }
            self.play_hand(observer)?;
            observer.notify(&Event::Score {
                north_south: self.score(Team::NorthSouth),
                east_west: self.score(Team::EastWest),
            })?;
        };
        observer.notify(&Event::Game(winner))?;
        Ok(winner)
    }

    /// Plays a single hand, updates the score, and passes the deal to the left.
    pub fn play_hand(&mut self, observer: &mut dyn Observer) -> Result<RoundOutcome, GameError> {
        observer.notify(&Event::Hand(self.hand_number))?;
        if self.shuffle {
            self.pack.shuffle();
        }
        self.pack.reset();

        let upcard = self.deal()?;
        observer.notify(&Event::Deal(self.dealer, upcard))?;

        let contract = self.bid(upcard, observer)?;
        let mut tricks = Tricks::default();
        let mut leader = self.dealer.next();
        for _ in 0..TRICKS_PER_ROUND {
            let trick = self.play_trick(leader, contract.suit, observer)?;
            leader = trick.best().0;
            tricks.push(trick);
        }

        let outcome = RoundOutcome::from_tricks(&contract, &tricks);
        info!("hand {}: {outcome}", self.hand_number);
        observer.notify(&Event::Round(outcome))?;
        *self.score.entry(outcome.team).or_default() += outcome.points;

        self.hand_number += 1;
        self.dealer = self.dealer.next();
        Ok(outcome)
    }

    /// Deals each player a hand, starting to the left of the dealer, and returns the upcard.
    fn deal(&mut self) -> Result<Card, GameError> {
        let mut seat = self.dealer.next();
        for &count in &DEALING_PATTERN {
            for _ in 0..count {
                let card = self.pack.deal_one().ok_or(GameError::PackExhausted)?;
                trace!("dealt {card} to {seat}");
                self.players[seat].add_card(card);
            }
            seat = seat.next();
        }
        for &seat in Seat::all_seats() {
            trace!("{seat} holds {:?}", self.players[seat].hand());
        }
        self.pack.deal_one().ok_or(GameError::PackExhausted)
    }

    /// Runs both rounds of bidding, until a player orders up trump. If the upcard is ordered up,
    /// the dealer picks it up.
    fn bid(&mut self, upcard: Card, observer: &mut dyn Observer) -> Result<Contract, GameError> {
        for &round in BidRound::all_rounds() {
            for seat in self.dealer.next_n(4) {
                let Some(suit) = self.ask_trump(seat, upcard, round)? else {
                    observer.notify(&Event::Pass(seat))?;
                    continue;
                };
                let contract = Contract {
                    maker: seat,
                    suit,
                    round,
                };
                observer.notify(&Event::OrderUp(contract))?;
                if round == BidRound::First {
                    let dealer = self.dealer;
                    self.players[dealer]
                        .add_and_discard(upcard)
                        .map_err(|err| GameError::player(dealer, err))?;
                }
                return Ok(contract);
            }
        }
        Err(GameError::NoTrump)
    }

    /// Asks a player for their bid, until the bid is valid or the player gives up.
    fn ask_trump(
        &mut self,
        seat: Seat,
        upcard: Card,
        round: BidRound,
    ) -> Result<Option<Suit>, GameError> {
        let is_dealer = seat == self.dealer;
        let player = &mut self.players[seat];
        loop {
            let bid = player
                .decide_trump(upcard, is_dealer, round)
                .map_err(|err| GameError::player(seat, err))?;
            match round.validate(bid, upcard, is_dealer) {
                Ok(()) => return Ok(bid),
                Err(err) if player.handle_error(&err) => continue,
                Err(err) => return Err(GameError::player(seat, err)),
            }
        }
    }

    /// Plays a single trick, and returns it.
    fn play_trick(
        &mut self,
        leader: Seat,
        trump: Suit,
        observer: &mut dyn Observer,
    ) -> Result<Trick, GameError> {
        let led = self.players[leader]
            .lead_card(trump)
            .map_err(|err| GameError::player(leader, err))?;
        observer.notify(&Event::Lead(leader, led))?;

        let mut trick = Trick::new(trump, leader, led);
        for seat in leader.next_n(3) {
            let card = self.players[seat]
                .play_card(led, trump)
                .map_err(|err| GameError::player(seat, err))?;
            observer.notify(&Event::Play(seat, card))?;
            trick.play(seat, card);
        }
        observer.notify(&Event::Trick(trick.clone()))?;
        Ok(trick)
    }
}
