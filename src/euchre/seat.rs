//! Table position.

use std::{convert::TryFrom, fmt::Display};

use serde::{Deserialize, Serialize};

/// Table position, represented as cardinal direction. Players named on the command line sit
/// North, East, South, and West, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    North,
    East,
    South,
    West,
}
impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        })
    }
}

impl TryFrom<char> for Seat {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'N' | 'n' => Seat::North,
            'E' | 'e' => Seat::East,
            'S' | 's' => Seat::South,
            'W' | 'w' => Seat::West,
            _ => return Err(()),
        })
    }
}

impl Seat {
    /// All possible table positions, in clockwise order.
    pub fn all_seats() -> &'static [Seat; 4] {
        static SEATS: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];
        &SEATS
    }

    /// Position of the seat in [`all_seats`](Seat::all_seats).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The team for this table position.
    pub fn team(self) -> Team {
        Team::from(self)
    }

    /// The next table position, to the left.
    pub fn next(self) -> Seat {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    /// The next N table positions to the left.
    pub fn next_n(mut self, n: usize) -> Vec<Seat> {
        let mut order = vec![];
        for _ in 0..n {
            self = self.next();
            order.push(self);
        }
        order
    }
}

/// A team consists of the two seats opposite one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    NorthSouth,
    EastWest,
}
impl From<Seat> for Team {
    fn from(value: Seat) -> Self {
        match value {
            Seat::North | Seat::South => Team::NorthSouth,
            Seat::East | Seat::West => Team::EastWest,
        }
    }
}
impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Team::NorthSouth => "North/South",
            Team::EastWest => "East/West",
        })
    }
}
impl Team {
    /// Both teams, starting with the team of the first player.
    pub fn all_teams() -> &'static [Team; 2] {
        static TEAMS: [Team; 2] = [Team::NorthSouth, Team::EastWest];
        &TEAMS
    }

    /// The seats belonging to this team.
    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::NorthSouth => [Seat::North, Seat::South],
            Team::EastWest => [Seat::East, Seat::West],
        }
    }

    /// The other team.
    pub fn other(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rotation() {
        assert_eq!(vec![Seat::East, Seat::South, Seat::West, Seat::North], Seat::North.next_n(4));
        assert_eq!(vec![Seat::North, Seat::East], Seat::West.next_n(2));
        for &seat in Seat::all_seats() {
            assert_eq!(seat, seat.next_n(4)[3]);
            assert_eq!(seat.team(), seat.next().next().team());
            assert_ne!(seat.team(), seat.next().team());
        }
    }

    #[test]
    fn test_teams() {
        for &team in Team::all_teams() {
            for seat in team.seats() {
                assert_eq!(team, seat.team());
            }
            assert_ne!(team, team.other());
        }
    }
}
