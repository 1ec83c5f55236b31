//! Command line arguments

use std::convert::{TryFrom, TryInto};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::euchre::{Pack, PackError, Strategy};

pub const USAGE: &str = "Usage: euchre PACK_FILENAME [shuffle|noshuffle] POINTS_TO_WIN \
                         NAME1 TYPE1 NAME2 TYPE2 NAME3 TYPE3 NAME4 TYPE4";

/// The largest target score accepted.
const MAX_TARGET_SCORE: u8 = 100;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Plays a game of euchre", long_about = None)]
pub struct Args {
    /// File holding the pack, one card per line
    pub pack: PathBuf,

    /// Whether to shuffle before each hand: "shuffle" or "noshuffle"
    pub shuffle: String,

    /// Points needed to win, from 1 to 100
    #[arg(allow_hyphen_values = true)]
    pub points: String,

    /// Four players, each a name followed by "Simple" or "Human"
    #[arg(
        num_args = 8,
        required = true,
        allow_hyphen_values = true,
        value_name = "NAME TYPE"
    )]
    pub players: Vec<String>,

    /// Colour red suits in the narration
    #[arg(long)]
    pub color: bool,

    /// Write a JSON transcript of the game
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

/// A player, as named on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub strategy: Strategy,
}

/// A validated game configuration.
#[derive(Debug)]
pub struct Config {
    pub pack: Pack,
    pub shuffle: bool,
    pub target_score: u8,
    pub players: [PlayerEntry; 4],
    pub color: bool,
    pub transcript: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("Error opening {}", path.display())]
    OpenPack { path: PathBuf, source: io::Error },
    #[error("malformed pack: {0}")]
    Pack(#[from] PackError),
    #[error("invalid shuffle option {0:?}")]
    Shuffle(String),
    #[error("invalid points to win {0:?}")]
    TargetScore(String),
    #[error("unknown type {name:?} for player {index}")]
    Strategy { index: usize, name: String },
}

impl ConfigError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Clap(err) if !err.use_stderr() => 0,
            ConfigError::Clap(_) => 1,
            ConfigError::OpenPack { .. } => 2,
            ConfigError::Shuffle(_) => 3,
            ConfigError::TargetScore(_) => 4,
            ConfigError::Strategy { index, .. } => 5 + *index as i32,
            ConfigError::Pack(_) => 9,
        }
    }

    /// Whether the usage text should accompany the error message.
    pub fn show_usage(&self) -> bool {
        !matches!(self, ConfigError::OpenPack { .. } | ConfigError::Pack(_))
    }

    /// Writes the error message, followed by the usage text where it applies.
    pub fn report<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{self}")?;
        if self.show_usage() {
            writeln!(out, "{USAGE}")?;
        }
        out.flush()
    }
}

fn parse_shuffle(s: &str) -> Result<bool, ConfigError> {
    match s {
        "shuffle" => Ok(true),
        "noshuffle" => Ok(false),
        _ => Err(ConfigError::Shuffle(s.to_string())),
    }
}

fn parse_target_score(s: &str) -> Result<u8, ConfigError> {
    s.parse::<u8>()
        .ok()
        .filter(|n| (1..=MAX_TARGET_SCORE).contains(n))
        .ok_or_else(|| ConfigError::TargetScore(s.to_string()))
}

fn parse_players(args: &[String]) -> Result<[PlayerEntry; 4], ConfigError> {
    let entries: Vec<PlayerEntry> = args
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| -> Result<_, ConfigError> {
            let strategy = pair[1].parse::<Strategy>().map_err(|_| ConfigError::Strategy {
                index,
                name: pair[1].clone(),
            })?;
            Ok(PlayerEntry {
                name: pair[0].clone(),
                strategy,
            })
        })
        .collect::<Result<_, _>>()?;
    entries.try_into().map_err(|_| {
        ConfigError::Clap(clap::Error::raw(
            clap::error::ErrorKind::WrongNumberOfValues,
            "expected four players\n",
        ))
    })
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let text = fs::read_to_string(&args.pack).map_err(|source| ConfigError::OpenPack {
            path: args.pack.clone(),
            source,
        })?;
        let shuffle = parse_shuffle(&args.shuffle)?;
        let target_score = parse_target_score(&args.points)?;
        let players = parse_players(&args.players)?;
        let pack = text.parse::<Pack>()?;
        Ok(Config {
            pack,
            shuffle,
            target_score,
            players,
            color: args.color,
            transcript: args.transcript,
        })
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use assert_matches::assert_matches;

    use super::*;

    fn write_pack(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("euchre-{}-{name}", std::process::id()));
        fs::write(&path, text).unwrap();
        path
    }

    fn default_pack_text() -> String {
        Pack::default()
            .cards()
            .iter()
            .map(|card| format!("{card}\n"))
            .collect()
    }

    fn parse(pack: &Path, rest: &[&str]) -> Result<Config, ConfigError> {
        let pack = pack.to_string_lossy().into_owned();
        let head = ["euchre", pack.as_str()];
        let args = Args::try_parse_from(head.iter().chain(rest))?;
        Config::try_from(args)
    }

    const PLAYERS: [&str; 8] = [
        "Ivan", "Simple", "Judea", "Simple", "Kunle", "Human", "Brian", "Simple",
    ];

    fn with_players(head: &[&'static str]) -> Vec<&'static str> {
        head.iter().chain(PLAYERS.iter()).copied().collect()
    }

    #[test]
    fn test_valid() {
        let path = write_pack("valid", &default_pack_text());
        let config = parse(&path, &with_players(&["shuffle", "10"])).unwrap();
        assert!(config.shuffle);
        assert_eq!(10, config.target_score);
        assert_eq!(Pack::default().cards(), config.pack.cards());
        assert_eq!(
            PlayerEntry {
                name: "Kunle".into(),
                strategy: Strategy::Human,
            },
            config.players[2]
        );
        assert!(!config.color);
        assert_eq!(None, config.transcript);

        let mut argv = with_players(&["noshuffle", "1"]);
        argv.extend(["--color", "--transcript", "game.json"]);
        let config = parse(&path, &argv).unwrap();
        assert!(!config.shuffle);
        assert!(config.color);
        assert_eq!(Some(PathBuf::from("game.json")), config.transcript);

        // Names are taken as given, leading hyphen included.
        let mut argv = with_players(&["noshuffle", "10"]);
        argv[2] = "-Ivan";
        let config = parse(&path, &argv).unwrap();
        assert_eq!("-Ivan", config.players[0].name);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_exit_codes() {
        let path = write_pack("codes", &default_pack_text());
        let missing = std::env::temp_dir().join("euchre-no-such-pack");

        let err = parse(&path, &["shuffle", "10", "Ivan", "Simple"]).unwrap_err();
        assert_eq!(1, err.exit_code());
        assert!(err.show_usage());

        let err = parse(&missing, &with_players(&["shuffle", "10"])).unwrap_err();
        assert_matches!(err, ConfigError::OpenPack { .. });
        assert_eq!(2, err.exit_code());
        assert!(err.to_string().starts_with("Error opening "));
        assert!(!err.show_usage());

        let err = parse(&path, &with_players(&["sometimes", "10"])).unwrap_err();
        assert_eq!(3, err.exit_code());

        for points in ["0", "101", "ten", "2.5", "-5"] {
            let err = parse(&path, &with_players(&["noshuffle", points])).unwrap_err();
            assert_eq!(4, err.exit_code(), "{points}");
        }

        let mut argv = with_players(&["noshuffle", "10"]);
        argv[7] = "Clever";
        let err = parse(&path, &argv).unwrap_err();
        assert_matches!(err, ConfigError::Strategy { index: 2, .. });
        assert_eq!(7, err.exit_code());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_report() {
        let missing = std::env::temp_dir().join("euchre-no-such-pack");
        let err = parse(&missing, &with_players(&["shuffle", "10"])).unwrap_err();
        let mut out = vec![];
        err.report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(format!("Error opening {}\n", missing.display()), text);

        let path = write_pack("report", &default_pack_text());
        let err = parse(&path, &with_players(&["shuffle", "zero"])).unwrap_err();
        let mut out = vec![];
        err.report(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(format!("invalid points to win \"zero\"\n{USAGE}\n"), text);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_pack() {
        let short = write_pack("short", "Nine of Spades\nTen of Spades\n");
        let err = parse(&short, &with_players(&["noshuffle", "10"])).unwrap_err();
        assert_matches!(err, ConfigError::Pack(PackError::Incomplete(2)));
        assert_eq!(9, err.exit_code());

        // Earlier arguments are checked before the pack's contents.
        let err = parse(&short, &with_players(&["sometimes", "10"])).unwrap_err();
        assert_eq!(3, err.exit_code());
        fs::remove_file(short).unwrap();

        let bad = write_pack("bad", &default_pack_text().replace("Queen", "Duke"));
        let err = parse(&bad, &with_players(&["noshuffle", "10"])).unwrap_err();
        assert_matches!(err, ConfigError::Pack(PackError::Card(_)));
        fs::remove_file(bad).unwrap();
    }
}
