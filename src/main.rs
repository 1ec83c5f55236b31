use std::convert::TryFrom;
use std::process;

use clap::Parser;
use itertools::Itertools;

mod args;
mod deck;
mod euchre;
mod french;
use self::args::{Args, Config, ConfigError};
use self::euchre::cli_main;

/// Exit code for a failure during play.
const EXIT_RUNTIME: i32 = 10;

fn config() -> Result<Config, ConfigError> {
    let args = Args::try_parse()?;
    Config::try_from(args)
}

fn main() {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.init();

    let config = match config() {
        Ok(config) => config,
        Err(ConfigError::Clap(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // Reported on stdout, alongside the narration.
            if let Err(io_err) = err.report(std::io::stdout().lock()) {
                eprintln!("{io_err}");
            }
            process::exit(err.exit_code());
        }
    };

    println!("{} ", std::env::args().join(" "));
    if let Err(err) = cli_main(config) {
        eprintln!("Fatal: {err:#}");
        process::exit(EXIT_RUNTIME);
    }
}
