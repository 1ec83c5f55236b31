//! Console input and output for interactive players.

use std::io::{BufRead, Write};

use super::PlayerError;

/// A request/response boundary between an interactive player and the person playing.
pub trait Prompt {
    /// Shows a line of text.
    fn show(&mut self, line: &str) -> std::io::Result<()>;

    /// Reads a line of text. Returns `None` once the input has ended.
    fn read_line(&mut self) -> std::io::Result<Option<String>>;

    /// Reads lines until one can be parsed. Blank lines are skipped, and unparseable lines
    /// are answered with a complaint.
    fn ask<T, F>(&mut self, question: &str, parse: F) -> Result<T, PlayerError>
    where
        Self: Sized,
        F: Fn(&str) -> Option<T>,
    {
        self.show(question)?;
        loop {
            let line = self.read_line()?.ok_or(PlayerError::InputClosed)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(obj) = parse(trimmed) {
                return Ok(obj);
            }
            log::warn!("rejected input {trimmed:?}");
            self.show("Invalid input, try again")?;
        }
    }
}

/// Standard input and output.
#[derive(Debug, Default)]
pub struct Console;

impl Prompt for Console {
    fn show(&mut self, line: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buffer = String::new();
        let n = std::io::stdin().lock().read_line(&mut buffer)?;
        Ok(if n == 0 { None } else { Some(buffer) })
    }
}
