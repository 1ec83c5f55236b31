//! A scripted prompt, for testing.

use std::collections::VecDeque;

use super::Prompt;

/// Answers prompts from a fixed script, and records everything shown.
#[derive(Debug, Default)]
pub struct Scripted {
    input: VecDeque<String>,
    pub output: Vec<String>,
}

impl Prompt for Scripted {
    fn show(&mut self, line: &str) -> std::io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}

impl Scripted {
    /// Queues an input line.
    pub fn answers(mut self, line: &str) -> Self {
        self.input.push_back(line.to_string());
        self
    }
}
