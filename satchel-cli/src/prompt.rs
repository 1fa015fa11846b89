//! Blocking interactive prompts.

use std::io::{self, BufRead, Write};

/// One blocking line read against the interactive input channel.
///
/// The confirmation gates run against this trait so tests can script
/// responses instead of driving a terminal.
pub trait Prompt {
    /// Display `message` and read one line, without the trailing newline.
    fn read_line(&mut self, message: &str) -> io::Result<String>;
}

/// Prompt backed by process stdin/stdout.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_line(&mut self, message: &str) -> io::Result<String> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
