use crate::domain::ports::CodePrompt;
use crate::error::Result;
use async_trait::async_trait;
use std::io::{self, BufRead, BufReader, Stdin, Write};
use tokio::sync::Mutex;

/// Prompts the operator for a code on the console.
///
/// Wraps any `BufRead` source (stdin by default) and reads exactly one line
/// per call, so unit tests can feed byte slices the same way the interactive
/// binary reads the terminal.
pub struct TerminalPrompt<R: BufRead + Send = BufReader<Stdin>> {
    source: Mutex<R>,
}

impl TerminalPrompt {
    /// Creates a prompt reading from standard input.
    pub fn new() -> Self {
        Self::from_source(BufReader::new(io::stdin()))
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead + Send> TerminalPrompt<R> {
    /// Creates a prompt reading lines from an arbitrary source.
    pub fn from_source(source: R) -> Self {
        Self {
            source: Mutex::new(source),
        }
    }
}

#[async_trait]
impl<R: BufRead + Send> CodePrompt for TerminalPrompt<R> {
    async fn read_code(&self) -> Result<String> {
        print!("Enter SMS code: ");
        io::stdout().flush()?;

        // EOF leaves the line empty, which simply fails the comparison upstream.
        let mut line = String::new();
        self.source.lock().await.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
