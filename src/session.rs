//! Interactive session loop
//!
//! Reads passwords line by line, prints their rating and suggestions, and
//! keeps a transcript of the latest evaluation per password. The transcript
//! lives only as long as the session and is printed when the loop ends.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use secrecy::SecretString;
use thiserror::Error;

use crate::evaluator::evaluate;
use crate::types::PasswordEvaluation;

pub const PROMPT: &str = "\nEnter a password to check its strength (or 'quit' to exit): ";

/// Input that ends the session, compared case-insensitively.
pub const QUIT_COMMAND: &str = "quit";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read password input: {0}")]
    ReadError(#[source] std::io::Error),
    #[error("Failed to write session output: {0}")]
    WriteError(#[source] std::io::Error),
}

/// Latest evaluation per password, in first-entry order.
///
/// Holds raw passwords in memory; it is never persisted.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    index: HashMap<String, usize>,
    entries: Vec<(String, PasswordEvaluation)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an evaluation, overwriting any previous one for the same password.
    pub fn record(&mut self, password: &str, evaluation: PasswordEvaluation) {
        match self.index.get(password) {
            Some(&pos) => self.entries[pos].1 = evaluation,
            None => {
                self.index.insert(password.to_string(), self.entries.len());
                self.entries.push((password.to_string(), evaluation));
            }
        }
    }

    pub fn get(&self, password: &str) -> Option<&PasswordEvaluation> {
        self.index.get(password).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PasswordEvaluation)> {
        self.entries.iter().map(|(pwd, eval)| (pwd.as_str(), eval))
    }
}

/// Prompt/evaluate/print loop over any line source and output sink.
pub struct Session<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Runs until `quit` or end of input, then prints the transcript.
    pub fn run(mut self) -> Result<Transcript, SessionError> {
        #[cfg(feature = "tracing")]
        tracing::info!("session started");

        while let Some(password) = self.next_password()? {
            let evaluation = evaluate(&SecretString::new(password.as_str().into()));
            self.print_evaluation(&evaluation)?;
            self.transcript.record(&password, evaluation);
        }

        self.print_transcript()?;

        #[cfg(feature = "tracing")]
        tracing::info!(entries = self.transcript.len(), "session finished");

        Ok(self.transcript)
    }

    /// Prompts and reads one line. `None` means the session should stop.
    fn next_password(&mut self) -> Result<Option<String>, SessionError> {
        write!(self.output, "{}", PROMPT).map_err(SessionError::WriteError)?;
        self.output.flush().map_err(SessionError::WriteError)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(SessionError::ReadError)?;
        if read == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!("end of input");
            return Ok(None);
        }

        let password = strip_line_ending(&line);
        if password.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(None);
        }
        Ok(Some(password.to_string()))
    }

    fn print_evaluation(&mut self, evaluation: &PasswordEvaluation) -> Result<(), SessionError> {
        let out = &mut self.output;
        writeln!(out, "\nPassword Strength: {}", evaluation.strength())
            .map_err(SessionError::WriteError)?;
        if !evaluation.reasons.is_empty() {
            writeln!(out, "Suggestions to improve your password:").map_err(SessionError::WriteError)?;
            for reason in &evaluation.reasons {
                writeln!(out, " - {}", reason).map_err(SessionError::WriteError)?;
            }
        }
        Ok(())
    }

    fn print_transcript(&mut self) -> Result<(), SessionError> {
        let out = &mut self.output;
        writeln!(out, "\nPassword History:").map_err(SessionError::WriteError)?;
        for (password, evaluation) in self.transcript.iter() {
            writeln!(out, "{}: {}", password, evaluation.strength())
                .map_err(SessionError::WriteError)?;
        }
        out.flush().map_err(SessionError::WriteError)
    }
}

/// Drops a trailing `\n` or `\r\n`; all other whitespace belongs to the password.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
