//! Line-oriented user input for confirmation prompts.

use async_trait::async_trait;
use crossterm::style::Stylize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tracing::debug;

use crate::ui::settings;

/// Source of answers to interactive questions.
///
/// `None` means input ended (Ctrl-D or closed stdin) and is treated as a
/// decline by callers.
#[async_trait]
pub trait Prompter: Send {
    async fn ask(&mut self, question: &str) -> Option<String>;
}

/// Reads answers from process stdin after printing the question to stderr.
pub struct StdinPrompter {
    reader: BufReader<Stdin>,
    color: bool,
}

impl StdinPrompter {
    pub fn new(color: bool) -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            color,
        }
    }
}

#[async_trait]
impl Prompter for StdinPrompter {
    async fn ask(&mut self, question: &str) -> Option<String> {
        if self.color {
            eprint!("\r{}", question.with(settings::COLOR_PROMPT).bold());
        } else {
            eprint!("\r{question}");
        }
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line).await {
            Ok(0) => {
                // Keep the next status line off the prompt row.
                eprintln!();
                debug!("stdin closed at prompt");
                None
            }
            Ok(_) => Some(line),
            Err(err) => {
                debug!(error = %err, "failed to read answer");
                None
            }
        }
    }
}

/// Answer to the execute confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Execute,
    Explain,
    Decline,
}

impl Choice {
    /// Interpret a raw answer. Anything other than `y` or `e` (after trimming
    /// and lowercasing) declines, as does end of input.
    pub fn parse(answer: Option<&str>) -> Self {
        let Some(answer) = answer else {
            return Self::Decline;
        };
        let answer = answer.trim().to_lowercase();
        if answer == settings::ACCEPT_TOKEN {
            Self::Execute
        } else if answer == settings::EXPLAIN_TOKEN {
            Self::Explain
        } else {
            Self::Decline
        }
    }
}

/// Yes/no questions accept only `y`.
pub fn is_affirmative(answer: Option<&str>) -> bool {
    Choice::parse(answer) == Choice::Execute
}
