//! Parsers turning command output into structured records
//!
//! # Error Handling Strategy
//!
//! Parsers follow a **lenient** approach, matching the loose shape of command output:
//!
//! - **Unrecognised lines** are skipped silently. Text before the first record, blank
//!   lines and sections the parser does not model never abort a parse.
//!
//! - **Malformed values** inside a recognised line are absorbed locally: a required count
//!   that is not a number becomes `0`, an optional one becomes absent, and an unreadable
//!   date leaves the epoch fields unset.
//!
//! - **Read failures** are the only error, reported as [`ParseError::Read`].

pub mod dates;
pub mod git_log;
pub mod numbers;

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::config::ParserConfig;
use crate::models::GitLogEntry;

pub use git_log::{GitLogParser, parse_git_log};

/// Errors that can occur while parsing command output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// The available parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    GitLog,
}

impl ParserKind {
    /// Pick a parser from the `--git-log` flag and the command being captured.
    ///
    /// Capturing `git ...` always selects the git log parser.
    pub fn select(git_log: bool, command: &[String]) -> Option<Self> {
        let runs_git = command.first().is_some_and(|program| program == "git");
        (git_log || runs_git).then_some(ParserKind::GitLog)
    }

    pub fn parse(self, input: &[u8], config: ParserConfig) -> Result<ParsedOutput, ParseError> {
        match self {
            ParserKind::GitLog => GitLogParser::new(config).parse(input).map(ParsedOutput::GitLog),
        }
    }
}

/// Result of any parser, serialised as the parser's own document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedOutput {
    GitLog(Vec<GitLogEntry>),
}

impl ParsedOutput {
    pub fn len(&self) -> usize {
        match self {
            ParsedOutput::GitLog(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
