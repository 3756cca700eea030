//! jcrs - convert command-line tool output to JSON
//!
//! This library turns the plain-text output of command-line programs into structured
//! records that serialise to jc-compatible JSON. It currently understands `git log`:
//!
//! - Compact output (`git log --oneline --no-abbrev-commit`, `--format=oneline`)
//! - Verbose output (default, `--format=fuller`, with or without `--stat`)
//! - Author and committer identities with explicitly empty emails preserved as `null`
//! - Epoch timestamps derived from git's default date format
//!
//! # Example
//!
//! ```
//! use jcrs::parse_git_log;
//!
//! let output = b"commit 1e4f7b6c8a0d2e3f4a5b6c7d8e9f0a1b2c3d4e5f\n\
//!                Author: Jane Doe <jane@example.com>\n\
//!                \n    Add widget support\n";
//! let entries = parse_git_log(output)?;
//! assert_eq!(entries[0].message, "Add widget support");
//! println!("{}", serde_json::to_string(&entries)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod encoder;
pub mod input;
pub mod logging;
pub mod models;
pub mod parsers;

// Re-export commonly used types
pub use config::ParserConfig;
pub use models::{Field, FileStat, GitLogEntry, GitLogStats};
pub use parsers::{GitLogParser, ParseError, ParserKind, parse_git_log};
