//! Data models for structured command output.
//!
//! - [`GitLogEntry`] - one commit from `git log` output
//! - [`GitLogStats`] / [`FileStat`] - the `--stat` block of a commit
//! - [`Field`] - tri-state optional used for values that may be absent or explicitly null
//!
//! All models serialise with serde to jc-compatible JSON key names.

pub mod field;
pub mod git_log;

pub use field::Field;
pub use git_log::{FileStat, GitLogEntry, GitLogStats};
