use serde::{Deserialize, Serialize};

use super::Field;

/// One commit reconstructed from `git log` output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitLogEntry {
    pub commit: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub merge: String,
    #[serde(rename = "author", default, skip_serializing_if = "Field::is_unset")]
    pub author_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub author_email: Field<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(rename = "commit_by", default, skip_serializing_if = "Field::is_unset")]
    pub committer_name: Field<String>,
    #[serde(rename = "commit_by_email", default, skip_serializing_if = "Field::is_unset")]
    pub committer_email: Field<String>,
    #[serde(rename = "commit_by_date", default, skip_serializing_if = "String::is_empty")]
    pub committer_date: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub epoch: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub epoch_utc: Field<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<GitLogStats>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tree: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parent: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refs: Vec<String>,
}

impl GitLogEntry {
    pub fn new(commit: impl Into<String>) -> Self {
        Self { commit: commit.into(), ..Default::default() }
    }
}

/// `--stat` block of a commit. Counts only ever grow while the commit is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitLogStats {
    pub files_changed: u64,
    pub insertions: u64,
    pub deletions: u64,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub file_stats: Vec<FileStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub name: String,
    /// `None` for entries without a line count, e.g. binary files
    pub lines_changed: Option<u64>,
}
