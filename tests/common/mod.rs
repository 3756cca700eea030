//! Shared test utilities for integration tests
#![allow(dead_code)]

/// Builder for a single commit in verbose `git log` output
#[derive(Clone)]
pub struct CommitBuilder {
    sha: String,
    decorations: Option<String>,
    merge: Option<String>,
    author: Option<String>,
    date: Option<String>,
    committer: Option<String>,
    committer_date: Option<String>,
    message: Vec<String>,
    file_stats: Vec<(String, String)>,
    summary: Option<String>,
}

impl CommitBuilder {
    /// Create a commit with the given sha and no other fields
    pub fn new(sha: &str) -> Self {
        Self {
            sha: sha.to_string(),
            decorations: None,
            merge: None,
            author: None,
            date: None,
            committer: None,
            committer_date: None,
            message: Vec::new(),
            file_stats: Vec::new(),
            summary: None,
        }
    }

    pub fn decorations(mut self, decorations: &str) -> Self {
        self.decorations = Some(decorations.to_string());
        self
    }

    pub fn merge(mut self, parents: &str) -> Self {
        self.merge = Some(parents.to_string());
        self
    }

    /// Set the author line value, e.g. `Jane Doe <jane@example.com>`
    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn committer(mut self, committer: &str) -> Self {
        self.committer = Some(committer.to_string());
        self
    }

    pub fn committer_date(mut self, date: &str) -> Self {
        self.committer_date = Some(date.to_string());
        self
    }

    /// Append one message line (written with four-space indentation)
    pub fn message_line(mut self, line: &str) -> Self {
        self.message.push(line.to_string());
        self
    }

    pub fn file_stat(mut self, name: &str, change: &str) -> Self {
        self.file_stats.push((name.to_string(), change.to_string()));
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    /// Render in `git log --format=fuller --stat` layout
    pub fn render(&self) -> String {
        let mut out = format!("commit {}", self.sha);
        if let Some(decorations) = &self.decorations {
            out.push_str(&format!(" ({})", decorations));
        }
        out.push('\n');

        if let Some(merge) = &self.merge {
            out.push_str(&format!("Merge: {}\n", merge));
        }
        if let Some(author) = &self.author {
            out.push_str(&format!("Author:     {}\n", author));
        }
        if let Some(date) = &self.date {
            out.push_str(&format!("AuthorDate: {}\n", date));
        }
        if let Some(committer) = &self.committer {
            out.push_str(&format!("Commit:     {}\n", committer));
        }
        if let Some(date) = &self.committer_date {
            out.push_str(&format!("CommitDate: {}\n", date));
        }

        out.push('\n');
        for line in &self.message {
            out.push_str(&format!("    {}\n", line));
        }

        if !self.file_stats.is_empty() || self.summary.is_some() {
            out.push('\n');
            for (name, change) in &self.file_stats {
                out.push_str(&format!(" {} | {}\n", name, change));
            }
            if let Some(summary) = &self.summary {
                out.push_str(&format!(" {}\n", summary));
            }
        }

        out.push('\n');
        out
    }
}

/// Concatenate rendered commits into one log
pub fn render_log(commits: &[CommitBuilder]) -> String {
    commits.iter().map(CommitBuilder::render).collect()
}

/// A 40 character lowercase hex sha derived from `n`
pub fn sha(n: u32) -> String {
    format!("{:040x}", n)
}

/// Compact `--format=oneline` log with the given subjects
pub fn oneline_log(subjects: &[&str]) -> String {
    subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| format!("{} {}\n", sha(i as u32 + 1), subject))
        .collect()
}
