//! `git log` output parser
//!
//! A single forward pass over the lines of either
//!
//! - compact output (`git log --format=oneline`): `<40-hex sha> <subject...>`, or
//! - verbose output (default, `--format=fuller`, `--stat`): `commit <sha>` followed by
//!   labelled header lines, a four-space indented message and an optional stat block.
//!
//! Both dialects may be mixed; a line is classified by its shape alone.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::ParseError;
use super::dates::derive_epochs;
use super::numbers::{parse_count, parse_optional_count};
use crate::config::ParserConfig;
use crate::models::{Field, FileStat, GitLogEntry, GitLogStats};

static COMMIT_HASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{40}$").expect("valid commit hash regex"));

const COMMIT_PREFIX: &str = "commit ";
const TREE_PREFIX: &str = "tree ";
const PARENT_PREFIX: &str = "parent ";
const MERGE_PREFIX: &str = "Merge: ";
const AUTHOR_PREFIX: &str = "Author: ";
const AUTHOR_DATE_PREFIX: &str = "AuthorDate: ";
const DATE_PREFIX: &str = "Date: ";
const COMMITTER_PREFIX: &str = "Commit: ";
const COMMITTER_DATE_PREFIX: &str = "CommitDate: ";

const FILE_STAT_SEPARATOR: &str = " | ";
const STAT_INDENT: usize = 1;
const MESSAGE_INDENT: usize = 4;

/// Parser for `git log` output
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLogParser {
    config: ParserConfig,
}

impl GitLogParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse an in-memory block of `git log` output
    pub fn parse(&self, input: &[u8]) -> Result<Vec<GitLogEntry>, ParseError> {
        self.parse_reader(input)
    }

    /// Parse `git log` output line by line from any buffered reader.
    ///
    /// Unrecognised lines are skipped. The only error is a failure of the reader itself.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<Vec<GitLogEntry>, ParseError> {
        let mut entries = Vec::new();
        let mut current: Option<OpenEntry> = None;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = decode_line(&buf);
            let view = LineView::new(&line);

            if let Some(boundary) = Boundary::detect(&view) {
                if let Some(open) = current.take() {
                    entries.push(open.finish());
                }
                // A compact boundary still goes through the line rules below
                let verbose = matches!(boundary, Boundary::Verbose { .. });
                current = Some(OpenEntry::start(boundary));
                if verbose {
                    continue;
                }
            }

            let Some(open) = current.as_mut() else {
                continue;
            };

            if let Some(rule) = LINE_RULES.iter().find(|rule| (rule.matches)(&view)) {
                trace!(rule = rule.name, line = view.raw, "matched line");
                (rule.apply)(open, &view, &self.config);
            }
        }

        if let Some(open) = current.take() {
            entries.push(open.finish());
        }

        debug!(entries = entries.len(), "parsed git log");
        Ok(entries)
    }
}

/// Parse `git log` output with the default configuration
pub fn parse_git_log(input: &[u8]) -> Result<Vec<GitLogEntry>, ParseError> {
    GitLogParser::default().parse(input)
}

/// Strip the line terminator (`\n` or `\r\n`) and decode lossily
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// A line together with the pieces the rules look at
struct LineView<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
    indent: usize,
}

impl<'a> LineView<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            tokens: raw.split_whitespace().collect(),
            indent: raw.bytes().take_while(|&b| b == b' ').count(),
        }
    }
}

/// A line that starts a new commit
enum Boundary {
    /// `<sha> <subject...>`
    Compact { commit: String, subject: String },
    /// `commit <sha> [(decorations)]`
    Verbose { commit: String, decorations: Vec<String> },
}

impl Boundary {
    fn detect(view: &LineView<'_>) -> Option<Self> {
        if view.tokens.len() > 1 && COMMIT_HASH.is_match(view.tokens[0]) {
            return Some(Boundary::Compact {
                commit: view.tokens[0].to_string(),
                subject: view.tokens[1..].join(" "),
            });
        }

        if view.raw.starts_with(COMMIT_PREFIX) && view.tokens.len() > 1 {
            let rest = view.tokens[2..].join(" ");
            return Some(Boundary::Verbose {
                commit: view.tokens[1].to_string(),
                decorations: parse_decorations(&rest),
            });
        }

        None
    }
}

/// Split `(HEAD -> main, origin/main, tag: v1.0)` into its names
fn parse_decorations(rest: &str) -> Vec<String> {
    if !rest.starts_with('(') {
        return Vec::new();
    }
    rest.trim_matches(|c| c == '(' || c == ')')
        .split(',')
        .map(|name| name.trim().to_string())
        .collect()
}

/// The commit currently accumulating lines
struct OpenEntry {
    entry: GitLogEntry,
    body: Vec<String>,
    /// Recognised but not part of the output schema yet
    discarded: Vec<String>,
}

impl OpenEntry {
    fn start(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Compact { commit, subject } => Self {
                entry: GitLogEntry::new(commit),
                body: vec![subject],
                discarded: Vec::new(),
            },
            Boundary::Verbose { commit, decorations } => Self {
                entry: GitLogEntry::new(commit),
                body: Vec::new(),
                discarded: decorations,
            },
        }
    }

    /// Close the commit: join its message lines and hand it out
    fn finish(self) -> GitLogEntry {
        let OpenEntry { mut entry, body, discarded } = self;
        if !discarded.is_empty() {
            trace!(commit = %entry.commit, ?discarded, "dropping tree/parent/ref values");
        }
        entry.message = body.join("\n").trim().to_string();
        entry
    }

    fn stats(&mut self) -> &mut GitLogStats {
        self.entry.stats.get_or_insert_with(GitLogStats::default)
    }
}

type Matcher = fn(&LineView<'_>) -> bool;
type Handler = fn(&mut OpenEntry, &LineView<'_>, &ParserConfig);

struct LineRule {
    name: &'static str,
    matches: Matcher,
    apply: Handler,
}

/// Rules for lines inside a commit, first match wins
const LINE_RULES: &[LineRule] = &[
    LineRule { name: "tree", matches: is_tree, apply: discard_value },
    LineRule { name: "parent", matches: is_parent, apply: discard_value },
    LineRule { name: "merge", matches: is_merge, apply: apply_merge },
    LineRule { name: "author", matches: is_author, apply: apply_author },
    LineRule { name: "date", matches: is_date, apply: apply_date },
    LineRule { name: "committer", matches: is_committer, apply: apply_committer },
    LineRule { name: "committer_date", matches: is_committer_date, apply: apply_committer_date },
    LineRule { name: "file_stat", matches: is_file_stat, apply: apply_file_stat },
    LineRule { name: "summary", matches: is_summary, apply: apply_summary },
    LineRule { name: "message", matches: is_message, apply: apply_message },
];

fn is_tree(view: &LineView<'_>) -> bool {
    view.raw.starts_with(TREE_PREFIX)
}

fn is_parent(view: &LineView<'_>) -> bool {
    view.raw.starts_with(PARENT_PREFIX)
}

fn is_merge(view: &LineView<'_>) -> bool {
    view.raw.starts_with(MERGE_PREFIX)
}

fn is_author(view: &LineView<'_>) -> bool {
    view.raw.starts_with(AUTHOR_PREFIX)
}

fn is_date(view: &LineView<'_>) -> bool {
    view.raw.starts_with(AUTHOR_DATE_PREFIX) || view.raw.starts_with(DATE_PREFIX)
}

fn is_committer(view: &LineView<'_>) -> bool {
    view.raw.starts_with(COMMITTER_PREFIX)
}

fn is_committer_date(view: &LineView<'_>) -> bool {
    view.raw.starts_with(COMMITTER_DATE_PREFIX)
}

fn is_file_stat(view: &LineView<'_>) -> bool {
    view.indent == STAT_INDENT && view.raw.contains(FILE_STAT_SEPARATOR)
}

fn is_summary(view: &LineView<'_>) -> bool {
    view.indent == STAT_INDENT
        && view.raw.contains("file")
        && view.raw.contains("changed")
        && (view.raw.contains("insertion") || view.raw.contains("deletion"))
}

fn is_message(view: &LineView<'_>) -> bool {
    view.indent == MESSAGE_INDENT
}

// TODO: store tree, parent and decorations on the entry once consumers expect them
fn discard_value(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    open.discarded.push(view.raw.trim().to_string());
}

fn apply_merge(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    open.entry.merge = strip(view.raw, MERGE_PREFIX).to_string();
}

fn apply_author(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    let (name, email) = split_name_email(strip(view.raw, AUTHOR_PREFIX));
    open.entry.author_name = Field::from_text(name);
    open.entry.author_email = Field::from_text(email);
}

fn apply_date(open: &mut OpenEntry, view: &LineView<'_>, config: &ParserConfig) {
    let text = view
        .raw
        .strip_prefix(AUTHOR_DATE_PREFIX)
        .or_else(|| view.raw.strip_prefix(DATE_PREFIX))
        .unwrap_or(view.raw)
        .trim();
    open.entry.date = text.to_string();

    match derive_epochs(text, config.reference_tz) {
        Some(epochs) => {
            open.entry.epoch = Field::Value(epochs.epoch);
            open.entry.epoch_utc = epochs.epoch_utc;
        }
        None => debug!(date = text, "unrecognised date format"),
    }
}

fn apply_committer(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    let (name, email) = split_name_email(strip(view.raw, COMMITTER_PREFIX));
    open.entry.committer_name = Field::from_text(name);
    open.entry.committer_email = Field::from_text(email);
}

fn apply_committer_date(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    open.entry.committer_date = strip(view.raw, COMMITTER_DATE_PREFIX).to_string();
}

fn apply_file_stat(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    let Some((name, change)) = view.raw.split_once(FILE_STAT_SEPARATOR) else {
        return;
    };
    let name = name.trim().to_string();
    let lines_changed =
        parse_optional_count(change.trim_matches(|c| c == ' ' || c == '+' || c == '-'));

    let stats = open.stats();
    stats.files.push(name.clone());
    stats.file_stats.push(FileStat { name, lines_changed });
}

fn apply_summary(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    let tokens = &view.tokens;
    let stats = open.stats();

    if let Some(first) = tokens.first() {
        stats.files_changed = stats.files_changed.saturating_add(parse_count(first));
    }

    for pair in tokens.windows(2) {
        let (count, label) = (pair[0], pair[1]);
        if label.contains("insertion") {
            stats.insertions = stats.insertions.saturating_add(parse_count(count));
        } else if label.contains("deletion") {
            stats.deletions = stats.deletions.saturating_add(parse_count(count));
        }
    }
}

fn apply_message(open: &mut OpenEntry, view: &LineView<'_>, _: &ParserConfig) {
    open.body.push(view.raw.trim().to_string());
}

fn strip<'a>(line: &'a str, prefix: &str) -> &'a str {
    line.strip_prefix(prefix).unwrap_or(line)
}

/// Split `Jane Doe <jane@example.com>` at the last `<`.
///
/// Text without `<` is all name and no email.
fn split_name_email(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.rfind('<') {
        Some(i) => {
            let name = text[..i].trim();
            let email = text[i + 1..].trim_matches(|c| c == ' ' || c == '<' || c == '>');
            (name, email)
        }
        None => (text, ""),
    }
}
