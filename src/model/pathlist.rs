//! Parsed search-path values

use std::collections::HashSet;
use std::path::Path;

use crate::model::Platform;

/// An ordered sequence of entries parsed from a delimiter-joined
/// search-path value.
///
/// Segments are kept verbatim, including empty and duplicate ones, so
/// that diagnostics can report exactly what the live value contains.
/// The no-duplicates invariant holds for assembler output, not for
/// arbitrary parsed input.
#[derive(Debug, Clone)]
pub struct PathList {
    entries: Vec<String>,
    separator: char,
}

impl PathList {
    /// Parse a delimiter-joined value. An empty value has no entries.
    pub fn parse(value: &str, separator: char) -> Self {
        // split("") would yield a single empty segment; an empty value
        // means "no entries", same as an empty file means no lines.
        let entries = if value.is_empty() {
            Vec::new()
        } else {
            value.split(separator).map(str::to_string).collect()
        };

        Self { entries, separator }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join the entries back into a delimiter-joined value
    pub fn join(&self) -> String {
        self.entries.join(&self.separator.to_string())
    }

    /// Classify every entry under the platform's comparison rule.
    ///
    /// Priority when several apply: Empty > Duplicate > Missing.
    pub fn statuses(&self, platform: Platform) -> Vec<EntryStatus> {
        let mut seen: HashSet<String> = HashSet::new();

        self.entries
            .iter()
            .map(|entry| {
                if entry.is_empty() {
                    return EntryStatus::Empty;
                }

                let key = if platform.case_insensitive() {
                    entry.to_lowercase()
                } else {
                    entry.clone()
                };
                if !seen.insert(key) {
                    return EntryStatus::Duplicate;
                }

                if !Path::new(entry).is_dir() {
                    return EntryStatus::Missing;
                }

                EntryStatus::Ok
            })
            .collect()
    }
}

/// Status of a single search-path entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Ok,
    Missing,
    Duplicate,
    Empty,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Ok => write!(f, "ok"),
            EntryStatus::Missing => write!(f, "missing"),
            EntryStatus::Duplicate => write!(f, "dup"),
            EntryStatus::Empty => write!(f, "empty"),
        }
    }
}
