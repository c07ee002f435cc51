//! Search-path assembly
//!
//! The core of wpath: given the current search-path value and an ordered
//! list of candidate directories, produce a new value with valid, fresh
//! candidates prepended and no duplicate entries under the platform's
//! comparison rule. Pre-existing entries keep their relative order.
//!
//! The function is total: no error return, no panics, no I/O beyond the
//! caller-supplied existence predicate. Exporting the result into the
//! process environment is the caller's decision.

use std::collections::HashSet;

/// What happened to a single candidate during assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Prepended to the result
    Added,
    /// Not on disk, skipped
    SkippedMissing,
    /// Already present in the current value, left in place
    SkippedPresent,
    /// Same directory as an earlier candidate, only the first was added
    SkippedDuplicate,
}

/// Result of assembling a search-path value
#[derive(Debug, Clone)]
pub struct AssembleReport {
    /// Assembled, delimiter-joined value
    pub value: String,
    /// One disposition per candidate, in candidate order
    pub dispositions: Vec<Disposition>,
    /// Pre-existing entries dropped because an earlier entry was equal
    /// under the comparison rule
    pub duplicates_dropped: usize,
    /// Empty segments dropped from the current value
    pub empty_dropped: usize,
}

impl AssembleReport {
    /// Number of candidates that were prepended
    pub fn added(&self) -> usize {
        self.dispositions
            .iter()
            .filter(|d| matches!(d, Disposition::Added))
            .count()
    }

    /// Number of candidates that were skipped for any reason
    pub fn skipped(&self) -> usize {
        self.dispositions.len() - self.added()
    }

    /// Whether assembly changed the value at all
    pub fn changed(&self, current: &str) -> bool {
        self.value != current
    }
}

/// Comparison key for an entry under the platform rule
fn member_key(entry: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        entry.to_lowercase()
    } else {
        entry.to_string()
    }
}

/// Assemble a search-path value and report what happened to each candidate.
///
/// 1. Split `current` on `separator`; keep the first occurrence of every
///    non-empty entry, building a membership set under the comparison rule
///    selected by `case_insensitive`.
/// 2. For each candidate in input order: if `exists(candidate)` holds and
///    the candidate is not already a member, record it as added and insert
///    its key into the set.
/// 3. The value is the added candidates (input order) followed by the
///    surviving pre-existing entries (original order), joined on
///    `separator`.
pub fn assemble_report<F>(
    current: &str,
    separator: char,
    candidates: &[String],
    exists: F,
    case_insensitive: bool,
) -> AssembleReport
where
    F: Fn(&str) -> bool,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut existing: Vec<&str> = Vec::new();
    let mut duplicates_dropped = 0;
    let mut empty_dropped = 0;

    if !current.is_empty() {
        for entry in current.split(separator) {
            if entry.is_empty() {
                empty_dropped += 1;
                continue;
            }
            if seen.insert(member_key(entry, case_insensitive)) {
                existing.push(entry);
            } else {
                duplicates_dropped += 1;
            }
        }
    }

    let mut added: Vec<&str> = Vec::new();
    let mut dispositions = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        if !exists(candidate) {
            dispositions.push(Disposition::SkippedMissing);
            continue;
        }

        let key = member_key(candidate, case_insensitive);
        if seen.contains(&key) {
            // Present in the current value, or added by an earlier
            // candidate; the distinction matters for reporting.
            let dup_of_candidate = added
                .iter()
                .any(|a| member_key(a, case_insensitive) == key);
            dispositions.push(if dup_of_candidate {
                Disposition::SkippedDuplicate
            } else {
                Disposition::SkippedPresent
            });
            continue;
        }

        seen.insert(key);
        added.push(candidate);
        dispositions.push(Disposition::Added);
    }

    let sep = separator.to_string();
    let value = added
        .iter()
        .chain(existing.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(&sep);

    AssembleReport {
        value,
        dispositions,
        duplicates_dropped,
        empty_dropped,
    }
}

/// Assemble a search-path value, discarding the per-candidate report
pub fn assemble<F>(
    current: &str,
    separator: char,
    candidates: &[String],
    exists: F,
    case_insensitive: bool,
) -> String
where
    F: Fn(&str) -> bool,
{
    assemble_report(current, separator, candidates, exists, case_insensitive).value
}
