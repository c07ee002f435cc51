//! Segment shape checker

use super::{CheckIssue, CheckResult, Checker};
use crate::model::{PathList, Platform};

/// Checks for empty and relative segments.
///
/// An empty segment makes most shells search the current directory, so it
/// is reported as an error; a relative entry changes meaning with the
/// working directory and gets a warning.
pub struct SegmentChecker;

fn is_absolute(entry: &str, platform: Platform) -> bool {
    match platform {
        Platform::Unix => entry.starts_with('/') || entry.starts_with('~'),
        Platform::Windows => {
            // Drive-letter form (C:\ or C:/) or a UNC path
            let drive = entry.len() >= 3
                && entry.as_bytes()[0].is_ascii_alphabetic()
                && entry.as_bytes()[1] == b':'
                && (entry.as_bytes()[2] == b'\\' || entry.as_bytes()[2] == b'/');
            drive || entry.starts_with(r"\\")
        }
    }
}

impl Checker for SegmentChecker {
    fn check(&self, list: &PathList, platform: Platform) -> CheckResult {
        let mut result = CheckResult::new();

        for (idx, entry) in list.entries().iter().enumerate() {
            if entry.is_empty() {
                result.add_issue(
                    CheckIssue::error(
                        "Empty entry (makes the shell search the current directory)",
                    )
                    .with_position(idx + 1),
                );
                continue;
            }

            if !is_absolute(entry, platform) {
                result.add_issue(
                    CheckIssue::warning(format!(
                        "Relative entry '{}' (meaning depends on the working directory)",
                        entry
                    ))
                    .with_position(idx + 1)
                    .with_entry(entry.clone()),
                );
            }
        }

        result
    }
}
