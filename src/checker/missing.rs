//! Missing directory checker

use super::{CheckIssue, CheckResult, Checker};
use crate::model::{PathList, Platform};
use std::path::Path;

/// Checks for entries that do not exist on disk
pub struct MissingChecker;

impl Checker for MissingChecker {
    fn check(&self, list: &PathList, _platform: Platform) -> CheckResult {
        let mut result = CheckResult::new();

        for (idx, entry) in list.entries().iter().enumerate() {
            if entry.is_empty() {
                continue;
            }

            if !Path::new(entry).is_dir() {
                result.add_issue(
                    CheckIssue::warning(format!("Directory '{}' does not exist", entry))
                        .with_position(idx + 1)
                        .with_entry(entry.clone()),
                );
            }
        }

        result
    }
}
