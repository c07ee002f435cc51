//! Duplicate entry checker

use super::{CheckIssue, CheckResult, Checker, Severity};
use crate::model::{PathList, Platform};
use std::collections::HashMap;

/// Checks for entries that are equal under the platform's comparison rule
pub struct DuplicateChecker;

impl Checker for DuplicateChecker {
    fn check(&self, list: &PathList, platform: Platform) -> CheckResult {
        let mut result = CheckResult::new();

        // Group positions by comparison key, keeping first-seen order
        let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (idx, entry) in list.entries().iter().enumerate() {
            if entry.is_empty() {
                continue;
            }
            let key = if platform.case_insensitive() {
                entry.to_lowercase()
            } else {
                entry.clone()
            };
            let positions = seen.entry(key.clone()).or_default();
            if positions.is_empty() {
                order.push(key);
            }
            positions.push(idx + 1);
        }

        for key in order {
            let positions = &seen[&key];
            if positions.len() > 1 {
                let first = positions[0];
                let entry = &list.entries()[first - 1];
                let places: Vec<String> = positions.iter().map(|p| p.to_string()).collect();

                let issue = CheckIssue {
                    severity: Severity::Warning,
                    message: format!(
                        "Duplicate entry '{}' at positions: {}",
                        entry,
                        places.join(", ")
                    ),
                    position: Some(first),
                    entry: Some(entry.clone()),
                };

                result.add_issue(issue);
            }
        }

        result
    }
}
