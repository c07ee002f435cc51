//! Checker module for diagnosing search-path values

mod duplicate;
mod missing;
mod segment;

pub use duplicate::DuplicateChecker;
pub use missing::MissingChecker;
pub use segment::SegmentChecker;

use crate::model::{PathList, Platform};

/// Check result
#[derive(Debug)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Warning))
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
    /// 1-based position of the entry in the path value
    pub position: Option<usize>,
    pub entry: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            position: None,
            entry: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            position: None,
            entry: None,
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }
}

/// Trait for checkers
pub trait Checker {
    fn check(&self, list: &PathList, platform: Platform) -> CheckResult;
}

/// Run all checks on a path value
pub fn check_all(list: &PathList, platform: Platform) -> CheckResult {
    let mut result = CheckResult::new();

    let checkers: [&dyn Checker; 3] = [&SegmentChecker, &DuplicateChecker, &MissingChecker];
    for checker in checkers {
        let part = checker.check(list, platform);
        result.issues.extend(part.issues);
    }

    result
}
