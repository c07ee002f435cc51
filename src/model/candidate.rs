//! Candidate directories proposed for the search path

use std::path::Path;

use crate::utils::expand;

/// A directory proposed for addition to the search path.
///
/// Keeps the string as written in the config file alongside its expanded
/// form; the expanded form is what gets checked against the filesystem
/// and prepended to the path value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    raw: String,
    expanded: String,
}

impl Candidate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let expanded = expand::expand(&raw);
        Self { raw, expanded }
    }

    /// The string as written in the config file
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The string with `~` and variable references resolved
    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    /// Whether the expanded directory exists on disk
    pub fn exists(&self) -> bool {
        Path::new(&self.expanded).is_dir()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
