//! Tilde and variable expansion for configured paths
//!
//! Candidate directories and exports are written in the config file with
//! `~`, `$VAR`, `${VAR}` or `%VAR%` references and expanded against the
//! process environment before any existence check.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::env;

lazy_static! {
    /// Matches `$VAR` or `${VAR}`
    ///
    /// Captures:
    /// - Group 1: variable name in `${VAR}` form
    /// - Group 2: variable name in `$VAR` form
    static ref UNIX_VAR_RE: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").unwrap();

    /// Matches `%VAR%`. Parentheses are allowed for names like
    /// `ProgramFiles(x86)`.
    static ref WIN_VAR_RE: Regex =
        Regex::new(r"%([A-Za-z_][A-Za-z0-9_()]*)%").unwrap();
}

/// Expand a leading tilde to the home directory
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().into_owned();
        }
    }

    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped).to_string_lossy().into_owned();
        }
    }

    path.to_string()
}

/// Replace variable references with values from the process environment.
///
/// Unknown (or non-unicode) variables are left as written; such a path
/// then fails the existence check and the candidate is skipped, which
/// matches the "missing directory is not an error" rule.
pub fn expand_vars(path: &str) -> String {
    let replaced = UNIX_VAR_RE.replace_all(path, |caps: &Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or("");
        env::var(name).unwrap_or_else(|_| caps[0].to_string())
    });

    WIN_VAR_RE
        .replace_all(&replaced, |caps: &Captures| {
            env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

/// Full expansion applied to configured candidates and exports
pub fn expand(path: &str) -> String {
    expand_vars(&expand_tilde(path))
}
