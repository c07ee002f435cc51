//! Platform rules for search-path handling

use std::env;

/// Supported platform rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Get the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Separator between search-path entries
    pub fn separator(&self) -> char {
        match self {
            Platform::Unix => ':',
            Platform::Windows => ';',
        }
    }

    /// Whether entries compare case-insensitively
    pub fn case_insensitive(&self) -> bool {
        match self {
            Platform::Unix => false,
            Platform::Windows => true,
        }
    }

    /// Name of the search-path environment variable
    pub fn path_var(&self) -> &'static str {
        match self {
            Platform::Unix => "PATH",
            Platform::Windows => "Path",
        }
    }

    /// Read the live value of the search-path variable.
    ///
    /// Returns an empty string when the variable is unset. Non-UTF-8
    /// values are converted lossily; the assembled result is a plain
    /// string either way.
    pub fn current_value(&self) -> String {
        env::var_os(self.path_var())
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Get platform name as string
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Unix => "unix",
            Platform::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unix" | "linux" | "macos" | "posix" => Ok(Platform::Unix),
            "windows" | "win" => Ok(Platform::Windows),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_separator() {
        assert_eq!(Platform::Unix.separator(), ':');
        assert_eq!(Platform::Windows.separator(), ';');
    }

    #[test]
    fn test_platform_case_rule() {
        assert!(!Platform::Unix.case_insensitive());
        assert!(Platform::Windows.case_insensitive());
    }

    #[test]
    fn test_platform_path_var() {
        assert_eq!(Platform::Unix.path_var(), "PATH");
        assert_eq!(Platform::Windows.path_var(), "Path");
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("unix".parse::<Platform>().unwrap(), Platform::Unix);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Unix);
        assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);
        assert!("plan9".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(format!("{}", Platform::Unix), "unix");
        assert_eq!(format!("{}", Platform::Windows), "windows");
    }

    #[test]
    fn test_current_platform_rules_are_consistent() {
        let platform = Platform::current();
        if cfg!(windows) {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, Platform::Unix);
        }
    }
}
