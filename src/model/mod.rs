//! Core data models for wpath

mod candidate;
mod config;
mod pathlist;
mod platform;

pub use candidate::Candidate;
pub use config::{CandidatesConfig, Config, ConfigError, UiConfig};
pub use pathlist::{EntryStatus, PathList};
pub use platform::Platform;
