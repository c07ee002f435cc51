//! wpath - Cross-platform search-path assembler
//!
//! Prepends configured candidate directories to the current search-path
//! value without disturbing pre-existing entries.
//!
//! # Features
//!
//! - Assemble a deduplicated search path from configured candidates
//! - Show and check the current path entries
//! - Add and remove candidate directories in the config file
//! - Run commands with the assembled environment

pub mod assembler;
pub mod checker;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod model;
pub mod utils;

pub use assembler::{assemble, assemble_report, AssembleReport, Disposition};
pub use checker::check_all;
pub use model::{Candidate, Config, EntryStatus, PathList, Platform};
