//! CLI command implementations

pub mod add;
pub mod assemble;
pub mod check;
pub mod edit;
pub mod remove;
pub mod run;
pub mod show;

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::assembler::{self, AssembleReport};
use crate::cli::args::{Cli, ConflictStrategy};
use crate::i18n::{init_messages, Language, Messages};
use crate::model::{Candidate, Config, PathList, Platform};

/// Common context for command execution
pub struct CommandContext {
    pub config: Config,
    pub config_file: PathBuf,
    pub platform: Platform,
    pub value_override: Option<String>,
    pub on_conflict: ConflictStrategy,
    pub messages: &'static Messages,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_file = cli.config.clone().unwrap_or_else(Config::config_path);
        let config = crate::config::load_or_create_config(&config_file)?;

        // Initialize i18n based on config
        let lang: Language = config.ui.language.parse().unwrap_or_default();
        let messages = init_messages(lang);

        let platform = cli
            .platform
            .map(Platform::from)
            .unwrap_or_else(Platform::current);

        Ok(Self {
            config,
            config_file,
            platform,
            value_override: cli.value.clone(),
            on_conflict: cli.on_conflict,
            messages,
        })
    }

    /// The search-path value commands operate on: the `--value` override
    /// or the live environment variable
    pub fn current_value(&self) -> String {
        self.value_override
            .clone()
            .unwrap_or_else(|| self.platform.current_value())
    }

    /// Parse the current value into a path list
    pub fn path_list(&self) -> PathList {
        PathList::parse(&self.current_value(), self.platform.separator())
    }

    /// Configured candidates for the active platform, expanded
    pub fn candidates(&self) -> Vec<Candidate> {
        self.config
            .candidates
            .for_platform(self.platform)
            .iter()
            .map(Candidate::new)
            .collect()
    }

    /// Assemble the search path from the current value and the configured
    /// candidates
    pub fn assemble(&self) -> (Vec<Candidate>, AssembleReport) {
        let candidates = self.candidates();
        let expanded: Vec<String> = candidates
            .iter()
            .map(|c| c.expanded().to_string())
            .collect();

        let report = assembler::assemble_report(
            &self.current_value(),
            self.platform.separator(),
            &expanded,
            |p| std::path::Path::new(p).is_dir(),
            self.platform.case_insensitive(),
        );

        (candidates, report)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
