//! Configuration management module

use anyhow::Result;
use std::path::Path;

use crate::model::Config;

/// Load configuration from the given file, or defaults if it doesn't exist
pub fn load_or_create_config(path: &Path) -> Result<Config> {
    Ok(Config::load_from(path)?)
}

/// Save configuration to the given file
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    config.save_to(path)?;
    Ok(())
}
