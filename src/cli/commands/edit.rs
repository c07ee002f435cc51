//! Edit command implementation

use anyhow::Result;
use colored::Colorize;
use std::env;
use std::process::Command;

use super::CommandContext;

/// Execute the edit command (open the config file in an editor)
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let msg = ctx.messages;

    let editor = env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    });

    // The file may not exist yet; make sure its directory does so the
    // editor can save it.
    if let Some(parent) = ctx.config_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    println!(
        "{}",
        msg.opening_editor
            .replacen(
                "{}",
                &ctx.config_file.display().to_string().cyan().to_string(),
                1,
            )
            .replacen("{}", &editor.yellow().to_string(), 1)
    );

    let status = Command::new(&editor).arg(&ctx.config_file).status()?;

    if !status.success() {
        anyhow::bail!("{}", msg.editor_failed);
    }

    Ok(())
}
