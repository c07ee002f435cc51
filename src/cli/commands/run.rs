//! Run command implementation

use anyhow::Result;
use std::process::Command;

use super::CommandContext;
use crate::utils::expand;

/// Execute the run command: spawn a child process whose environment
/// carries the assembled search path and the configured `[env]` exports.
///
/// Returns the child's exit code so `main` can propagate it.
pub fn execute(ctx: &CommandContext, command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("No command given"))?;

    let (_, report) = ctx.assemble();

    let mut child = Command::new(program);
    child.args(args);
    child.env(ctx.platform.path_var(), &report.value);

    for (name, value) in &ctx.config.env {
        child.env(name, expand::expand(value));
    }

    let status = child
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to run '{}': {}", program, e))?;

    Ok(status.code().unwrap_or(1))
}
