//! Remove command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::CommandContext;
use crate::model::Candidate;

/// Execute the remove command
pub fn execute(ctx: &CommandContext, dir: &str) -> Result<()> {
    let mut config = ctx.config.clone();
    let msg = ctx.messages;

    let target = Candidate::new(dir);
    let candidates = ctx.candidates();

    // Match on the raw spelling first, then on the expanded directory
    let index = candidates
        .iter()
        .position(|c| c.raw() == dir)
        .or_else(|| {
            candidates.iter().position(|c| {
                if ctx.platform.case_insensitive() {
                    c.expanded().to_lowercase() == target.expanded().to_lowercase()
                } else {
                    c.expanded() == target.expanded()
                }
            })
        });

    let index = match index {
        Some(i) => i,
        None => {
            ctx.print_error(&msg.candidate_not_found.replace("{}", dir));
            return Ok(());
        }
    };

    let raw = config.candidates.for_platform(ctx.platform)[index].clone();
    println!("{} {}", "→".cyan(), raw.cyan());

    if !Confirm::new()
        .with_prompt(msg.remove_prompt)
        .default(false)
        .interact()?
    {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    config.candidates.for_platform_mut(ctx.platform).remove(index);
    crate::config::save_config(&config, &ctx.config_file)?;

    ctx.print_success(&msg.candidate_removed.replace("{}", &raw.cyan().to_string()));

    Ok(())
}
