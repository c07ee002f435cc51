//! Add command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::CommandContext;
use crate::cli::args::ConflictStrategy;
use crate::model::Candidate;

/// Compare two candidates under the platform's rule, on expanded forms
fn same_directory(ctx: &CommandContext, a: &Candidate, b: &Candidate) -> bool {
    if ctx.platform.case_insensitive() {
        a.expanded().to_lowercase() == b.expanded().to_lowercase()
    } else {
        a.expanded() == b.expanded()
    }
}

/// Execute the add command
pub fn execute(ctx: &CommandContext, dir: &str) -> Result<()> {
    let mut config = ctx.config.clone();
    let msg = ctx.messages;

    let new_candidate = Candidate::new(dir);

    // Check for duplicates against the existing table
    let existing_index = ctx
        .candidates()
        .iter()
        .position(|c| same_directory(ctx, c, &new_candidate));

    if let Some(index) = existing_index {
        let existing_raw = config.candidates.for_platform(ctx.platform)[index].clone();

        let should_overwrite = match ctx.on_conflict {
            ConflictStrategy::Skip => {
                ctx.print_warning(&msg.already_exists_skip.replace("{}", dir));
                return Ok(());
            }
            ConflictStrategy::Overwrite => true,
            ConflictStrategy::Ask => {
                println!(
                    "{}",
                    msg.already_exists_value
                        .replacen("{}", &dir.cyan().to_string(), 1)
                        .replacen("{}", &existing_raw.dimmed().to_string(), 1)
                );
                Confirm::new()
                    .with_prompt(msg.overwrite_prompt)
                    .default(false)
                    .interact()?
            }
        };

        if !should_overwrite {
            println!("{}", msg.skipped);
            return Ok(());
        }

        config.candidates.for_platform_mut(ctx.platform)[index] = dir.to_string();
    } else {
        config
            .candidates
            .for_platform_mut(ctx.platform)
            .push(dir.to_string());
    }

    // A directory that does not exist yet is allowed; existence is
    // evaluated at assemble time.
    if !new_candidate.exists() {
        ctx.print_warning(&msg.candidate_not_on_disk.replace("{}", new_candidate.expanded()));
    }

    crate::config::save_config(&config, &ctx.config_file)?;

    ctx.print_success(&msg.candidate_added.replace("{}", &dir.cyan().to_string()));

    Ok(())
}
