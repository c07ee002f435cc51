//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::checker::{check_all, Severity};

/// Execute the check command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let list = ctx.path_list();
    let msg = ctx.messages;

    if list.is_empty() {
        println!("{}", msg.no_entries.dimmed());
        return Ok(());
    }

    let check_result = check_all(&list, ctx.platform);

    if check_result.is_ok() {
        ctx.print_success(msg.no_issues_found);
        println!(
            "{}",
            msg.checked_entries
                .replace("{}", &list.len().to_string())
                .dimmed()
        );
        return Ok(());
    }

    println!("{}", msg.issues_found.red().bold());
    for issue in &check_result.issues {
        let icon = match issue.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "⚠".yellow(),
        };

        let severity = match issue.severity {
            Severity::Error => "ERROR".red(),
            Severity::Warning => "WARNING".yellow(),
        };

        print!("  {} [{}]", icon, severity);

        if let Some(position) = issue.position {
            print!(" #{}", position);
        }

        if let Some(ref entry) = issue.entry {
            print!(" ({})", entry.cyan());
        }

        println!(": {}", issue.message);
    }

    // Summary
    println!();
    let error_count = check_result
        .issues
        .iter()
        .filter(|i| matches!(i.severity, Severity::Error))
        .count();
    let warning_count = check_result
        .issues
        .iter()
        .filter(|i| matches!(i.severity, Severity::Warning))
        .count();

    if error_count > 0 {
        println!(
            "{}",
            msg.found_errors_warnings
                .replacen("{}", &error_count.to_string(), 1)
                .replacen("{}", &warning_count.to_string(), 1)
                .red()
        );
    } else {
        println!(
            "{}",
            msg.found_warnings
                .replace("{}", &warning_count.to_string())
                .yellow()
        );
    }

    Ok(())
}
