//! Assemble command implementation

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::assembler::Disposition;

/// Execute the assemble command.
///
/// The assembled value goes to stdout so the caller can export it; the
/// optional report goes to stderr to keep stdout clean for capture.
pub fn execute(ctx: &CommandContext, report: bool) -> Result<()> {
    let (candidates, result) = ctx.assemble();
    let msg = ctx.messages;

    println!("{}", result.value);

    if report {
        eprintln!("{}", msg.report_header.bold());

        for (candidate, disposition) in candidates.iter().zip(&result.dispositions) {
            let (icon, text) = match disposition {
                Disposition::Added => ("✓".green(), msg.disposition_added.green()),
                Disposition::SkippedMissing => ("⚠".yellow(), msg.disposition_missing.yellow()),
                Disposition::SkippedPresent => ("·".dimmed(), msg.disposition_present.dimmed()),
                Disposition::SkippedDuplicate => ("·".dimmed(), msg.disposition_duplicate.dimmed()),
            };
            eprintln!("  {} {} {}", icon, candidate.raw().cyan(), text);
        }

        eprintln!(
            "{}",
            msg.report_summary
                .replacen("{}", &result.added().to_string(), 1)
                .replacen("{}", &result.skipped().to_string(), 1)
        );

        if result.duplicates_dropped > 0 || result.empty_dropped > 0 {
            eprintln!(
                "{}",
                msg.report_dropped
                    .replacen("{}", &result.duplicates_dropped.to_string(), 1)
                    .replacen("{}", &result.empty_dropped.to_string(), 1)
                    .yellow()
            );
        }
    }

    Ok(())
}
