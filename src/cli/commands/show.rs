//! Show command implementation with table-style output

use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::cli::args::StatusArg;
use crate::model::EntryStatus;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Calculate dynamic column widths based on terminal width
fn calculate_column_widths(term_width: usize) -> (usize, usize, usize) {
    // Fixed overhead: "│ " prefix (2) + " │" suffix (2) + spaces between columns (2)
    let fixed_overhead = 6;
    let num_width = 4;
    let status_width = 8;

    let path_width = term_width
        .saturating_sub(fixed_overhead + num_width + status_width)
        .max(20);

    (num_width, status_width, path_width)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Color a status for display
fn color_status(status: EntryStatus) -> colored::ColoredString {
    let status_str = format!("{}", status);
    match status {
        EntryStatus::Ok => status_str.green().bold(),
        EntryStatus::Missing => status_str.yellow().bold(),
        EntryStatus::Duplicate => status_str.red().bold(),
        EntryStatus::Empty => status_str.red().bold(),
    }
}

/// Execute the show command
pub fn execute(ctx: &CommandContext, status_filter: Option<StatusArg>, full: bool) -> Result<()> {
    let list = ctx.path_list();
    let msg = ctx.messages;

    if list.is_empty() {
        println!("{}", msg.no_entries.dimmed());
        return Ok(());
    }

    let statuses = list.statuses(ctx.platform);
    let filter: Option<EntryStatus> = status_filter.map(EntryStatus::from);

    let rows: Vec<(usize, &String, EntryStatus)> = list
        .entries()
        .iter()
        .zip(statuses)
        .enumerate()
        .filter(|(_, (_, status))| filter.map_or(true, |f| f == *status))
        .map(|(idx, (entry, status))| (idx + 1, entry, status))
        .collect();

    if rows.is_empty() {
        println!("{}", msg.no_entries.dimmed());
        return Ok(());
    }

    let term_width = get_terminal_width();
    let (num_w, status_w, path_w) = calculate_column_widths(term_width);

    // Title bar
    let title = msg.show_title.replace("{}", ctx.platform.name());
    let title_line = format!("  {}  ", title);
    let title_padding = "─".repeat(title_line.chars().count());

    println!("{}", format!("┌{}┐", title_padding).blue());
    println!("{}", format!("│{}│", title_line).blue().bold());
    println!("{}", format!("└{}┘", title_padding).blue());
    println!();

    // Column headers
    let content_width = num_w + 1 + status_w + 1 + path_w;
    println!(
        "│ {:<num_w$} {:<status_w$} {:<path_w$} │",
        msg.header_num.bold().cyan(),
        msg.header_status.bold().cyan(),
        msg.header_path.bold().cyan(),
        num_w = num_w,
        status_w = status_w,
        path_w = path_w
    );
    println!("│ {} │", "─".repeat(content_width).dimmed());

    for (position, entry, status) in &rows {
        let path_display = if full {
            entry.to_string()
        } else {
            truncate_value(entry, path_w)
        };

        println!(
            "│ {:<num_w$} {:<status_w$} {:<path_w$} │",
            position.to_string().dimmed(),
            color_status(*status),
            path_display.white(),
            num_w = num_w,
            status_w = status_w,
            path_w = path_w
        );
    }

    println!("└{}┘", "─".repeat(content_width + 2).dimmed());
    println!();

    println!(
        "{}",
        msg.total_entries
            .replace("{}", &rows.len().to_string())
            .dimmed()
    );

    Ok(())
}
