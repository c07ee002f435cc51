//! English language messages

use super::Messages;
use std::sync::OnceLock;

static EN_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    EN_MESSAGES.get_or_init(|| Messages {
        // === General ===
        no_entries: "Search path is empty.",
        total_entries: "Total: {} entries",
        skipped: "Skipped.",
        cancelled: "Cancelled.",

        // === Headers ===
        header_num: "#",
        header_status: "STATUS",
        header_path: "PATH",
        show_title: "wpath - {} search path",

        // === Check Command ===
        no_issues_found: "No issues found!",
        issues_found: "Issues Found:",
        checked_entries: "Checked {} entries",
        found_errors_warnings: "Found {} error(s), {} warning(s)",
        found_warnings: "Found {} warning(s)",

        // === Add/Remove ===
        already_exists_skip: "Candidate '{}' already exists, skipping",
        already_exists_value: "Candidate '{}' already exists as '{}'",
        overwrite_prompt: "Overwrite?",
        candidate_added: "Added candidate '{}'",
        candidate_not_on_disk: "Directory '{}' does not exist yet; it is skipped until it does",
        candidate_not_found: "Candidate '{}' not found",
        remove_prompt: "Remove this candidate?",
        candidate_removed: "Removed candidate '{}'",

        // === Assemble Report ===
        report_header: "Assembly report:",
        disposition_added: "added",
        disposition_missing: "skipped (not on disk)",
        disposition_present: "skipped (already present)",
        disposition_duplicate: "skipped (duplicate candidate)",
        report_summary: "{} added, {} skipped",
        report_dropped: "Dropped {} duplicate and {} empty pre-existing entries",

        // === Edit ===
        opening_editor: "Opening {} in {}...",
        editor_failed: "Editor exited with non-zero status",
    })
}
