//! Internationalization (i18n) module for wpath
//!
//! Provides English and Traditional Chinese UI messages, selected by the
//! `[ui] language` config key.

mod en;
mod zh_tw;

/// All translatable messages in the application
#[derive(Debug, Clone)]
pub struct Messages {
    // === General ===
    pub no_entries: &'static str,
    pub total_entries: &'static str,
    pub skipped: &'static str,
    pub cancelled: &'static str,

    // === Headers ===
    pub header_num: &'static str,
    pub header_status: &'static str,
    pub header_path: &'static str,
    pub show_title: &'static str,

    // === Check Command ===
    pub no_issues_found: &'static str,
    pub issues_found: &'static str,
    pub checked_entries: &'static str,
    pub found_errors_warnings: &'static str,
    pub found_warnings: &'static str,

    // === Add/Remove ===
    pub already_exists_skip: &'static str,
    pub already_exists_value: &'static str,
    pub overwrite_prompt: &'static str,
    pub candidate_added: &'static str,
    pub candidate_not_on_disk: &'static str,
    pub candidate_not_found: &'static str,
    pub remove_prompt: &'static str,
    pub candidate_removed: &'static str,

    // === Assemble Report ===
    pub report_header: &'static str,
    pub disposition_added: &'static str,
    pub disposition_missing: &'static str,
    pub disposition_present: &'static str,
    pub disposition_duplicate: &'static str,
    pub report_summary: &'static str,
    pub report_dropped: &'static str,

    // === Edit ===
    pub opening_editor: &'static str,
    pub editor_failed: &'static str,
}

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    ZhTw,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh-tw" | "zh_tw" | "zh" => Ok(Language::ZhTw),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

/// Get the message table for a language
pub fn init_messages(lang: Language) -> &'static Messages {
    match lang {
        Language::En => en::messages(),
        Language::ZhTw => zh_tw::messages(),
    }
}
