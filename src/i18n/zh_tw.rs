//! Traditional Chinese (zh-TW) language messages

use super::Messages;
use std::sync::OnceLock;

static ZH_TW_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    ZH_TW_MESSAGES.get_or_init(|| Messages {
        // === General ===
        no_entries: "搜尋路徑是空的。",
        total_entries: "共 {} 個條目",
        skipped: "已跳過。",
        cancelled: "已取消。",

        // === Headers ===
        header_num: "#",
        header_status: "狀態",
        header_path: "路徑",
        show_title: "wpath - {} 搜尋路徑",

        // === Check Command ===
        no_issues_found: "沒有發現問題！",
        issues_found: "發現問題：",
        checked_entries: "已檢查 {} 個條目",
        found_errors_warnings: "發現 {} 個錯誤、{} 個警告",
        found_warnings: "發現 {} 個警告",

        // === Add/Remove ===
        already_exists_skip: "候選目錄 '{}' 已存在，跳過",
        already_exists_value: "候選目錄 '{}' 已以 '{}' 存在",
        overwrite_prompt: "是否覆寫？",
        candidate_added: "已新增候選目錄 '{}'",
        candidate_not_on_disk: "目錄 '{}' 尚不存在；在建立之前會被跳過",
        candidate_not_found: "找不到候選目錄 '{}'",
        remove_prompt: "確定要刪除這個候選目錄嗎？",
        candidate_removed: "已刪除候選目錄 '{}'",

        // === Assemble Report ===
        report_header: "組裝報告：",
        disposition_added: "已加入",
        disposition_missing: "已跳過（磁碟上不存在）",
        disposition_present: "已跳過（已在路徑中）",
        disposition_duplicate: "已跳過（重複的候選目錄）",
        report_summary: "加入 {} 個，跳過 {} 個",
        report_dropped: "已移除 {} 個重複與 {} 個空白的既有條目",

        // === Edit ===
        opening_editor: "正在開啟 {}（使用 {}）...",
        editor_failed: "編輯器以非零狀態結束",
    })
}
