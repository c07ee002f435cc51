//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::{EntryStatus, Platform};

#[derive(Parser)]
#[command(name = "wpath")]
#[command(about = "PATH 組裝工具 - Cross-platform search-path assembler")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 指定配置檔路徑 (Specify configuration file path)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 指定平台規則 (Specify platform rule set)
    #[arg(short, long, global = true)]
    pub platform: Option<PlatformArg>,

    /// 指定搜尋路徑值，預設讀取環境變數 (Explicit path value instead of the live variable)
    #[arg(long, global = true)]
    pub value: Option<String>,

    /// 衝突處理策略 (Conflict handling strategy)
    #[arg(long, global = true, default_value = "ask")]
    pub on_conflict: ConflictStrategy,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 顯示目前搜尋路徑 (Show current search-path entries)
    #[command(visible_alias = "ls")]
    Show {
        /// 條目狀態過濾 (Status filter): ok|missing|dup|empty
        status: Option<StatusArg>,

        /// 顯示完整路徑，不截斷 (Show full paths without truncation)
        #[arg(long)]
        full: bool,
    },

    /// 組裝搜尋路徑並輸出 (Assemble the search path and print it)
    Assemble {
        /// 在 stderr 輸出各候選目錄的處理結果 (Report per-candidate dispositions to stderr)
        #[arg(short, long)]
        report: bool,
    },

    /// 檢查問題 (Check for issues)
    Check,

    /// 新增候選目錄 (Add a candidate directory)
    Add {
        /// 目錄路徑，可使用 ~ 與變數 (Directory path; ~ and variables allowed)
        dir: String,
    },

    /// 刪除候選目錄 (Remove a candidate directory)
    #[command(visible_alias = "rm")]
    Remove {
        /// 目錄路徑 (Directory path)
        dir: String,
    },

    /// 以組裝後的環境執行指令 (Run a command with the assembled environment)
    Run {
        /// 指令與引數 (Command and arguments)
        #[arg(required = true, trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// 在編輯器中開啟配置檔 (Open the config file in an editor)
    Edit,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Unix,
    Windows,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Unix => Platform::Unix,
            PlatformArg::Windows => Platform::Windows,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Ok,
    #[value(alias = "m")]
    Missing,
    #[value(alias = "duplicate")]
    Dup,
    #[value(alias = "e")]
    Empty,
}

impl From<StatusArg> for EntryStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Ok => EntryStatus::Ok,
            StatusArg::Missing => EntryStatus::Missing,
            StatusArg::Dup => EntryStatus::Duplicate,
            StatusArg::Empty => EntryStatus::Empty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum ConflictStrategy {
    #[default]
    Ask,
    Skip,
    Overwrite,
}
