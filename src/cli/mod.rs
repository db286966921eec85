//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - 无子命令 / `menu`: 交互式菜单
//! - `extract`: 批量提取主语言文本 (`-e`)
//! - `extract-all`: 批量提取全部文本 (`-a`)
//! - `replace`: 批量替换主语言文本 (`-r`)
//! - `replace-all`: 批量替换全部文本 (`-s`)
//! - `pairs`: 显示文件对应关系
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: tool

pub mod tool;

use clap::{Parser, Subcommand};

/// srt-batch - 字幕文件批量处理器
#[derive(Parser, Debug)]
#[command(name = "srt-batch")]
#[command(version)]
#[command(about = "Run a single-file subtitle tool over every matching file in a directory", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub tool: tool::ToolArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Extract primary-language text from every *.srt file
    Extract,

    /// Extract all text from every *.srt file (non-bilingual subtitles)
    ExtractAll,

    /// Replace subtitles that have a matching primary-text file
    Replace,

    /// Replace subtitles that have a matching all-text file
    ReplaceAll,

    /// Show which derived files exist for every subtitle file
    Pairs,

    /// Interactive menu (default)
    Menu,
}
