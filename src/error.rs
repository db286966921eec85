//! # 统一错误处理模块
//!
//! 定义 srt-batch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的处理失败不会出现在这里：它们由 `batch/runner.rs`
//! 就地转换为失败结果，批次继续执行。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// srt-batch 统一错误类型
#[derive(Error, Debug)]
pub enum SrtBatchError {
    // ─────────────────────────────────────────────────────────────
    // 目录扫描错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("Failed to run external command '{command}': {source}")]
    CommandLaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 终端 I/O
    // ─────────────────────────────────────────────────────────────
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SrtBatchError>;
