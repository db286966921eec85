//! # 外部工具调用模型
//!
//! - `ToolMode`: 四种工作模式及其命令行标志、成功标记
//! - `Invocation`: 一次子进程调用的结果（退出码、stdout、stderr）
//!
//! 成功标记是与外部工具约定的输出字样。工具措辞一旦变化，
//! 成功的调用仍会计入成功，但不再回显摘要行。
//!
//! ## 依赖关系
//! - 被 `tool.rs`, `batch/runner.rs` 使用
//! - 使用 `models/naming.rs`

use super::naming::TextKind;

/// 提取成功时工具输出中包含的字样
pub const EXTRACT_SUCCESS_MARKER: &str = "成功提取";

/// 替换成功时工具输出中包含的字样
pub const REPLACE_SUCCESS_MARKER: &str = "已替換";

/// 外部工具的工作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolMode {
    /// 从字幕提取文本
    Extract(TextKind),
    /// 用文本替换字幕内容
    Replace(TextKind),
}

impl ToolMode {
    /// 传给外部工具的模式标志
    pub fn flag(self) -> &'static str {
        match self {
            ToolMode::Extract(TextKind::Primary) => "-e",
            ToolMode::Extract(TextKind::All) => "-a",
            ToolMode::Replace(TextKind::Primary) => "-r",
            ToolMode::Replace(TextKind::All) => "-s",
        }
    }

    /// 标准输出中标识成功的字样
    pub fn success_marker(self) -> &'static str {
        match self {
            ToolMode::Extract(_) => EXTRACT_SUCCESS_MARKER,
            ToolMode::Replace(_) => REPLACE_SUCCESS_MARKER,
        }
    }

    /// 动作名称（用于输出）
    pub fn action(self) -> &'static str {
        match self {
            ToolMode::Extract(_) => "Extraction",
            ToolMode::Replace(_) => "Replacement",
        }
    }
}

impl std::fmt::Display for ToolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolMode::Extract(kind) => write!(f, "extract {} ({})", kind, self.flag()),
            ToolMode::Replace(kind) => write!(f, "replace {} ({})", kind, self.flag()),
        }
    }
}

/// 单次子进程调用结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// 退出码（被信号终止时为 None）
    pub exit_code: Option<i32>,
    /// 捕获的标准输出
    pub stdout: String,
    /// 捕获的标准错误
    pub stderr: String,
}

impl Invocation {
    pub fn new(exit_code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// 退出码为 0 即成功
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// stdout 中第一行包含 `marker` 的内容
    pub fn first_line_containing(&self, marker: &str) -> Option<&str> {
        self.stdout
            .trim()
            .lines()
            .find(|line| line.contains(marker))
    }

    /// 原样返回 stderr；仅含空白时为 `None`
    pub fn error_text(&self) -> Option<&str> {
        if self.stderr.trim().is_empty() {
            None
        } else {
            Some(&self.stderr)
        }
    }
}
