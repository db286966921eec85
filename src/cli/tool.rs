//! # 外部工具参数定义
//!
//! 所有子命令共享的全局参数：工作目录、外部工具及其固定参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 由 `main.rs` 转换为 `tool::ExternalTool`

use crate::tool::ExternalTool;

use clap::Args;
use std::path::PathBuf;

/// 默认外部程序
#[cfg(windows)]
pub const DEFAULT_TOOL: &str = "python";
/// 默认外部程序
#[cfg(not(windows))]
pub const DEFAULT_TOOL: &str = "python3";

/// 默认固定参数（单文件字幕工具脚本）
pub const DEFAULT_TOOL_SCRIPT: &str = "simple_srt_tool.py";

/// 全局参数
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// Directory containing the subtitle files
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Program invoked once per file as `<tool> [tool-args] <file> <flag>`
    #[arg(long, global = true, env = "SRT_BATCH_TOOL", default_value = DEFAULT_TOOL)]
    pub tool: PathBuf,

    /// Arguments placed before the file argument (repeatable)
    #[arg(
        long = "tool-arg",
        value_name = "ARG",
        global = true,
        env = "SRT_BATCH_TOOL_ARGS",
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_value = DEFAULT_TOOL_SCRIPT
    )]
    pub tool_args: Vec<String>,

    /// Echo the tool's full standard output for every file
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
}

impl ToolArgs {
    /// 构造外部工具
    pub fn external_tool(&self) -> ExternalTool {
        ExternalTool::new(&self.tool, &self.dir).with_leading_args(&self.tool_args)
    }
}
