//! # 命令执行模块
//!
//! 实现各批处理操作的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`, `utils/`
//! - 子模块: extract, replace, pairs, menu

pub mod extract;
pub mod menu;
pub mod pairs;
pub mod replace;

use crate::batch::{BatchResult, BatchRunner};
use crate::cli::tool::ToolArgs;
use crate::cli::Commands;
use crate::error::{Result, SrtBatchError};
use crate::models::{TextKind, ToolMode};
use crate::tool::ToolInvoker;
use crate::utils::output;

use std::path::Path;

/// 菜单与子命令共用的批处理操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// 提取主语言文本
    ExtractPrimary,
    /// 提取全部文本
    ExtractAll,
    /// 用主语言文本替换
    ReplacePrimary,
    /// 用全部文本替换
    ReplaceAll,
    /// 显示文件对应关系
    ShowPairs,
}

impl Operation {
    /// 在 `dir` 中执行操作
    pub fn execute<T: ToolInvoker>(self, dir: &Path, runner: &BatchRunner<'_, T>) -> Result<()> {
        match self {
            Operation::ExtractPrimary => {
                extract::execute(dir, runner, TextKind::Primary)?;
            }
            Operation::ExtractAll => {
                extract::execute(dir, runner, TextKind::All)?;
            }
            Operation::ReplacePrimary => {
                replace::execute(dir, runner, TextKind::Primary)?;
            }
            Operation::ReplaceAll => {
                replace::execute(dir, runner, TextKind::All)?;
            }
            Operation::ShowPairs => {
                pairs::execute(dir)?;
            }
        }
        Ok(())
    }
}

/// 执行命令
pub fn run(cmd: Option<Commands>, args: &ToolArgs) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(SrtBatchError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    let tool = args.external_tool();
    let runner = BatchRunner::new(&tool).verbose(args.verbose);

    let operation = match cmd.unwrap_or(Commands::Menu) {
        Commands::Extract => Operation::ExtractPrimary,
        Commands::ExtractAll => Operation::ExtractAll,
        Commands::Replace => Operation::ReplacePrimary,
        Commands::ReplaceAll => Operation::ReplaceAll,
        Commands::Pairs => Operation::ShowPairs,
        Commands::Menu => return menu::execute(&args.dir, &runner),
    };

    operation.execute(&args.dir, &runner)
}

/// 打印批次汇总
fn report_summary(result: &BatchResult, mode: ToolMode) {
    println!();
    output::print_separator();
    if result.skipped > 0 {
        output::print_info(&format!(
            "Tool invoked {} time(s), {} file(s) skipped",
            result.invoked(),
            result.skipped
        ));
    }
    for (name, reason) in &result.failures {
        output::print_warning(&format!("Failed: {} ({})", name, first_line(reason)));
    }
    output::print_done(&format!(
        "{} finished: {}/{} file(s) succeeded",
        mode.action(),
        result.success,
        result.total()
    ));
}

/// 多行错误信息的第一行
fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
