//! # replace 命令实现
//!
//! 对每个 `*_<后缀>.txt` 推导出对应的 `.srt`，调用外部工具替换字幕文本。
//!
//! ## 功能
//! - `TextKind::Primary`: `*_中文文本.txt`，标志 `-r`
//! - `TextKind::All`: `*_所有文本.txt`，标志 `-s`
//! - 对应字幕不存在时跳过（不算成功也不算失败）
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/`, `models/naming.rs`, `utils/output.rs`

use super::report_summary;
use crate::batch::collector::file_name;
use crate::batch::{BatchJob, BatchResult, BatchRunner, FileCollector};
use crate::error::Result;
use crate::models::naming::subtitle_name_for;
use crate::models::{FileKind, TextKind, ToolMode};
use crate::tool::ToolInvoker;
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 执行批量替换
pub fn execute<T: ToolInvoker>(
    dir: &Path,
    runner: &BatchRunner<'_, T>,
    kind: TextKind,
) -> Result<BatchResult> {
    let mode = ToolMode::Replace(kind);
    output::print_header(&format!("Batch {} replacement", kind));

    let collector = FileCollector::for_kind(dir, FileKind::Text(kind))?;
    let text_files = collector.collect()?;

    if text_files.is_empty() {
        output::print_warning(&format!(
            "No {} files matching '{}' found in {}",
            kind,
            collector.pattern(),
            dir.display()
        ));
        output::print_info(&format!("Run the {} extraction first", kind));
        return Ok(BatchResult::default());
    }

    output::print_info(&format!("Found {} {} file(s)", text_files.len(), kind));
    output::print_info(&format!("Command: {}", runner.describe(mode)));
    output::print_separator();

    let jobs = plan_jobs(dir, text_files, kind);
    let result = runner.run(jobs, mode);
    report_summary(&result, mode);

    Ok(result)
}

/// 为每个文本文件推导目标字幕，缺失时生成跳过条目
fn plan_jobs(dir: &Path, text_files: Vec<PathBuf>, kind: TextKind) -> Vec<BatchJob> {
    text_files
        .into_iter()
        .map(|text_file| {
            let name = file_name(&text_file).unwrap_or_default();
            let subtitle = dir.join(subtitle_name_for(&name, kind));
            if subtitle.exists() {
                BatchJob::Run(subtitle)
            } else {
                BatchJob::Skip(text_file, subtitle)
            }
        })
        .collect()
}
