//! # extract 命令实现
//!
//! 对目录中每个 `*.srt` 调用外部工具提取文本。
//!
//! ## 功能
//! - `TextKind::Primary`: 双语字幕的主语言文本 (`-e`)
//! - `TextKind::All`: 非双语字幕的全部文本 (`-a`)
//!
//! 派生文本文件由外部工具写出，这里不读写字幕内容。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/`, `utils/output.rs`

use super::report_summary;
use crate::batch::{BatchJob, BatchResult, BatchRunner, FileCollector};
use crate::error::Result;
use crate::models::{FileKind, TextKind, ToolMode};
use crate::tool::ToolInvoker;
use crate::utils::output;

use std::path::Path;

/// 执行批量提取
pub fn execute<T: ToolInvoker>(
    dir: &Path,
    runner: &BatchRunner<'_, T>,
    kind: TextKind,
) -> Result<BatchResult> {
    let mode = ToolMode::Extract(kind);
    output::print_header(&format!("Batch {} extraction", kind));

    let collector = FileCollector::for_kind(dir, FileKind::Subtitle)?;
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No subtitle files matching '{}' found in {}",
            collector.pattern(),
            dir.display()
        ));
        return Ok(BatchResult::default());
    }

    output::print_info(&format!("Found {} subtitle file(s)", files.len()));
    output::print_info(&format!("Command: {}", runner.describe(mode)));
    output::print_separator();

    let jobs = files.into_iter().map(BatchJob::Run).collect();
    let result = runner.run(jobs, mode);
    report_summary(&result, mode);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::runner::tests::FakeTool;
    use crate::models::Invocation;
    use std::fs;

    #[test]
    fn test_empty_directory_invokes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let tool = FakeTool::default();
        let runner = BatchRunner::new(&tool);

        for kind in [TextKind::Primary, TextKind::All] {
            let result = execute(dir.path(), &runner, kind).unwrap();
            assert_eq!(result, BatchResult::default());
        }
        assert!(tool.calls.borrow().is_empty());
    }

    #[test]
    fn test_every_subtitle_invoked_once_with_flag() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["ep2.srt", "ep1.srt", "ep3.srt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let tool = FakeTool::default()
            .with("ep2.srt", Some(Invocation::new(Some(1), "", "broken")))
            .with("ep3.srt", None);
        let runner = BatchRunner::new(&tool);

        let result = execute(dir.path(), &runner, TextKind::All).unwrap();

        assert_eq!(tool.called_names(), vec!["ep1.srt", "ep2.srt", "ep3.srt"]);
        assert!(tool
            .calls
            .borrow()
            .iter()
            .all(|(_, mode)| mode.flag() == "-a"));
        assert_eq!(result.success, 1);
        assert_eq!(result.failed, 2);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_single_file_success_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ep1.srt"), "").unwrap();

        let ok = FakeTool::default().with(
            "ep1.srt",
            Some(Invocation::new(Some(0), "成功提取 10 行中文文本", "")),
        );
        let result = execute(dir.path(), &BatchRunner::new(&ok), TextKind::Primary).unwrap();
        assert_eq!((result.success, result.total()), (1, 1));
        assert_eq!(ok.calls.borrow()[0].1.flag(), "-e");

        let failing = FakeTool::default().with(
            "ep1.srt",
            Some(Invocation::new(Some(1), "", "file not found")),
        );
        let result = execute(dir.path(), &BatchRunner::new(&failing), TextKind::Primary).unwrap();
        assert_eq!((result.success, result.total()), (0, 1));
        assert_eq!(result.failures[0].1, "file not found");
    }
}
