//! # 批量执行器
//!
//! 逐个文件顺序调用外部工具，汇总结果。
//!
//! ## 功能
//! - 同步、顺序执行，一次只运行一个子进程
//! - 子进程运行期间显示 spinner
//! - 每个文件的失败（非零退出、启动异常）就地处理，批次继续
//! - 成功/跳过/失败统计
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs`, `commands/replace.rs` 调用
//! - 使用 `tool.rs` 的 `ToolInvoker`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::collector::file_name;
use crate::models::ToolMode;
use crate::tool::ToolInvoker;
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 一个待执行条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchJob {
    /// 对目标字幕调用工具
    Run(PathBuf),
    /// 缺少对应字幕，跳过（源文件, 缺失的字幕文件）
    Skip(PathBuf, PathBuf),
}

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功（附带工具输出中的摘要行）
    Success(String, Option<String>),
    /// 跳过
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件名, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(..) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总数量（发现的文件数，含跳过）
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    /// 实际调用工具的次数
    pub fn invoked(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner<'a, T: ToolInvoker> {
    /// 外部工具
    tool: &'a T,
    /// 是否回显完整 stdout
    verbose: bool,
}

impl<'a, T: ToolInvoker> BatchRunner<'a, T> {
    /// 创建新的批量执行器
    pub fn new(tool: &'a T) -> Self {
        Self {
            tool,
            verbose: false,
        }
    }

    /// 设置是否回显工具的完整输出
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 工具命令行描述
    pub fn describe(&self, mode: ToolMode) -> String {
        self.tool.describe(mode)
    }

    /// 顺序处理条目列表
    pub fn run(&self, jobs: Vec<BatchJob>, mode: ToolMode) -> BatchResult {
        let mut batch_result = BatchResult::default();

        for job in jobs {
            let result = match job {
                BatchJob::Run(target) => self.process(target, mode),
                BatchJob::Skip(source, missing) => {
                    let missing = display_name(&missing);
                    println!();
                    output::print_skip(&format!(
                        "No matching subtitle file {} for {}",
                        missing,
                        display_name(&source)
                    ));
                    ProcessResult::Skipped(missing)
                }
            };
            batch_result.merge(result);
        }

        batch_result
    }

    /// 处理单个文件
    fn process(&self, target: PathBuf, mode: ToolMode) -> ProcessResult {
        let name = display_name(&target);
        println!();
        output::print_info(&format!("Processing: {}", name));

        let spinner = progress::create_spinner(&format!("Running {} on {}", mode, name));
        let invocation = self.tool.invoke(&target, mode);
        spinner.finish_and_clear();

        match invocation {
            Ok(inv) if inv.success() => {
                output::print_success(&format!("{} succeeded", mode.action()));
                let summary = inv
                    .first_line_containing(mode.success_marker())
                    .map(|line| line.to_string());
                if self.verbose {
                    output::print_indented(inv.stdout.trim_end());
                } else if let Some(line) = &summary {
                    output::print_indented(line);
                }
                ProcessResult::Success(name, summary)
            }
            Ok(inv) => {
                let code = inv
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                output::print_error(&format!("{} failed (exit {})", mode.action(), code));
                if self.verbose {
                    output::print_indented(inv.stdout.trim_end());
                }
                let detail = match inv.error_text() {
                    Some(text) => {
                        // eprintln 会补上换行
                        let shown = text.strip_suffix('\n').unwrap_or(text);
                        output::print_error(&format!("  Error: {}", shown));
                        text.to_string()
                    }
                    None => format!("exit {}", code),
                };
                ProcessResult::Failed(name, detail)
            }
            Err(e) => {
                output::print_error(&format!("Processing error: {}", e));
                ProcessResult::Failed(name, e.to_string())
            }
        }
    }
}

/// 显示用文件名
fn display_name(path: &std::path::Path) -> String {
    file_name(path).unwrap_or_else(|| path.display().to_string())
}
