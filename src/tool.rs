//! # 外部字幕工具
//!
//! 以子进程方式调用单文件字幕工具：
//!
//! ```text
//! <program> [leading args...] <file> <flag>
//! ```
//!
//! 子进程在工作目录中运行，文件以相对该目录的名称传入。
//! 调用同步阻塞、无超时。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 通过 `ToolInvoker` trait 调用
//! - 使用 `models/invocation.rs`

use crate::error::{Result, SrtBatchError};
use crate::models::{Invocation, ToolMode};

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 对单个文件调用外部工具
pub trait ToolInvoker {
    /// 以 `mode` 处理 `target`，返回捕获的结果
    fn invoke(&self, target: &Path, mode: ToolMode) -> Result<Invocation>;

    /// 命令行描述（用于输出）
    fn describe(&self, mode: ToolMode) -> String;
}

/// 通过 `std::process::Command` 调用的外部工具
#[derive(Debug, Clone)]
pub struct ExternalTool {
    /// 可执行程序
    program: PathBuf,
    /// 位于文件参数之前的固定参数
    leading_args: Vec<OsString>,
    /// 子进程工作目录
    workdir: PathBuf,
}

impl ExternalTool {
    /// 创建外部工具
    ///
    /// 含路径分隔符的相对程序路径按当前目录解析，
    /// 使 `workdir` 不影响实际启动的程序。
    pub fn new(program: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let program = if program.is_relative() && program.components().count() > 1 {
            std::env::current_dir()
                .map(|cwd| cwd.join(&program))
                .unwrap_or(program)
        } else {
            program
        };

        Self {
            program,
            leading_args: Vec::new(),
            workdir: workdir.into(),
        }
    }

    /// 设置文件参数之前的固定参数
    ///
    /// 指向当前目录中已存在文件的相对参数（如工具脚本）转为绝对路径。
    pub fn with_leading_args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        match std::env::current_dir() {
            Ok(cwd) => self.with_leading_args_in(&cwd, args),
            Err(_) => self.with_leading_args_in(Path::new(""), args),
        }
    }

    /// 以 `base` 为启动目录设置固定参数
    fn with_leading_args_in<I, S>(mut self, base: &Path, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args = args
            .into_iter()
            .map(|arg| resolve_existing_file(base, arg.into()))
            .collect();
        self
    }

    /// 构造针对 `target` 的命令
    fn command(&self, target: &Path, mode: ToolMode) -> Command {
        let file_arg = target.strip_prefix(&self.workdir).unwrap_or(target);

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .arg(file_arg)
            .arg(mode.flag())
            .current_dir(&self.workdir)
            .stdin(Stdio::null());
        cmd
    }
}

/// 相对路径参数在 `base` 下存在对应文件时返回绝对路径，否则原样返回
fn resolve_existing_file(base: &Path, arg: OsString) -> OsString {
    let path = Path::new(&arg);
    if base.as_os_str().is_empty() || !path.is_relative() {
        return arg;
    }
    let candidate = base.join(path);
    if candidate.is_file() {
        candidate.into_os_string()
    } else {
        arg
    }
}

impl ToolInvoker for ExternalTool {
    fn invoke(&self, target: &Path, mode: ToolMode) -> Result<Invocation> {
        let output = self.command(target, mode).output().map_err(|e| {
            let command = self.program.display().to_string();
            if e.kind() == ErrorKind::NotFound {
                SrtBatchError::CommandNotFound { command }
            } else {
                SrtBatchError::CommandLaunchError { command, source: e }
            }
        })?;

        Ok(Invocation::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }

    /// 例如 `python3 simple_srt_tool.py <file> -e`
    fn describe(&self, mode: ToolMode) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(
            self.leading_args
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.push("<file>".to_string());
        parts.push(mode.flag().to_string());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextKind;

    #[test]
    fn test_command_uses_relative_file_and_flag() {
        let workdir = PathBuf::from("/data/subs");
        let tool = ExternalTool::new("python3", &workdir).with_leading_args(["simple_srt_tool.py"]);
        let cmd = tool.command(&workdir.join("ep1.srt"), ToolMode::Extract(TextKind::Primary));

        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(cmd.get_program(), "python3");
        assert_eq!(args, vec!["simple_srt_tool.py", "ep1.srt", "-e"]);
        assert_eq!(cmd.get_current_dir(), Some(workdir.as_path()));
    }

    #[test]
    fn test_script_in_launch_dir_resolved_against_launch_dir() {
        let launch = tempfile::tempdir().unwrap();
        let subs = tempfile::tempdir().unwrap();
        std::fs::write(launch.path().join("simple_srt_tool.py"), "").unwrap();

        let tool = ExternalTool::new("python3", subs.path())
            .with_leading_args_in(launch.path(), ["simple_srt_tool.py", "--quiet"]);
        let cmd = tool.command(&subs.path().join("ep1.srt"), ToolMode::Extract(TextKind::Primary));

        let args: Vec<_> = cmd.get_args().map(|a| a.to_os_string()).collect();
        assert_eq!(args[0], launch.path().join("simple_srt_tool.py").into_os_string());
        assert_eq!(args[1], "--quiet");
        assert_eq!(args[2], "ep1.srt");
        assert_eq!(cmd.get_current_dir(), Some(subs.path()));
    }

    #[test]
    fn test_describe() {
        let tool = ExternalTool::new("srttool", ".");
        assert_eq!(
            tool.describe(ToolMode::Replace(TextKind::All)),
            "srttool <file> -s"
        );
    }

    #[test]
    fn test_missing_program_is_command_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let tool = ExternalTool::new("surely-not-an-installed-srt-tool", dir.path());
        let err = tool
            .invoke(&dir.path().join("ep1.srt"), ToolMode::Extract(TextKind::Primary))
            .unwrap_err();
        assert!(matches!(err, SrtBatchError::CommandNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_invoke_captures_exit_code_and_streams() {
        let dir = tempfile::tempdir().unwrap();
        let tool = ExternalTool::new("sh", dir.path()).with_leading_args([
            "-c",
            "echo \"成功提取 $0 $1\"; echo oops >&2; exit 3",
        ]);
        let inv = tool
            .invoke(&dir.path().join("ep1.srt"), ToolMode::Extract(TextKind::All))
            .unwrap();
        assert_eq!(inv.exit_code, Some(3));
        assert_eq!(inv.stdout.trim(), "成功提取 ep1.srt -a");
        assert_eq!(inv.error_text(), Some("oops\n"));
    }
}
