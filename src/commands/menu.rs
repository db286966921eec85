//! # 交互式菜单
//!
//! 读取一行输入、分派操作、重复，直到选择退出或输入结束。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `commands::Operation`, `utils/output.rs`

use super::Operation;
use crate::batch::BatchRunner;
use crate::error::Result;
use crate::tool::ToolInvoker;
use crate::utils::output;

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// 菜单选项（编号, 说明）
const MENU_ENTRIES: [(&str, &str); 6] = [
    ("1", "Extract primary-language text from all SRT files"),
    ("2", "Extract all text from all SRT files (non-bilingual subtitles)"),
    ("3", "Replace SRT files that have a matching primary-text file"),
    ("4", "Replace SRT files that have a matching all-text file"),
    ("5", "Show file pairs"),
    ("6", "Exit"),
];

/// 一次菜单选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
}

impl MenuChoice {
    /// 解析用户输入，无法识别时返回 None
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Run(Operation::ExtractPrimary),
            "2" => MenuChoice::Run(Operation::ExtractAll),
            "3" => MenuChoice::Run(Operation::ReplacePrimary),
            "4" => MenuChoice::Run(Operation::ReplaceAll),
            "5" => MenuChoice::Run(Operation::ShowPairs),
            "6" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// 在标准输入/输出上运行菜单
pub fn execute<T: ToolInvoker>(dir: &Path, runner: &BatchRunner<'_, T>) -> Result<()> {
    let stdin = io::stdin();
    run_menu(stdin.lock(), io::stdout(), |op| op.execute(dir, runner))
}

/// 菜单主循环
///
/// 操作返回的错误只打印，不终止循环。
pub fn run_menu<R, W, F>(mut input: R, mut out: W, mut dispatch: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(Operation) -> Result<()>,
{
    writeln!(out, "=== SRT batch processor ===")?;
    writeln!(out)?;
    writeln!(out, "Choose an action:")?;
    for (key, label) in MENU_ENTRIES {
        writeln!(out, "{}. {}", key, label)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "\nSelect (1-6): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            return Ok(());
        }

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            Some(MenuChoice::Run(op)) => {
                if let Err(e) = dispatch(op) {
                    output::print_error(&e.to_string());
                }
            }
            None => {
                writeln!(
                    out,
                    "{} Invalid choice, please try again",
                    "[ERR]".red().bold()
                )?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SrtBatchError;
    use std::io::Cursor;

    fn drive(input: &str) -> (String, Vec<Operation>) {
        let mut out = Vec::new();
        let mut seen = Vec::new();
        run_menu(Cursor::new(input.to_string()), &mut out, |op| {
            seen.push(op);
            Ok(())
        })
        .unwrap();
        (String::from_utf8(out).unwrap(), seen)
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse(" 1 \n"), Some(MenuChoice::Run(Operation::ExtractPrimary)));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Run(Operation::ShowPairs)));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_invalid_then_exit() {
        let (text, seen) = drive("9\n6\n");
        assert_eq!(text.matches("Invalid choice").count(), 1);
        assert!(text.ends_with("Goodbye!\n"));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_dispatches_in_order_until_exit() {
        let (_, seen) = drive("1\n2\n3\n4\n5\n6\n1\n");
        assert_eq!(
            seen,
            vec![
                Operation::ExtractPrimary,
                Operation::ExtractAll,
                Operation::ReplacePrimary,
                Operation::ReplaceAll,
                Operation::ShowPairs,
            ]
        );
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let (text, seen) = drive("5\n");
        assert_eq!(seen, vec![Operation::ShowPairs]);
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn test_operation_error_does_not_stop_menu() {
        let mut calls = 0;
        let mut out = Vec::new();
        run_menu(Cursor::new("1\n1\n6\n"), &mut out, |_| {
            calls += 1;
            Err(SrtBatchError::DirectoryNotFound {
                path: "gone".to_string(),
            })
        })
        .unwrap();
        assert_eq!(calls, 2);
    }
}
