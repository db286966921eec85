//! # srt-batch - 字幕文件批量处理器
//!
//! 在目录中发现字幕文件，逐个调用外部单文件字幕工具，并汇总成功/失败数量。
//!
//! ## 操作
//! - 提取主语言文本 / 提取全部文本（`*.srt` -> 工具 `-e` / `-a`）
//! - 替换主语言文本 / 替换全部文本（`*_中文文本.txt` / `*_所有文本.txt` -> 工具 `-r` / `-s`）
//! - 显示文件对应关系
//! - 交互式菜单（默认）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (操作与菜单)
//!   │     ├── batch/   (文件发现与顺序执行)
//!   │     ├── tool.rs  (外部工具子进程)
//!   │     └── models/  (命名约定与调用结果)
//!   ├── utils/      (输出与进度)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod tool;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    if cli.tool.no_color {
        utils::output::disable_color();
    }

    if let Err(e) = commands::run(cli.command, &cli.tool) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
