//! # 批量处理模块
//!
//! 提供统一的文件发现与逐文件调用能力。
//!
//! ## 功能
//! - 按 glob 模式收集工作目录中的文件
//! - 顺序调用外部工具
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir` + `glob` 发现文件
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchJob, BatchResult, BatchRunner};
