//! # 数据模型模块
//!
//! 定义文件命名约定与外部工具调用模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/` 和 `tool.rs` 使用
//! - 子模块: naming, invocation

pub mod invocation;
pub mod naming;

pub use invocation::{Invocation, ToolMode};
pub use naming::{FileKind, TextKind};
