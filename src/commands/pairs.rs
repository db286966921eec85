//! # pairs 命令实现
//!
//! 显示每个字幕文件与其派生文件的对应关系，只读诊断，不调用外部工具。
//!
//! ## 功能
//! - 独立收集四类文件：字幕、主语言文本、全部文本、输出字幕
//! - 按字幕文件名排序，逐个检查三个派生文件是否存在
//! - 以表格形式输出
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/collector.rs`, `models/naming.rs`
//! - 使用 `tabled` 生成表格

use crate::batch::FileCollector;
use crate::error::Result;
use crate::models::naming::{output_name_for, text_name_for};
use crate::models::{FileKind, TextKind};
use crate::utils::output;

use std::collections::BTreeSet;
use std::path::Path;
use tabled::{Table, Tabled};

/// 一个派生文件及其存在情况
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Companion {
    pub name: String,
    pub present: bool,
}

impl Companion {
    fn lookup(name: String, found: &BTreeSet<String>) -> Self {
        let present = found.contains(&name);
        Self { name, present }
    }
}

impl std::fmt::Display for Companion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.present { "✓" } else { "✗" };
        write!(f, "{} {}", self.name, mark)
    }
}

/// 一个字幕文件的对应关系
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub subtitle: String,
    pub primary_text: Companion,
    pub all_text: Companion,
    pub output: Companion,
}

/// 表格行
#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Subtitle")]
    subtitle: String,
    #[tabled(rename = "Primary text")]
    primary_text: String,
    #[tabled(rename = "All text")]
    all_text: String,
    #[tabled(rename = "Output")]
    output: String,
}

impl From<&FilePair> for PairRow {
    fn from(pair: &FilePair) -> Self {
        Self {
            subtitle: pair.subtitle.clone(),
            primary_text: pair.primary_text.to_string(),
            all_text: pair.all_text.to_string(),
            output: pair.output.to_string(),
        }
    }
}

/// 执行 pairs 命令
pub fn execute(dir: &Path) -> Result<Vec<FilePair>> {
    output::print_header("File pairs");

    let pairs = collect_pairs(dir)?;
    if pairs.is_empty() {
        output::print_warning(&format!("No subtitle files found in {}", dir.display()));
        return Ok(pairs);
    }

    let rows: Vec<PairRow> = pairs.iter().map(PairRow::from).collect();
    println!("{}", Table::new(&rows));

    Ok(pairs)
}

/// 计算每个字幕文件的对应关系（按文件名排序）
pub fn collect_pairs(dir: &Path) -> Result<Vec<FilePair>> {
    let discover = |kind: FileKind| -> Result<BTreeSet<String>> {
        Ok(FileCollector::for_kind(dir, kind)?
            .collect_names()?
            .into_iter()
            .collect())
    };

    let subtitles = discover(FileKind::Subtitle)?;
    let primary_texts = discover(FileKind::Text(TextKind::Primary))?;
    let all_texts = discover(FileKind::Text(TextKind::All))?;
    let outputs = discover(FileKind::Output)?;

    Ok(subtitles
        .into_iter()
        .map(|subtitle| FilePair {
            primary_text: Companion::lookup(
                text_name_for(&subtitle, TextKind::Primary),
                &primary_texts,
            ),
            all_text: Companion::lookup(text_name_for(&subtitle, TextKind::All), &all_texts),
            output: Companion::lookup(output_name_for(&subtitle), &outputs),
            subtitle,
        })
        .collect())
}
