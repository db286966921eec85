//! # 文件命名约定
//!
//! 输入字幕 `name.srt` 与派生文件之间的固定映射：
//!
//! ```text
//! name.srt ──┬── name_中文文本.txt   (主语言文本)
//!            ├── name_所有文本.txt   (全部文本)
//!            └── name_修改後.srt     (替换后的字幕)
//! ```
//!
//! 映射只做后缀替换，不解析文件名本身。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 使用
//! - 无外部模块依赖

/// 字幕文件扩展名
pub const SUBTITLE_EXTENSION: &str = ".srt";

/// 主语言文本文件后缀（双语字幕中提取的中文行）
pub const PRIMARY_TEXT_SUFFIX: &str = "中文文本";

/// 全部文本文件后缀（非双语字幕的所有行）
pub const ALL_TEXT_SUFFIX: &str = "所有文本";

/// 替换后输出字幕的后缀
pub const OUTPUT_SUFFIX: &str = "修改後";

/// 文本文件种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// 主语言文本
    Primary,
    /// 全部文本
    All,
}

impl TextKind {
    /// 该种类对应的后缀
    pub fn suffix(self) -> &'static str {
        match self {
            TextKind::Primary => PRIMARY_TEXT_SUFFIX,
            TextKind::All => ALL_TEXT_SUFFIX,
        }
    }

    /// 文本文件名结尾，例如 `_中文文本.txt`
    pub fn file_ending(self) -> String {
        format!("_{}.txt", self.suffix())
    }

    /// 用于提示信息的名称
    pub fn label(self) -> &'static str {
        match self {
            TextKind::Primary => "primary-text",
            TextKind::All => "all-text",
        }
    }
}

impl std::fmt::Display for TextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 目录中可发现的四类文件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `*.srt`
    Subtitle,
    /// `*_<后缀>.txt`
    Text(TextKind),
    /// `*_修改後.srt`
    Output,
}

impl FileKind {
    /// 该类文件的 glob 模式
    pub fn pattern(self) -> String {
        match self {
            FileKind::Subtitle => format!("*{}", SUBTITLE_EXTENSION),
            FileKind::Text(kind) => format!("*{}", kind.file_ending()),
            FileKind::Output => format!("*{}", output_ending()),
        }
    }
}

/// 输出字幕文件名结尾，例如 `_修改後.srt`
fn output_ending() -> String {
    format!("_{}{}", OUTPUT_SUFFIX, SUBTITLE_EXTENSION)
}

/// 后缀替换：`base` 以 `from_suffix` 结尾时替换为 `to_suffix`，否则原样返回
pub fn derive_name(base: &str, from_suffix: &str, to_suffix: &str) -> String {
    match base.strip_suffix(from_suffix) {
        Some(stem) => format!("{}{}", stem, to_suffix),
        None => base.to_string(),
    }
}

/// `name.srt` -> `name_<后缀>.txt`
pub fn text_name_for(subtitle: &str, kind: TextKind) -> String {
    derive_name(subtitle, SUBTITLE_EXTENSION, &kind.file_ending())
}

/// `name.srt` -> `name_修改後.srt`
pub fn output_name_for(subtitle: &str) -> String {
    derive_name(subtitle, SUBTITLE_EXTENSION, &output_ending())
}

/// `name_<后缀>.txt` -> `name.srt`
pub fn subtitle_name_for(text_file: &str, kind: TextKind) -> String {
    derive_name(text_file, &kind.file_ending(), SUBTITLE_EXTENSION)
}
