//! # 文件收集器
//!
//! 在工作目录中按 glob 模式收集待处理文件列表。
//!
//! ## 功能
//! - 只扫描目录本身，不递归
//! - glob 模式匹配（区分大小写，`*` 不匹配隐藏文件）
//! - 按文件名排序，结果每次重新读取
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{Result, SrtBatchError};
use crate::models::FileKind;

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 文件收集器
pub struct FileCollector {
    /// 工作目录
    dir: PathBuf,
    /// 匹配模式
    pattern: Pattern,
}

impl FileCollector {
    /// 按模式字符串创建收集器
    pub fn new(dir: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| SrtBatchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            dir: dir.into(),
            pattern,
        })
    }

    /// 按文件类别创建收集器
    pub fn for_kind(dir: impl Into<PathBuf>, kind: FileKind) -> Result<Self> {
        Self::new(dir, &kind.pattern())
    }

    /// 模式字符串
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// 收集所有匹配的文件（按文件名排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(SrtBatchError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // 只有目录本身无法读取时才中止
                Err(e) if e.depth() == 0 => {
                    return Err(SrtBatchError::DirectoryReadError {
                        path: self.dir.display().to_string(),
                        source: e.into(),
                    })
                }
                Err(_) => continue,
            };
            if !self.matches(entry.path()) {
                continue;
            }
            // 跟随符号链接；失效链接与无法 stat 的条目直接跳过
            let is_file = fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            if is_file {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// 收集匹配文件的文件名
    pub fn collect_names(&self) -> Result<Vec<String>> {
        Ok(self.collect()?.iter().filter_map(|p| file_name(p)).collect())
    }

    /// 检查文件名是否匹配模式
    fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self
                .pattern
                .matches_with(&name.to_string_lossy(), MATCH_OPTIONS),
            None => false,
        }
    }
}

/// 路径中的文件名（非 UTF-8 字节按替换字符显示）
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextKind;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_collect_sorted_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.srt");
        touch(dir.path(), "a.srt");
        touch(dir.path(), "a_中文文本.txt");
        touch(dir.path(), ".hidden.srt");
        touch(dir.path(), "notes.SRT");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "c.srt");
        fs::create_dir(dir.path().join("folder.srt")).unwrap();

        let collector = FileCollector::for_kind(dir.path(), FileKind::Subtitle).unwrap();
        assert_eq!(collector.collect_names().unwrap(), vec!["a.srt", "b.srt"]);
    }

    #[test]
    fn test_collect_text_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "ep1_中文文本.txt");
        touch(dir.path(), "ep1_所有文本.txt");
        touch(dir.path(), "ep1.txt");

        let primary = FileCollector::for_kind(dir.path(), FileKind::Text(TextKind::Primary)).unwrap();
        assert_eq!(primary.collect_names().unwrap(), vec!["ep1_中文文本.txt"]);

        let all = FileCollector::for_kind(dir.path(), FileKind::Text(TextKind::All)).unwrap();
        assert_eq!(all.collect_names().unwrap(), vec!["ep1_所有文本.txt"]);
    }

    #[test]
    fn test_output_files_also_match_subtitle_pattern() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "ep1.srt");
        touch(dir.path(), "ep1_修改後.srt");

        let subs = FileCollector::for_kind(dir.path(), FileKind::Subtitle).unwrap();
        assert_eq!(subs.collect().unwrap().len(), 2);
        let outputs = FileCollector::for_kind(dir.path(), FileKind::Output).unwrap();
        assert_eq!(outputs.collect_names().unwrap(), vec!["ep1_修改後.srt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_does_not_abort_discovery() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "ep1.srt");
        touch(dir.path(), "target.srt");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("stale-link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere.srt"), dir.path().join("stale.srt")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("target.srt"), dir.path().join("linked.srt")).unwrap();

        let collector = FileCollector::for_kind(dir.path(), FileKind::Subtitle).unwrap();
        assert_eq!(
            collector.collect_names().unwrap(),
            vec!["ep1.srt", "linked.srt", "target.srt"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_are_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"ep\xff1.srt");
        // 部分文件系统拒绝非 UTF-8 文件名
        if fs::write(dir.path().join(raw), "").is_err() {
            return;
        }
        touch(dir.path(), "ep2.srt");

        let collector = FileCollector::for_kind(dir.path(), FileKind::Subtitle).unwrap();
        let files = collector.collect().unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.contains(&dir.path().join(raw)));
        assert_eq!(file_name(&dir.path().join(raw)).unwrap(), "ep\u{FFFD}1.srt");
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let collector = FileCollector::new(dir.path().join("gone"), "*.srt").unwrap();
        assert!(matches!(
            collector.collect(),
            Err(SrtBatchError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            FileCollector::new(".", "[*.srt"),
            Err(SrtBatchError::InvalidPattern { .. })
        ));
    }
}
