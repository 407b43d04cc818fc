use std::{
    fs, io,
    path::{Path, PathBuf},
};

use compound_core::Lexicon;
use thiserror::Error;
use tracing::debug;

/// 词表加载错误。
#[derive(Debug, Error)]
pub enum DictError {
    /// 文件读取失败（不存在、无权限、非 UTF-8 等）
    #[error("failed to read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 纯文本词表：
///
/// - 每行一个词
/// - 每行去掉首尾空白，空行丢弃
/// - 保持原始顺序，不去重（重复条目是不同的条目）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<String>,
}

impl WordList {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| DictError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_text(&s);
        debug!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    pub fn from_text(s: &str) -> Self {
        let mut entries: Vec<String> = Vec::new();
        let mut dropped: usize = 0;
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                dropped += 1;
                continue;
            }
            entries.push(line.to_string());
        }
        if dropped > 0 {
            debug!(dropped, "blank lines skipped");
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.entries
    }
}

impl Lexicon for WordList {
    fn words(&self) -> &[String] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
