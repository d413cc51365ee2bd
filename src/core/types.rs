// バッチ実行で扱うデータ構造

use std::fmt;
use std::path::{Path, PathBuf};

/// 1つの配列ファイルを表す入力
///
/// 同一性はパス文字列で決まり、発見後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputFile(String);

impl InputFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&Path> for InputFile {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for InputFile {
    fn from(path: PathBuf) -> Self {
        Self::from(path.as_path())
    }
}

impl fmt::Display for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1入力の処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkResult {
    Success { input: InputFile },
    Failure { input: InputFile },
}

impl WorkResult {
    pub fn input(&self) -> &InputFile {
        match self {
            Self::Success { input } | Self::Failure { input } => input,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// 1回の実行の集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_inputs: usize,
    /// 失敗した入力 (パス順)
    pub failed: Vec<InputFile>,
}

impl RunSummary {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn succeeded_count(&self) -> usize {
        self.total_inputs - self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
