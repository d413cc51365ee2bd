use crate::core::{BatchError, BatchResult, InputFile};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// 入力ファイルの既定拡張子
pub const DEFAULT_INPUT_EXTENSION: &str = "fasta";

pub struct FileScanner;

impl FileScanner {
    /// ルート以下を再帰的に走査し、拡張子が一致するファイルをパス順で返す
    pub fn scan_directory(directory: &Path, extension: &str) -> BatchResult<Vec<InputFile>> {
        if !directory.is_dir() {
            return Err(BatchError::directory_not_found(
                directory.display().to_string(),
            ));
        }

        let mut inputs = Vec::new();

        for entry in WalkDir::new(directory).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                BatchError::file_discovery(directory.display().to_string(), e)
            })?;

            if Self::is_regular_file(&entry) && Self::has_extension(entry.path(), extension) {
                inputs.push(InputFile::from(entry.path()));
            }
        }

        inputs.sort();
        tracing::debug!(
            root = %directory.display(),
            count = inputs.len(),
            "入力ファイルを発見"
        );
        Ok(inputs)
    }

    /// 通常ファイル、または通常ファイルを指すシンボリックリンク
    ///
    /// シンボリックリンクのディレクトリには降りない。
    fn is_regular_file(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    /// `*.{extension}` と同じ判定 (`.fasta` のようなドット始まりの名前も含む)
    fn has_extension(path: &Path, extension: &str) -> bool {
        let suffix = format!(".{extension}");
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&suffix))
    }
}
