// 統合テスト用のフィクスチャ
#![allow(dead_code)]


pub use mocks::*;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const MINIMAL_FASTA: &[u8] = b">sp|P00001|TEST\nMKTAYIAKQR\n";

/// 相対パスの一覧からFASTAツリーを作成
pub fn create_fasta_tree(relative_paths: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut paths = Vec::new();

    for relative in relative_paths {
        let path = temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, MINIMAL_FASTA).expect("Failed to write FASTA file");
        paths.push(path);
    }

    (temp_dir, paths)
}
