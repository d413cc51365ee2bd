// コンソール出力による報告実装

use super::traits::ProgressReporter;
use crate::core::{RunSummary, WorkResult};
use async_trait::async_trait;
use std::path::Path;

/// 冗長度に応じてコンソールへ要約を出力する
///
/// 冗長度0では何も出力しない。1以上では件数と失敗リストの両方を出力する。
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    verbosity: u8,
}

impl ConsoleProgressReporter {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    pub fn is_enabled(&self) -> bool {
        self.verbosity > 0
    }

    pub fn format_started(root: &Path, total_inputs: usize) -> String {
        format!("Running for {total_inputs} FASTA files in {}.", root.display())
    }

    pub fn format_completed(summary: &RunSummary) -> String {
        format!(
            "{} has failed out of {} inputs.",
            summary.failed_count(),
            summary.total_inputs
        )
    }

    pub fn format_failed_list(summary: &RunSummary) -> String {
        let failed: Vec<&str> = summary.failed.iter().map(|input| input.as_str()).collect();
        format!("FILES failed: {failed:?}")
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, root: &Path, total_inputs: usize) {
        if self.is_enabled() {
            println!("{}", Self::format_started(root, total_inputs));
        }
    }

    async fn report_result(&self, _result: &WorkResult) {
        // 途中経過は出力しない
    }

    async fn report_completed(&self, summary: &RunSummary) {
        if self.is_enabled() {
            println!("{}", Self::format_completed(summary));
            println!("{}", Self::format_failed_list(summary));
        }
    }
}

/// 何もしない報告実装（ライブラリ利用・テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _root: &Path, _total_inputs: usize) {
        // 何もしない
    }

    async fn report_result(&self, _result: &WorkResult) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &RunSummary) {
        // 何もしない
    }
}
