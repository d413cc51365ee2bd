// 進捗報告のトレイト定義

use crate::core::{RunSummary, WorkResult};
use std::path::Path;

/// 実行状況の報告を抽象化するトレイト
#[async_trait::async_trait]
pub trait ProgressReporter: Send + Sync {
    /// ディスパッチ前、発見した入力数の報告
    async fn report_started(&self, root: &Path, total_inputs: usize);

    /// 1入力の処理完了の報告 (到着順)
    async fn report_result(&self, result: &WorkResult);

    /// 全入力の処理完了の報告
    async fn report_completed(&self, summary: &RunSummary);
}
