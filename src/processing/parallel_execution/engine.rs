// BatchEngine - 依存性注入によるバッチ実行エンジン
// 発見 → ワーカープール → 集計 → 報告 を1回の実行として管理する

use super::pipeline::WorkerPool;
use crate::core::{BatchResult, InputFile, RunSummary};
use crate::file_scanner::{FileScanner, DEFAULT_INPUT_EXTENSION};
use crate::predictor::Predictor;
use crate::processing::config::ProcessingConfig;
use crate::processing::reporting::ProgressReporter;
use std::path::Path;
use std::sync::Arc;

/// バッチ実行エンジン
///
/// 予測器・設定・報告先はコンストラクタで注入する。
pub struct BatchEngine<P, C, R> {
    predictor: Arc<P>,
    config: C,
    reporter: R,
    extension: String,
}

impl<P, C, R> BatchEngine<P, C, R>
where
    P: Predictor + 'static,
    C: ProcessingConfig,
    R: ProgressReporter,
{
    pub fn new(predictor: P, config: C, reporter: R) -> Self {
        Self {
            predictor: Arc::new(predictor),
            config,
            reporter,
            extension: DEFAULT_INPUT_EXTENSION.to_string(),
        }
    }

    /// 入力ファイルの拡張子を変更 (先頭のドットは不要)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// 指定ディレクトリ以下の全入力を処理
    ///
    /// 設定とディレクトリの検証はディスパッチ前に行う。
    /// 個々の入力の失敗は要約に記録され、エラーにはならない。
    pub async fn process_directory(&self, root: &Path) -> BatchResult<RunSummary> {
        self.config.validate()?;

        let inputs = FileScanner::scan_directory(root, &self.extension)?;
        self.reporter.report_started(root, inputs.len()).await;

        self.process_files(inputs).await
    }

    /// 入力リストを処理
    ///
    /// より細かい制御が必要な場合のAPI
    pub async fn process_files(&self, inputs: Vec<InputFile>) -> BatchResult<RunSummary> {
        self.config.validate()?;

        let available = num_cpus::get();
        if self.config.worker_count() > available {
            tracing::info!(
                workers = self.config.worker_count(),
                available,
                "ワーカー数がCPU数を超えています"
            );
        }

        let pool = WorkerPool::new(self.predictor.clone());
        let summary = pool.execute(inputs, &self.config, &self.reporter).await?;

        tracing::info!(
            total = summary.total_inputs,
            failed = summary.failed_count(),
            "全入力の処理が完了"
        );
        self.reporter.report_completed(&summary).await;

        Ok(summary)
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}
