// Pipeline - Producer / ワーカープール / Collector の結線

use super::{consumer::spawn_workers, producer::spawn_producer};
use crate::core::{BatchError, BatchResult, InputFile, RunSummary, WorkResult};
use crate::predictor::Predictor;
use crate::processing::collector::ResultCollector;
use crate::processing::config::ProcessingConfig;
use crate::processing::reporting::ProgressReporter;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 固定サイズのワーカープール
///
/// 全入力をちょうど1回ずつ処理し、全タスクを合流させてから要約を返す。
pub struct WorkerPool<P: ?Sized> {
    predictor: Arc<P>,
}

impl<P> WorkerPool<P>
where
    P: Predictor + ?Sized + 'static,
{
    pub fn new(predictor: Arc<P>) -> Self {
        Self { predictor }
    }

    /// 入力リストを処理
    pub async fn execute<C, R>(
        &self,
        inputs: Vec<InputFile>,
        config: &C,
        reporter: &R,
    ) -> BatchResult<RunSummary>
    where
        C: ProcessingConfig + ?Sized,
        R: ProgressReporter + ?Sized,
    {
        config.validate()?;

        let total_inputs = inputs.len();
        let chunk_size = config.chunk_size(total_inputs);
        tracing::info!(
            total_inputs,
            workers = config.worker_count(),
            chunk_size,
            "ワーカープールを起動"
        );

        // Producer-Consumerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<Vec<InputFile>>(config.channel_buffer_size());
        let (result_tx, mut result_rx) = mpsc::channel::<WorkResult>(config.channel_buffer_size());

        let producer_handle = spawn_producer(inputs, chunk_size, work_tx);
        let worker_handles = spawn_workers(
            self.predictor.clone(),
            work_rx,
            result_tx,
            config.worker_count(),
        );

        // 到着順に結果を集計 (全ワーカーがresult_txを手放すと終了)
        let mut collector = ResultCollector::new(total_inputs);
        while let Some(result) = result_rx.recv().await {
            reporter.report_result(&result).await;
            collector.record(result);
        }

        // 失敗時も含めて全タスクを合流させる
        let mut first_error = None;
        for handle in std::iter::once(producer_handle).chain(worker_handles) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => Err(BatchError::task(join_error)),
            };
            if let Err(error) = outcome {
                tracing::error!(%error, "ワーカータスクが異常終了");
                first_error.get_or_insert(error);
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }

        collector.finish()
    }
}
