// Consumer - 並列ワーカー機能

use crate::core::{BatchResult, InputFile, WorkResult};
use crate::predictor::Predictor;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// 単一入力の処理
///
/// 予測器の失敗はここで失敗結果に変換し、呼び出し元へは伝播しない。
pub async fn process_single_input<P>(predictor: &P, input: InputFile, worker_id: usize) -> WorkResult
where
    P: Predictor + ?Sized,
{
    tracing::debug!(worker_id, input = %input, "処理開始");

    match predictor.predict(&input).await {
        Ok(()) => WorkResult::Success { input },
        Err(error) => {
            tracing::warn!(worker_id, %error, "予測器の実行に失敗");
            WorkResult::Failure { input }
        }
    }
}

/// 単一ワーカー
///
/// 作業チャンネルからチャンクを取り出し、1入力ずつ予測器を実行して結果を送る。
pub fn spawn_single_worker<P>(
    worker_id: usize,
    predictor: Arc<P>,
    work_rx: Arc<Mutex<mpsc::Receiver<Vec<InputFile>>>>,
    result_tx: mpsc::Sender<WorkResult>,
) -> tokio::task::JoinHandle<BatchResult<()>>
where
    P: Predictor + ?Sized + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次のチャンクを取得
            let chunk = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(chunk) => chunk,
                    None => break, // チャンネル終了
                }
            };

            for input in chunk {
                let result = process_single_input(predictor.as_ref(), input, worker_id).await;

                if result_tx.send(result).await.is_err() {
                    // 結果チャンネルが閉じられた場合は終了
                    return Ok(());
                }
            }
        }
        Ok(())
    })
}

/// 固定サイズのワーカープールを起動
pub fn spawn_workers<P>(
    predictor: Arc<P>,
    work_rx: mpsc::Receiver<Vec<InputFile>>,
    result_tx: mpsc::Sender<WorkResult>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<BatchResult<()>>>
where
    P: Predictor + ?Sized + 'static,
{
    let work_rx = Arc::new(Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_worker(
                worker_id,
                predictor.clone(),
                work_rx.clone(),
                result_tx.clone(),
            )
        })
        .collect()
}
