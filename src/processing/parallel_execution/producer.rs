// Producer - 入力をチャンク単位で配信

use crate::core::{BatchResult, InputFile};
use tokio::sync::mpsc;

/// Producer: 入力リストをチャンクに分けて作業チャンネルへ送る
pub fn spawn_producer(
    inputs: Vec<InputFile>,
    chunk_size: usize,
    work_tx: mpsc::Sender<Vec<InputFile>>,
) -> tokio::task::JoinHandle<BatchResult<()>> {
    let chunk_size = chunk_size.max(1);

    tokio::spawn(async move {
        let mut inputs = inputs.into_iter().peekable();

        while inputs.peek().is_some() {
            let chunk: Vec<InputFile> = inputs.by_ref().take(chunk_size).collect();
            if work_tx.send(chunk).await.is_err() {
                // 全ワーカーが終了している
                break;
            }
        }
        // work_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
