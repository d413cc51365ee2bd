// 設定管理のトレイト定義

use crate::core::{BatchError, BatchResult};

/// ワーカープールの設定を抽象化するトレイト
pub trait ProcessingConfig: Send + Sync {
    /// 並列ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 1回の取り出しで渡す入力数
    ///
    /// スケジューリング上の目安であり、結果には影響しない。
    /// 入力数がワーカー数より少ない場合も1に丸める。
    fn chunk_size(&self, total_inputs: usize) -> usize {
        (total_inputs / self.worker_count().max(1)).max(1)
    }

    /// ディスパッチ前の設定検証
    fn validate(&self) -> BatchResult<()> {
        if self.worker_count() == 0 {
            return Err(BatchError::configuration("ワーカー数は1以上である必要があります"));
        }

        if self.channel_buffer_size() == 0 {
            return Err(BatchError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        Ok(())
    }
}
