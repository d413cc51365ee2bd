// 既定の設定実装

use super::traits::ProcessingConfig;
use crate::core::{BatchError, BatchResult};

/// 既定のワーカー数
pub const DEFAULT_WORKER_COUNT: usize = 1;

/// 既定のチャンネルバッファサイズ
pub const DEFAULT_BUFFER_SIZE: usize = 64;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultProcessingConfig {
    worker_count: usize,
    buffer_size: usize,
}

impl DefaultProcessingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// コマンドラインで指定されたワーカー数から設定を作成
    ///
    /// 0以下の値はここで拒否する。
    pub fn from_requested_workers(requested: i64) -> BatchResult<Self> {
        if requested < 1 {
            return Err(BatchError::configuration(format!(
                "ワーカー数は1以上である必要があります (指定値: {requested})"
            )));
        }

        let worker_count = usize::try_from(requested).map_err(|_| {
            BatchError::configuration(format!("ワーカー数が大きすぎます (指定値: {requested})"))
        })?;

        Ok(Self::default().with_worker_count(worker_count))
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

impl Default for DefaultProcessingConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ProcessingConfig for DefaultProcessingConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }
}
