// Result Collector - 到着順に結果を受け取り、失敗のみを蓄積する

use crate::core::{BatchError, BatchResult, InputFile, RunSummary, WorkResult};

/// 入力ごとの結果を集計する
#[derive(Debug)]
pub struct ResultCollector {
    expected: usize,
    received: usize,
    failed: Vec<InputFile>,
}

impl ResultCollector {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            received: 0,
            failed: Vec::new(),
        }
    }

    pub fn record(&mut self, result: WorkResult) {
        self.received += 1;
        if let WorkResult::Failure { input } = result {
            self.failed.push(input);
        }
    }

    pub fn received(&self) -> usize {
        self.received
    }

    /// 全結果の受信後に要約を作成
    ///
    /// 受信数が入力数と一致しない場合はエラー。
    pub fn finish(self) -> BatchResult<RunSummary> {
        if self.received != self.expected {
            return Err(BatchError::parallel_execution(format!(
                "結果数が一致しません (期待: {}, 受信: {})",
                self.expected, self.received
            )));
        }

        let mut failed = self.failed;
        failed.sort();

        Ok(RunSummary {
            total_inputs: self.expected,
            failed,
        })
    }
}
