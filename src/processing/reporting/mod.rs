// 実行結果の報告
//
// - reporting/traits.rs   - 報告トレイト
// - reporting/console.rs  - コンソール出力実装と無出力実装

pub mod traits;
pub mod console;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use traits::*;
pub use console::{ConsoleProgressReporter, NoOpProgressReporter};

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
