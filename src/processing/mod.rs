// ワーカープールによるバッチ実行システム
// 機能別フォルダ構造によるアーキテクチャ

pub mod config;             // 設定管理
pub mod reporting;          // 実行結果の報告
pub mod collector;          // 結果の集計
pub mod parallel_execution; // Producer / ワーカープール / エンジン


// 公開API - 各機能から再エクスポート
pub use config::{DefaultProcessingConfig, ProcessingConfig};
pub use reporting::{ConsoleProgressReporter, NoOpProgressReporter, ProgressReporter};
pub use collector::ResultCollector;
pub use parallel_execution::{BatchEngine, WorkerPool};
