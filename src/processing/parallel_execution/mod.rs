// 並列実行機能
// Producer-Consumer パターンによるワーカープールとオーケストレーション

pub mod producer;
pub mod consumer;
pub mod pipeline;
pub mod engine;

// 公開API
pub use producer::spawn_producer;
pub use consumer::{process_single_input, spawn_single_worker, spawn_workers};
pub use pipeline::WorkerPool;
pub use engine::BatchEngine;
