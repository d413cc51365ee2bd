// コアレイヤー - 基本型とエラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{BatchError, BatchResult, InvocationError};
pub use types::{InputFile, RunSummary, WorkResult};
