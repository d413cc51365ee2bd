// CLI層 - コマンドライン引数の定義と実行
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::Cli;
pub use commands::*;
