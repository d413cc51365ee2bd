// ワーカープールの設定管理
//
// このモジュールは設定管理機能を提供する：
// - config/traits.rs   - 設定トレイトとチャンク分割の既定実装
// - config/default.rs  - コマンドライン引数から組み立てる既定設定

pub mod traits;
pub mod default;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use traits::*;
pub use default::DefaultProcessingConfig;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
