use crate::core::{InputFile, InvocationError};
use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

pub mod command;

/// 予測器に渡す固定フラグ
pub const PREDICTOR_FLAG: &str = "1";

/// 外部予測器の呼び出しを抽象化するトレイト
///
/// 1入力につき1回呼ばれ、予測器の終了まで待機する。
/// 予測器の出力は予測器自身がディスクへ書き出すため、ここでは成否のみを扱う。
#[automock]
#[async_trait]
pub trait Predictor: Send + Sync {
    /// 入力ファイルに対して予測器を実行する
    async fn predict(&self, input: &InputFile) -> Result<(), InvocationError>;
}

// Predictor for Box<dyn Predictor>
#[async_trait]
impl Predictor for Box<dyn Predictor> {
    async fn predict(&self, input: &InputFile) -> Result<(), InvocationError> {
        self.as_ref().predict(input).await
    }
}

#[async_trait]
impl<P: Predictor + ?Sized> Predictor for Arc<P> {
    async fn predict(&self, input: &InputFile) -> Result<(), InvocationError> {
        self.as_ref().predict(input).await
    }
}
