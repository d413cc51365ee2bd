use super::{Predictor, PREDICTOR_FLAG};
use crate::core::{InputFile, InvocationError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// 既定の予測器プログラム
pub const DEFAULT_PREDICTOR_PROGRAM: &str = "perl";

/// 既定の予測器スクリプト
pub const DEFAULT_PREDICTOR_SCRIPT: &str = "../run_disopred.pl";

/// 外部プロセスとして予測器を起動する実装
///
/// `<program> [leading_args...] <input> <flag>` の形で起動し、終了コードのみを観測する。
/// 標準出力と標準エラーは親プロセスから引き継ぐ。
#[derive(Debug, Clone)]
pub struct CommandPredictor {
    program: String,
    leading_args: Vec<String>,
}

impl CommandPredictor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn leading_args(&self) -> &[String] {
        &self.leading_args
    }

    fn build_command(&self, input: &InputFile) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg(input.as_path())
            .arg(PREDICTOR_FLAG)
            .stdin(Stdio::null());
        command
    }
}

impl Default for CommandPredictor {
    fn default() -> Self {
        Self::new(DEFAULT_PREDICTOR_PROGRAM).with_leading_args([DEFAULT_PREDICTOR_SCRIPT])
    }
}

#[async_trait]
impl Predictor for CommandPredictor {
    async fn predict(&self, input: &InputFile) -> Result<(), InvocationError> {
        tracing::debug!(program = %self.program, input = %input, "予測器を起動");

        let status = self
            .build_command(input)
            .status()
            .await
            .map_err(|source| InvocationError::Launch {
                input: input.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InvocationError::NonZeroExit {
                input: input.clone(),
                code: status.code(),
            })
        }
    }
}
