// バッチ実行のエラー型定義
// 実行全体を止めるエラー(BatchError)と、入力単位で回収されるエラー(InvocationError)を分離する

use crate::core::types::InputFile;
use thiserror::Error;

/// 実行全体に対するエラー型
///
/// いずれもディスパッチ前、またはワーカープール合流後にのみ発生する。
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("ディレクトリが見つかりません: {path}")]
    DirectoryNotFound { path: String },

    #[error("設定エラー: {message}")]
    InvalidConfiguration { message: String },

    #[error("ファイル発見エラー: {path} - {source}")]
    FileDiscovery {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("並列処理エラー: {message}")]
    ParallelExecution { message: String },

    #[error("タスクエラー: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl BatchError {
    /// ディレクトリ不在エラーの作成
    pub fn directory_not_found(path: impl Into<String>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// ファイル発見エラーの作成
    pub fn file_discovery(path: impl Into<String>, source: walkdir::Error) -> Self {
        Self::FileDiscovery {
            path: path.into(),
            source,
        }
    }

    /// 並列実行エラーの作成
    pub fn parallel_execution(message: impl Into<String>) -> Self {
        Self::ParallelExecution {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }
}

/// 外部予測器の呼び出し失敗
///
/// ワーカー内で失敗結果に変換され、呼び出し元へは伝播しない。
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("予測器の起動に失敗しました: {input} - {source}")]
    Launch {
        input: InputFile,
        #[source]
        source: std::io::Error,
    },

    #[error("予測器が異常終了しました: {input} (終了コード: {})", describe_code(.code))]
    NonZeroExit { input: InputFile, code: Option<i32> },
}

impl InvocationError {
    /// 失敗した入力ファイル
    pub fn input(&self) -> &InputFile {
        match self {
            Self::Launch { input, .. } | Self::NonZeroExit { input, .. } => input,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "シグナル".to_string(),
    }
}

/// バッチ実行の結果型
pub type BatchResult<T> = Result<T, BatchError>;
