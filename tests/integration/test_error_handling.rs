// エラーハンドリングの統合テスト
#[path = "../fixtures/mod.rs"]
mod fixtures;

use anyhow::Result;
use fasta_batch::{
    predictor::MockPredictor, BatchEngine, BatchError, DefaultProcessingConfig,
    NoOpProgressReporter,
};
use fixtures::create_fasta_tree;
use tempfile::TempDir;

#[tokio::test]
async fn test_nonexistent_directory_error() -> Result<()> {
    let mut predictor = MockPredictor::new();
    predictor.expect_predict().times(0);

    let engine = BatchEngine::new(
        predictor,
        DefaultProcessingConfig::default(),
        NoOpProgressReporter::new(),
    );

    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nonexistent_directory");
    let result = engine.process_directory(&missing).await;

    let error = result.unwrap_err();
    assert!(matches!(error, BatchError::DirectoryNotFound { .. }));
    assert!(error.to_string().contains("nonexistent_directory"));
    Ok(())
}

#[tokio::test]
async fn test_empty_directory_handling() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut predictor = MockPredictor::new();
    predictor.expect_predict().times(0);

    let engine = BatchEngine::new(
        predictor,
        DefaultProcessingConfig::default().with_worker_count(4),
        NoOpProgressReporter::new(),
    );

    let summary = engine.process_directory(temp_dir.path()).await?;

    // 空のディレクトリは正常に処理される（エラーではない）
    assert_eq!(summary.total_inputs, 0);
    assert_eq!(summary.failed_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_invalid_worker_counts_fail_before_dispatch() -> Result<()> {
    let (temp_dir, _paths) = create_fasta_tree(&["a.fasta", "b.fasta"]);

    for requested in [0, -1, -16] {
        let result = DefaultProcessingConfig::from_requested_workers(requested);
        assert!(matches!(result, Err(BatchError::InvalidConfiguration { .. })));
    }

    let mut predictor = MockPredictor::new();
    predictor.expect_predict().times(0);
    let engine = BatchEngine::new(
        predictor,
        DefaultProcessingConfig::default().with_worker_count(0),
        NoOpProgressReporter::new(),
    );

    let error = engine.process_directory(temp_dir.path()).await.unwrap_err();
    assert!(matches!(error, BatchError::InvalidConfiguration { .. }));
    Ok(())
}

#[tokio::test]
async fn test_file_as_root_is_not_a_directory() -> Result<()> {
    let (_temp_dir, paths) = create_fasta_tree(&["only.fasta"]);
    let mut predictor = MockPredictor::new();
    predictor.expect_predict().times(0);

    let engine = BatchEngine::new(
        predictor,
        DefaultProcessingConfig::default(),
        NoOpProgressReporter::new(),
    );

    let error = engine.process_directory(&paths[0]).await.unwrap_err();
    assert!(matches!(error, BatchError::DirectoryNotFound { .. }));
    Ok(())
}
