// テスト用の進捗報告モック実装

use super::traits::ProgressReporter;
use crate::core::{InputFile, RunSummary, WorkResult};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockProgressReporter {
    pub started_calls: Arc<Mutex<Vec<(PathBuf, usize)>>>,
    pub results: Arc<Mutex<Vec<WorkResult>>>,
    pub completed_called: Arc<Mutex<Option<RunSummary>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed_inputs(&self) -> Vec<InputFile> {
        self.results
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| r.input().clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl ProgressReporter for MockProgressReporter {
    async fn report_started(&self, root: &Path, total_inputs: usize) {
        self.started_calls
            .lock()
            .unwrap()
            .push((root.to_path_buf(), total_inputs));
    }

    async fn report_result(&self, result: &WorkResult) {
        self.results.lock().unwrap().push(result.clone());
    }

    async fn report_completed(&self, summary: &RunSummary) {
        *self.completed_called.lock().unwrap() = Some(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_progress_reporter_trait() {
        let reporter = MockProgressReporter::new();

        reporter.report_started(Path::new("/data"), 2).await;
        reporter
            .report_result(&WorkResult::Success { input: InputFile::new("a.fasta") })
            .await;
        reporter
            .report_result(&WorkResult::Failure { input: InputFile::new("b.fasta") })
            .await;
        reporter
            .report_completed(&RunSummary {
                total_inputs: 2,
                failed: vec![InputFile::new("b.fasta")],
            })
            .await;

        assert_eq!(
            reporter.started_calls.lock().unwrap()[0],
            (PathBuf::from("/data"), 2)
        );
        assert_eq!(reporter.results.lock().unwrap().len(), 2);
        assert_eq!(reporter.failed_inputs(), vec![InputFile::new("b.fasta")]);
        assert_eq!(
            reporter.completed_called.lock().unwrap().as_ref().unwrap().failed_count(),
            1
        );
    }

    #[tokio::test]
    async fn test_progress_reporter_trait_object_dispatch() {
        let reporter = MockProgressReporter::new();
        let reporter_ref: &dyn ProgressReporter = &reporter;

        reporter_ref.report_started(Path::new("."), 0).await;
        reporter_ref.report_completed(&RunSummary::default()).await;

        assert_eq!(reporter.started_calls.lock().unwrap().len(), 1);
        assert!(reporter.completed_called.lock().unwrap().is_some());
    }
}
