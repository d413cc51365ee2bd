use crate::cli::args::Cli;
use crate::core::RunSummary;
use crate::predictor::command::CommandPredictor;
use crate::processing::{BatchEngine, ConsoleProgressReporter, DefaultProcessingConfig};
use anyhow::Result;

/// CLI引数から予測器を組み立てる
pub fn predictor_from_cli(cli: &Cli) -> CommandPredictor {
    CommandPredictor::new(cli.predictor.clone()).with_leading_args(cli.predictor_args.clone())
}

/// 1回のバッチ実行
///
/// 個々の入力の失敗は要約に含まれ、エラーにはならない。
pub async fn execute_run(cli: &Cli) -> Result<RunSummary> {
    let config = DefaultProcessingConfig::from_requested_workers(cli.num_processors)?;

    let engine = BatchEngine::new(
        predictor_from_cli(cli),
        config,
        ConsoleProgressReporter::new(cli.verbose),
    )
    .with_extension(cli.extension.clone());

    let summary = engine.process_directory(&cli.fasta_dir).await?;
    Ok(summary)
}
