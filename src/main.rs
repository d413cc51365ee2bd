use anyhow::Result;
use clap::Parser;
use fasta_batch::cli::{execute_run, Cli};
use fasta_batch::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    // 個々の入力の失敗は報告のみで、終了コードには反映しない
    if let Err(error) = execute_run(&cli).await {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }

    Ok(())
}
