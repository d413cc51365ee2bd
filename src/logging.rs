// 診断ログの設定
// 要約出力(標準出力)とは別に、tracingの出力を標準エラーへ流す

use tracing_subscriber::EnvFilter;

/// 冗長度に対応するフィルタ指定
///
/// 0では何も出力しない。
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off",
        1 => "fasta_batch=warn",
        2 => "fasta_batch=info",
        _ => "fasta_batch=debug",
    }
}

pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::new(filter_directive(verbosity));

    // 二重初期化(テストなど)は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
