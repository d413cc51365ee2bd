use crate::file_scanner::DEFAULT_INPUT_EXTENSION;
use crate::predictor::command::{DEFAULT_PREDICTOR_PROGRAM, DEFAULT_PREDICTOR_SCRIPT};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fasta_batch")]
#[command(about = "Run an external predictor over every FASTA file in a directory, in parallel")]
#[command(version)]
pub struct Cli {
    /// Directory that contains the FASTA files as input
    #[arg(value_name = "FASTA_DIR")]
    pub fasta_dir: PathBuf,

    /// Number of processors to use
    #[arg(
        short,
        long,
        value_name = "NC",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub num_processors: i64,

    /// Print input and failure counts (repeat for more diagnostics on stderr)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Predictor executable to launch for each input
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_PREDICTOR_PROGRAM)]
    pub predictor: String,

    /// Argument placed before the input path (repeatable)
    #[arg(
        long = "predictor-arg",
        value_name = "ARG",
        default_value = DEFAULT_PREDICTOR_SCRIPT,
        allow_hyphen_values = true
    )]
    pub predictor_args: Vec<String>,

    /// Input file extension, without the leading dot
    #[arg(long, value_name = "EXT", default_value = DEFAULT_INPUT_EXTENSION)]
    pub extension: String,
}
