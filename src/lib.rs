pub mod cli;
pub mod core;
pub mod file_scanner;
pub mod logging;
pub mod predictor;
pub mod processing;

pub use crate::core::{BatchError, BatchResult, InputFile, InvocationError, RunSummary, WorkResult};
pub use file_scanner::FileScanner;
pub use predictor::{command::CommandPredictor, Predictor};
pub use processing::{
    BatchEngine, ConsoleProgressReporter, DefaultProcessingConfig, NoOpProgressReporter,
    ProcessingConfig, ProgressReporter,
};
