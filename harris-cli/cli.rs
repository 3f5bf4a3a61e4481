use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Operating mode selected by the first argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Detect corners and draw them on the input
    #[value(name = "-harris")]
    Harris,
    /// Correlate with a 3x3 edge kernel
    #[value(name = "-correlate")]
    Correlate,
    /// Convolve with the same kernel
    #[value(name = "-convolve")]
    Convolve,
}

/// Harris corner detection and manual correlation demo
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "harris", version)]
pub struct Args {
    #[arg(value_enum, allow_hyphen_values = true)]
    pub mode: Mode,
    /// Image to read
    pub input: PathBuf,
    /// Image to write
    pub output: PathBuf,
    /// Optional TOML detector configuration, Harris mode only
    pub config: Option<PathBuf>,
}
