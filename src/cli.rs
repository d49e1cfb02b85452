use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "lexfreq",
    about = "Ranks the most frequent content words of a text document"
)]
pub struct Cli {
    /// Path to the UTF-8 text document.
    pub file: PathBuf,

    /// Document language: `en` or `ru`.
    #[arg(long, short = 'l')]
    pub language: String,

    /// How many top lemmas to report.
    #[arg(long, short = 'n', default_value = "5")]
    pub top: NonZeroUsize,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
