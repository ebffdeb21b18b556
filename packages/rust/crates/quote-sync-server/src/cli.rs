use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use quote_sync::DelimiterKind;

#[derive(Parser)]
#[command(name = "quote-sync-server")]
#[command(about = "Keeps paired quotation marks in sync. Stdio server or one-shot preview.")]
pub(crate) struct Cli {
    /// Override config directory (the user settings home).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Debug logging for quote-sync crates.
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PreviewDelimiter {
    Single,
    Double,
    Back,
    Delete,
}

impl From<PreviewDelimiter> for DelimiterKind {
    fn from(value: PreviewDelimiter) -> Self {
        match value {
            PreviewDelimiter::Single => Self::Single,
            PreviewDelimiter::Double => Self::Double,
            PreviewDelimiter::Back => Self::BackQuote,
            PreviewDelimiter::Delete => Self::DeleteOperation,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Read JSON requests from stdin, write replies to stdout. Exit on EOF.
    Serve,
    /// Show the correction for a single delimiter change in a file.
    Preview {
        /// Source file; the dialect comes from its extension.
        file: PathBuf,

        /// Zero-based line of the changed delimiter.
        #[arg(long)]
        line: usize,

        /// Zero-based UTF-16 column of the changed delimiter.
        #[arg(long)]
        character: usize,

        /// Delimiter typed over the old one, or `delete` to remove it.
        #[arg(long, value_enum, default_value_t = PreviewDelimiter::Single)]
        delimiter: PreviewDelimiter,
    },
}
