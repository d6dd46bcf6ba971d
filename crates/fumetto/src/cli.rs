//! Command line interface.

use clap::Parser;
use std::path::PathBuf;

/// Generate a three panel educational comic from a topic.
#[derive(Debug, Parser)]
#[command(name = "fumetto", version, about)]
pub struct Cli {
    /// Topic the comic should teach
    #[arg(short, long)]
    pub topic: String,

    /// Plain-text file with advisory background material
    #[arg(short, long)]
    pub context_file: Option<PathBuf>,

    /// Override the configured model for both planning and artwork
    #[arg(short, long)]
    pub model: Option<String>,

    /// Where to write the composed document as JSON
    #[arg(short, long, default_value = "comic.json")]
    pub output: PathBuf,

    /// Log at debug level (unless RUST_LOG is already set)
    #[arg(short, long)]
    pub verbose: bool,
}
