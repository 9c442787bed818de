use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validate and export the Mojito site content.
#[derive(Debug, Parser)]
#[command(name = "mojito", version, about)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every section of a content file and print a report.
    Check(CheckArgs),
    /// Write the validated content as JSON.
    Export(ExportArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ContentSource {
    /// Path to the JSON content file.
    #[arg(long, short, env = "MOJITO_CONTENT")]
    pub content: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: ContentSource,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: ContentSource,

    /// Output file; stdout when omitted.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Refuse to export when any section was rejected.
    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
