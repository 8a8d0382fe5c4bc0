//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use synthgen::{DocType, OutputFormat};

/// Generate synthetic documents and datasets with a local Ollama model.
#[derive(Parser, Debug)]
#[command(name = "synthgen")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to synthgen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model endpoint base URL, e.g. http://localhost:11434
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Model identifier, e.g. mistral
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a sectioned prose document
    Document {
        /// Topic the document is about
        #[arg(long, default_value = "")]
        subject: String,

        /// Document template: whitepaper, article, report, proposal, or design
        #[arg(long, default_value = "report")]
        doc_type: DocType,

        /// Approximate length in pages
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=50))]
        pages: u32,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a table of synthetic rows
    Dataset {
        /// Topic the data is about
        #[arg(long, default_value = "")]
        subject: String,

        /// Number of data rows
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100_000))]
        rows: u32,

        /// Number of columns
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=100))]
        columns: u32,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output options shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (text for documents and csv for datasets by default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print per-unit diagnostics to stderr
    #[arg(long)]
    pub stats: bool,
}
