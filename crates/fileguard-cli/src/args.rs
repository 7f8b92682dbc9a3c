use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use fileguard_core::verdict::http::{DEFAULT_ENDPOINT, DEFAULT_HEALTH_URL};

#[derive(Debug, Parser)]
#[command(
    name = "fileguard",
    version,
    about = "File intake and threat analysis against an external classifier"
)]
pub struct Args {
    /// Path to the file to analyze
    #[arg(required_unless_present_any = ["sample", "ping", "list_samples"])]
    pub file: Option<PathBuf>,

    /// Analyze a bundled demo sample by name instead of a file on disk
    #[arg(long, conflicts_with = "file")]
    pub sample: Option<String>,

    /// List bundled demo samples and exit
    #[arg(long)]
    pub list_samples: bool,

    /// Classifier endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Classifier health route
    #[arg(long, default_value = DEFAULT_HEALTH_URL)]
    pub health_url: String,

    /// Probe the classifier backend and exit
    #[arg(long)]
    pub ping: bool,

    /// Override the declared MIME type of the input
    #[arg(long)]
    pub mime: Option<String>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
