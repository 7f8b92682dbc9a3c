use anyhow::{Result, bail};
use clap::Parser;

use fileguard_core::intake::{FileHandle, samples};
use fileguard_core::pipeline::{AnalysisState, Analyzer};
use fileguard_core::report::{ScanReport, ToolInfo, render};
use fileguard_core::verdict::HttpClassifier;

mod args;

/// Exit code for a pipeline failure, distinct from every threat level.
const EXIT_ANALYSIS_FAILED: i32 = 4;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();

    if args.list_samples {
        for name in samples::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let classifier =
        HttpClassifier::new(&args.endpoint).with_health_url(&args.health_url);

    if args.ping {
        classifier.health().await?;
        println!("classifier backend is active");
        return Ok(());
    }

    let mut file = match (&args.file, &args.sample) {
        (Some(path), None) => FileHandle::from_path(path).await?,
        (None, Some(name)) => match samples::by_name(name) {
            Some(handle) => handle,
            None => bail!(
                "unknown sample {name:?}; available: {}",
                samples::names().join(", ")
            ),
        },
        _ => bail!("exactly one of a file path or --sample is required"),
    };
    if let Some(mime) = &args.mime {
        file = file.with_mime_type(mime);
    }

    let analyzer = Analyzer::new(classifier);
    let state = analyzer.submit(file).await;

    match state {
        AnalysisState::Complete {
            metadata, result, ..
        } => {
            let exit_code = result.threat_level.exit_code();
            let report = ScanReport::new(
                ToolInfo {
                    name: fileguard_core::TOOL_NAME.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                metadata,
                result,
            );

            let output = match args.format {
                args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
                args::OutputFormat::Text => render::render_text(&report),
            };

            match args.out {
                Some(path) => std::fs::write(path, &output)?,
                None => println!("{output}"),
            }

            std::process::exit(exit_code);
        }
        AnalysisState::Error { message, .. } => {
            eprintln!("analysis failed: {message}");
            std::process::exit(EXIT_ANALYSIS_FAILED);
        }
        other => bail!("pipeline ended in unexpected state: {}", other.label()),
    }
}
