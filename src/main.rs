use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use scour_core::config::Config;
use scour_core::{dataset, generate_report, normalize_dataset, validate_dataset, CanonicalRecord};

#[derive(Parser)]
#[command(name = "scour", about = "Normalize scraped records and report on their quality")]
struct Cli {
    /// TOML file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a JSON array of raw records into canonical records.
    Clean { input: PathBuf, output: PathBuf },
    /// Validate a JSON array of canonical records and write a quality report.
    Validate { input: PathBuf, report: PathBuf },
    /// Clean and validate in one pass.
    Run {
        input: PathBuf,
        output: PathBuf,
        report: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let default_filter = if cli.debug { "debug" } else { cfg.log.filter.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Command::Clean { input, output } => {
            clean(&cfg, &input, &output)?;
        }
        Command::Validate { input, report } => {
            let records = dataset::load_canonical_records(&input)
                .with_context(|| format!("failed to load cleaned records from {}", input.display()))?;
            validate(&records, &report)?;
        }
        Command::Run {
            input,
            output,
            report,
        } => {
            let records = clean(&cfg, &input, &output)?;
            validate(&records, &report)?;
        }
    }

    Ok(())
}

fn clean(cfg: &Config, input: &Path, output: &Path) -> anyhow::Result<Vec<CanonicalRecord>> {
    let raw = dataset::load_raw_records(input)
        .with_context(|| format!("failed to load raw records from {}", input.display()))?;
    let records = normalize_dataset(&raw);
    dataset::write_records(output, &records, cfg.output.pretty_json)
        .with_context(|| format!("failed to write cleaned records to {}", output.display()))?;
    tracing::info!(records = records.len(), output = %output.display(), "cleaned dataset");
    Ok(records)
}

fn validate(records: &[CanonicalRecord], report_path: &Path) -> anyhow::Result<()> {
    let (per_record, summary) = validate_dataset(records);
    let report = generate_report(records, &per_record, &summary);
    dataset::write_report(report_path, &report)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;
    tracing::info!(
        records = summary.total_records,
        invalid = summary.records_with_violations,
        violations = summary.total_violations,
        report = %report_path.display(),
        "validated dataset"
    );
    Ok(())
}
