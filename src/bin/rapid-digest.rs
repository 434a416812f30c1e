//! Command-line front end: summarize a text file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::Level;

use rapid_digest::{QuotaBasis, StageTimings, SummaryConfig, SummaryEngine, SummarySpec};

#[derive(Parser, Debug)]
#[command(name = "rapid-digest", author, version)]
#[command(about = "Summarize a document by extracting its most representative sentences")]
struct Args {
    /// Text file to summarize; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// JSON summary spec
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON instead of the summary text
    #[arg(long)]
    json: bool,

    /// Derive the quota from all split pieces or only from candidates
    #[arg(long)]
    quota_basis: Option<QuotaBasis>,

    /// Log per-stage timings
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(basis) = args.quota_basis {
        config = config.with_quota_basis(basis);
    }

    let text = read_input(args.input.as_deref())?;
    let engine = SummaryEngine::with_config(config);
    let cfg = engine.config();
    tracing::debug!(
        quota_basis = cfg.quota_basis.as_str(),
        quota_divisor = cfg.quota_divisor,
        min_quota = cfg.min_quota,
        stopwords = cfg.stopwords.len(),
        "engine configured"
    );

    let mut timings = StageTimings::new();
    let result = engine.run(&text, &mut timings);

    for (stage, report) in &timings.stages {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            items = ?report.items,
            "stage finished"
        );
    }
    tracing::info!(
        outcome = ?result.outcome,
        input_length = result.input_length,
        summary_length = result.summary_length,
        sentences = result.sentences.len(),
        "summary ready"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.summary);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SummaryConfig> {
    let Some(path) = path else {
        return Ok(SummaryConfig::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read spec {}", path.display()))?;
    let spec = SummarySpec::from_json(&json)
        .with_context(|| format!("failed to parse spec {}", path.display()))?;

    let report = spec.validate();
    for warning in report.warnings() {
        tracing::warn!(hint = warning.hint.as_deref(), "{warning}");
    }
    if report.has_errors() {
        for error in report.errors() {
            tracing::error!(hint = error.hint.as_deref(), "{error}");
        }
        bail!(
            "spec {} has {} error(s)",
            path.display(),
            report.errors().count()
        );
    }

    Ok(spec.to_config())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(p) if p != Path::new("-") => {
            fs::read(p).with_context(|| format!("failed to read {}", p.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
