// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcagbot CLI - WCAG accessibility auditor for web pages

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wcagbot::audit::{self, AuditReport};
use wcagbot::config::{self, Config};
use wcagbot::fetch::{normalize_url, HttpFetcher};
use wcagbot::report::{generate_report, required_level_summary, OutputFormat};
use wcagbot::site::detect_required_level;

/// WCAG accessibility auditor for web pages
#[derive(Parser)]
#[command(name = "wcagbot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: ./wcagbot.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and audit it
    Audit {
        /// Page URL; https:// is assumed when no scheme is given
        url: String,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Audit a saved HTML file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// URL the page was saved from, used to infer the required level
        #[arg(long)]
        url: Option<String>,

        /// Output format
        #[arg(long)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the conformance level a site is expected to meet
    RequiredLevel {
        /// Site URL
        url: String,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "wcagbot=warn",
        1 => "wcagbot=info",
        2 => "wcagbot=debug",
        _ => "wcagbot=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config = config::discover(cli.config.as_deref(), &cwd).context("Failed to load configuration")?;

    match cli.command {
        Commands::Audit { url, format, output, timeout } => {
            let url = normalize_url(&url, &config.fetch.default_scheme)?;
            let mut fetcher = HttpFetcher::new(&config.fetch);
            if let Some(secs) = timeout {
                anyhow::ensure!(secs > 0, "--timeout must be greater than zero");
                fetcher = fetcher.with_timeout(secs);
            }

            let report = audit::audit_url(&fetcher, &url)
                .with_context(|| format!("Failed to audit {}", url))?;
            finish(&report, &config, format, output.as_deref())?;
        }

        Commands::Analyze { file, url, format, output } => {
            let report = audit::audit_file(&file, url.as_deref())
                .with_context(|| format!("Failed to analyze {}", file.display()))?;
            finish(&report, &config, format, output.as_deref())?;
        }

        Commands::RequiredLevel { url } => {
            let info = detect_required_level(&url);
            println!("{}", required_level_summary(&info));
        }
    }

    Ok(())
}

/// Render, write, and exit non-zero when the required level is not met
fn finish(
    report: &AuditReport,
    config: &Config,
    format: Option<FormatArg>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let format = match format {
        Some(f) => f.into(),
        None => config.report.output_format()?,
    };

    let rendered = generate_report(report, format, config.report.max_examples);
    write_output(&rendered, output)?;

    if !report.meets_required() {
        std::process::exit(1);
    }
    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)
                .with_context(|| format!("Failed to write report to {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
