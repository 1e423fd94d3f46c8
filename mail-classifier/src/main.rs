//! mail-classifier CLI
//!
//! Trains the phishing and spam detectors from their CSV corpora on every
//! start, then classifies texts or message files.
//!
//! # Usage
//!
//! ```bash
//! # Classify free text
//! mail-classifier classify "Your account is locked, verify now"
//!
//! # Classify the last 25 messages of a Maildir folder
//! mail-classifier --config classifier.toml scan ~/Maildir/INBOX
//!
//! # Show training statistics as JSON
//! mail-classifier stats --json
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use mail_classifier::classifier::ModelStats;
use mail_classifier::config::{Config, LoggingConfig};
use mail_classifier::detector::{train_detectors, MessageScanner};
use mail_classifier::message::load_messages;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "classifier.toml";

#[derive(Parser)]
#[command(name = "mail-classifier")]
#[command(about = "Classify emails as phishing/safe and spam/ham", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./classifier.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify texts given on the command line
    Classify {
        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Classify message files or Maildir folders
    Scan {
        /// .eml files or Maildir folders
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show training statistics of both detectors
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DetectorStats<'a> {
    phishing: &'a ModelStats,
    spam: &'a ModelStats,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => Ok(Config::from_file(DEFAULT_CONFIG)?),
        None => Ok(Config::default()),
    }
}

fn init_logging(logging: &LoggingConfig) {
    let json = logging.format == "json";

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.level.clone().into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn print_stats(scanner: &MessageScanner, json: bool) -> anyhow::Result<()> {
    let stats = DetectorStats {
        phishing: scanner.phishing().model()?.stats(),
        spam: scanner.spam().model()?.stats(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    for (name, stats) in [("phishing", stats.phishing), ("spam", stats.spam)] {
        println!("{}:", name);
        println!(
            "  rows:        {} class 1, {} class 0, {} unknown",
            stats.positive_rows, stats.negative_rows, stats.unknown_rows
        );
        println!("  vocabulary:  {} tokens", stats.vocab_size);
        println!(
            "  priors:      {:.4} / {:.4}",
            stats.priors.positive, stats.priors.negative
        );
        println!("  total words: {} / {}", stats.positive_words, stats.negative_words);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging);

    info!("Starting mail-classifier v{}", env!("CARGO_PKG_VERSION"));
    info!("  Phishing corpus: {}", config.phishing.corpus_path.display());
    info!("  Spam corpus: {}", config.spam.corpus_path.display());

    let scanner = train_detectors(&config)
        .await
        .context("Failed to train detectors")?;

    match cli.command {
        Commands::Classify { texts } => {
            for text in texts {
                let verdict = scanner.classify(&text)?;
                println!("{}\t{}\t{}", verdict.phishing_label, verdict.spam_label, text);
            }
        }
        Commands::Scan { paths, json } => {
            let messages = load_messages(&paths)?;
            let report = scanner.scan(&messages)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for verdict in &report.verdicts {
                    println!(
                        "{}\t{}\t{}\t{}",
                        verdict.id, verdict.phishing_label, verdict.spam_label, verdict.subject
                    );
                }
                if report.skipped > 0 {
                    println!("({} older messages not scanned)", report.skipped);
                }
            }
        }
        Commands::Stats { json } => print_stats(&scanner, json)?,
    }

    Ok(())
}
