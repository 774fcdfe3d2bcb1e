use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use plagcheck::corpus::read_stdin_lines;
use plagcheck::{read_lines, Checker, LoggingConfig, PlagcheckConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "plagcheck",
    version,
    about = "Report sentence and word-sequence overlap against a reference corpus"
)]
struct Args {
    /// Directory of reference documents (every regular file, in name order)
    #[arg(short, long)]
    references: PathBuf,

    /// Candidate text file, or `-` for stdin
    #[arg(short, long)]
    candidate: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window size in words for word-sequence matching
    #[arg(long)]
    sensitivity: Option<usize>,

    /// Minimum words for a sentence to be indexed or matched
    #[arg(long)]
    min_words: Option<usize>,

    /// Quotations up to this many words are ignored
    #[arg(long)]
    max_quote: Option<usize>,

    /// Also use the last window of each long sentence
    #[arg(long, default_value_t = false)]
    final_window: bool,

    /// Hash documents and sentences on all cores
    #[arg(long, default_value_t = false)]
    parallel: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlagcheckConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlagcheckConfig::default(),
    };
    init_tracing(&config.logging);

    let checker_cfg = &mut config.checker;
    if let Some(sensitivity) = args.sensitivity {
        checker_cfg.sensitivity = sensitivity;
    }
    if let Some(min_words) = args.min_words {
        checker_cfg.min_words_in_sentence = min_words;
    }
    if let Some(max_quote) = args.max_quote {
        checker_cfg.max_quote_length = max_quote;
    }
    checker_cfg.include_final_window |= args.final_window;
    checker_cfg.use_parallel |= args.parallel;

    let mut checker = Checker::new(checker_cfg).context("invalid checker configuration")?;
    checker.ingest_dir(&args.references)?;
    info!(stats = ?checker.index().stats(), "corpus_indexed");

    let candidate = if args.candidate.as_os_str() == "-" {
        read_stdin_lines()?
    } else {
        read_lines(&args.candidate)?
    };
    let report = checker.check_report(&candidate);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            for line in report.to_lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
