//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bookmarklens_core::pipeline::{EnrichConfig, EnrichResult, enrich_file};
use bookmarklens_crawler::{FailureReason, RetrievalProgress, RetrievalSummary};
use bookmarklens_parser::{chrome_bookmarks_path, convert_file, dated_output_name};
use bookmarklens_shared::{
    AppConfig, BodyEncoding, RetrievalConfig, init_config, load_config, render_config,
};
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Directory `convert` writes into when `--out` is not given.
const DEFAULT_CONVERT_DIR: &str = "data";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// bookmarklens — enrich bookmarks with page titles and descriptions.
#[derive(Parser)]
#[command(
    name = "bookmarklens",
    version,
    about = "Fetch every bookmarked page and export titles and descriptions as CSV.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Enrich a Netscape bookmark file and export both CSV partitions.
    Enrich {
        /// Netscape bookmark HTML file to read.
        source: PathBuf,

        /// Directory for the CSV files (defaults to config `export.output_dir`).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Maximum simultaneous page fetches.
        #[arg(short, long)]
        concurrency: Option<usize>,

        /// Per-request timeout in seconds.
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Body decoding: utf-8 or declared.
        #[arg(short, long)]
        encoding: Option<BodyEncoding>,
    },

    /// Convert Chrome's Bookmarks JSON into a Netscape bookmark file.
    Convert {
        /// Chrome Bookmarks file (defaults to the current user's Chrome profile).
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output HTML file (defaults to ./data/chromebookmarks<date>.html).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "bookmarklens=info",
        1 => "bookmarklens=debug",
        _ => "bookmarklens=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Enrich {
            source,
            out,
            concurrency,
            timeout,
            encoding,
        } => cmd_enrich(source, out, concurrency, timeout, encoding).await,
        Command::Convert { source, out } => cmd_convert(source, out),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

async fn cmd_enrich(
    source: PathBuf,
    out: Option<PathBuf>,
    concurrency: Option<usize>,
    timeout: Option<u64>,
    encoding: Option<BodyEncoding>,
) -> Result<()> {
    let config: AppConfig = load_config()?;

    let mut retrieval = RetrievalConfig::from(&config);
    if let Some(n) = concurrency {
        retrieval.concurrency = n;
    }
    if let Some(secs) = timeout {
        retrieval.timeout = Duration::from_secs(secs);
    }
    if let Some(encoding) = encoding {
        retrieval.encoding = encoding;
    }

    let mut export = config.export.clone();
    if let Some(dir) = out {
        export.output_dir = dir;
    }

    info!(
        source = %source.display(),
        concurrency = retrieval.concurrency,
        timeout_secs = retrieval.timeout.as_secs(),
        "enriching bookmarks"
    );

    let enrich_config = EnrichConfig {
        source,
        retrieval,
        export,
    };

    let reporter = CliProgress::new();
    let result = enrich_file(&enrich_config, &reporter).await?;

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &EnrichResult) {
    println!();
    println!("  Bookmarks enriched.");
    println!("  Read:       {}", result.bookmarks);
    println!("  Fetched:    {}", result.retrieval.total);
    println!("  Succeeded:  {}", result.retrieval.succeeded);
    println!("  Failed:     {}", result.retrieval.failed);
    println!("  Skipped:    {}", result.retrieval.skipped);
    println!(
        "  Complete:   {} -> {}",
        result.export.complete,
        result.export.complete_path.display()
    );
    println!(
        "  Incomplete: {} -> {}",
        result.export.incomplete,
        result.export.incomplete_path.display()
    );
    println!("  Time:       {:.1}s", result.elapsed.as_secs_f64());
    println!();
}

fn cmd_convert(source: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let source = match source {
        Some(path) => path,
        None => chrome_bookmarks_path()?,
    };
    let output = out.unwrap_or_else(|| {
        PathBuf::from(DEFAULT_CONVERT_DIR)
            .join(dated_output_name(chrono::Local::now().date_naive()))
    });

    info!(
        source = %source.display(),
        output = %output.display(),
        "converting Chrome bookmarks"
    );

    convert_file(&source, &output)?;
    println!("Bookmarks written to: {}", output.display());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    println!("{}", render_config(&config)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter backed by an indicatif bar.
struct CliProgress {
    bar: ProgressBar,
    failures: AtomicUsize,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}",
            )
            .expect("valid progress template")
            .progress_chars("=> ")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar,
            failures: AtomicUsize::new(0),
        }
    }
}

impl RetrievalProgress for CliProgress {
    fn dispatched(&self, _index: usize, total: usize, url: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_message(url.to_string());
    }

    fn failed(&self, url: &str, reason: FailureReason, _detail: &str) {
        let failures = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar
            .set_message(format!("{failures} failed, last: {url} ({reason})"));
    }

    fn completed(&self, done: usize, _total: usize) {
        self.bar.set_position(done as u64);
    }

    fn finished(&self, _summary: &RetrievalSummary) {
        self.bar.finish_and_clear();
    }
}
