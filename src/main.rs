//! Forum Harvest command-line entry point
//!
//! Single run-to-completion invocation, no subcommands: collect the latest
//! thread links, scrape and parse each one, write the JSON document.

use clap::Parser;
use forum_harvest::config::{load_config, DEFAULT_BASE_URL, DEFAULT_OUTPUT_FILE, LOG_FILE};
use forum_harvest::crawler::run_harvest;
use forum_harvest::output::print_summary;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Forum Harvest: snapshot the latest threads of a Discourse forum
///
/// Page fetching and rendering is delegated to a Firecrawl-compatible
/// scraping service; the FIRECRAWL_API_KEY environment variable (or a .env
/// entry) must be set before anything else happens.
#[derive(Parser, Debug)]
#[command(name = "forum-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Snapshot the latest threads of a Discourse forum", long_about = None)]
struct Cli {
    /// Base URL of the forum to harvest
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Path of the output JSON document
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Minimum seconds spent per thread request
    #[arg(long, default_value_t = 1.0)]
    delay: f64,

    /// Cap on the number of threads processed
    #[arg(long)]
    max_posts: Option<usize>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; a present FIRECRAWL_API_KEY wins either way.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _guard = setup_logging(cli.verbose, cli.quiet);

    let config = load_config(&cli.base_url, &cli.output, cli.delay, cli.max_posts)?;
    tracing::info!(
        "Harvesting {} (delay {:.1}s, max posts {})",
        config.listing_url,
        config.rate_limit_delay.as_secs_f64(),
        config
            .max_posts
            .map_or_else(|| "unlimited".to_string(), |cap| cap.to_string())
    );

    let result = run_harvest(config).await?;

    if !cli.quiet {
        print_summary(&result, &cli.output);
    }

    Ok(())
}

/// Sets up the tracing subscriber: console plus the fixed log file.
///
/// The returned guard must stay alive for the duration of the run so the
/// non-blocking file writer gets flushed.
fn setup_logging(verbose: u8, quiet: bool) -> WorkerGuard {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("forum_harvest=info,warn"),
            1 => EnvFilter::new("forum_harvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    let file_appender = RollingFileAppender::new(Rotation::NEVER, ".", LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    guard
}
