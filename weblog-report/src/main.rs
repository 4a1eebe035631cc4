mod analytics;
mod errors;
mod ingest;
mod invariants;
mod models;
mod parser;
mod report;

use analytics::Analytics;
use clap::Parser;
use errors::ReportError;
use ingest::fetch_log;
use std::{io, process::ExitCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_URL: &str = "http://s3.amazonaws.com/cuny-is211-spring2015/weblog.csv";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the web log file
    #[arg(long, default_value = DEFAULT_LOG_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(data) = fetch_log(&args.url).await else {
        return ExitCode::SUCCESS;
    };
    if data.is_empty() {
        info!(url = %args.url, "downloaded access log is empty, nothing to report");
        return ExitCode::SUCCESS;
    }
    if let Err(e) = run_report(&data) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_report(data: &str) -> Result<(), ReportError> {
    let entries = parser::parse_entries(data)?;
    let analytics = Analytics::from_entries(&entries);
    info!(
        entries = analytics.entries(),
        image_hits = analytics.image_hits().images(),
        image_share = analytics.image_hits().percentage().value(),
        browser_hits = analytics.browsers().total(),
        hourly_hits = analytics.hourly().total(),
        rejected_timestamps = analytics.hourly().rejected().len(),
        "aggregated access log"
    );
    for e in analytics.hourly().rejected() {
        eprintln!("Error processing datetime: {e}");
    }
    report::write_report(&analytics, &mut io::stdout().lock())?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
