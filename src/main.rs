// src/main.rs
mod config;
mod edgar;
mod report;
mod utils;

use clap::Parser;
use config::EdgarConfig;
use edgar::EdgarClient;
use std::io::Write;
use std::time::Duration;
use utils::AppError;

/// Command Line Interface for looking up a company's recent EDGAR filings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Company name exactly as listed by EDGAR (case-insensitive)
    #[arg(default_value = "LOCKHEED MARTIN CORP")]
    company: String,

    /// Form type for the filtered listing (exact match, e.g. 10-K)
    #[arg(short, long, default_value = "10-K")]
    form: String,

    /// Number of filings to display per listing
    #[arg(short, long, default_value_t = report::DEFAULT_DISPLAY_LIMIT)]
    limit: usize,

    /// Identifying User-Agent for EDGAR, e.g. "Acme Research ops@acme.com"
    #[arg(long, env = "EDGAR_USER_AGENT")]
    user_agent: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Send requests to this host instead of sec.gov, keeping EDGAR's paths (e.g. a mirror)
    #[arg(long)]
    base_url: Option<String>,

    /// Pause before each EDGAR request, in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_REQUEST_DELAY_MS)]
    request_delay_ms: u64,

    /// Download the company index on every lookup instead of caching CIKs
    #[arg(long)]
    no_cache: bool,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    // 3. Build the EDGAR client
    let config = EdgarConfig::new(args.user_agent.as_str())?
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_request_delay(Duration::from_millis(args.request_delay_ms));
    let config = match &args.base_url {
        Some(base) => config.with_base_url(base),
        None => config,
    };
    let mut client = EdgarClient::new(config)?;
    if !args.no_cache {
        client = client.with_cache();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let all = client.get_company_filings(&args.company, None).await;
        let filtered = client.get_company_filings(&args.company, Some(args.form.as_str())).await;

        let envelope = report::ReportEnvelope::new(&all, &args.form, &filtered);
        report::write_json(&mut out, &envelope)?;
        return Ok(());
    }

    // 4. All filings
    writeln!(out, "Fetching all filings...")?;
    out.flush()?;
    let all = client
        .get_company_filings(&args.company, None)
        .await
        .into_report();
    report::display_filings(&mut out, all.as_ref(), args.limit)?;

    // 5. One form type
    writeln!(out, "\nFetching only {} filings...", args.form)?;
    out.flush()?;
    let filtered = client
        .get_company_filings(&args.company, Some(args.form.as_str()))
        .await
        .into_report();
    report::display_filings(&mut out, filtered.as_ref(), args.limit)?;

    // 6. Details of the most recent filing
    if let Some(first) = all.as_ref().and_then(|report| report.filings.first()) {
        report::display_selected_filing(&mut out, first)?;
    }

    Ok(())
}
