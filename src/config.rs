// src/config.rs
use crate::utils::error::AppError;
use std::time::Duration;

pub const DEFAULT_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";
pub const DEFAULT_SUBMISSIONS_BASE: &str = "https://data.sec.gov/submissions";
pub const DEFAULT_ARCHIVES_BASE: &str = "https://www.sec.gov/Archives/edgar/data";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
// SEC asks for 10 requests/second max. Be conservative. >100ms delay.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 150;

// Contact strings copied from SEC documentation and sample code. EDGAR
// rejects or throttles traffic that identifies itself this way.
const PLACEHOLDER_USER_AGENTS: &[&str] = &[
    "your name yourname@email.com",
    "your name your@email.com",
    "sample company name admincontact@<sample company domain>.com",
    "name email@example.com",
];

/// Settings for talking to EDGAR.
#[derive(Debug, Clone)]
pub struct EdgarConfig {
    /// Identifying `User-Agent` sent with every request ("Company Name contact@domain").
    pub user_agent: String,
    pub timeout: Duration,
    /// Pause before each request.
    pub request_delay: Duration,
    pub tickers_url: String,
    pub submissions_base: String,
    pub archives_base: String,
}

impl EdgarConfig {
    /// Builds a config pointed at the public EDGAR endpoints.
    /// Fails if the user agent is blank, a known placeholder, or carries no contact address.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, AppError> {
        let user_agent = user_agent.into().trim().to_string();
        validate_user_agent(&user_agent)?;

        Ok(Self {
            user_agent,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
            tickers_url: DEFAULT_TICKERS_URL.to_string(),
            submissions_base: DEFAULT_SUBMISSIONS_BASE.to_string(),
            archives_base: DEFAULT_ARCHIVES_BASE.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Points every endpoint at a different host, keeping EDGAR's path layout.
    /// Used to run against a mirror or a local test server.
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.tickers_url = format!("{}/files/company_tickers.json", base);
        self.submissions_base = format!("{}/submissions", base);
        self.archives_base = format!("{}/Archives/edgar/data", base);
        self
    }

    /// URL of the per-company submissions document.
    pub fn submissions_url(&self, cik: &str) -> String {
        format!("{}/CIK{}.json", self.submissions_base.trim_end_matches('/'), cik)
    }
}

fn validate_user_agent(user_agent: &str) -> Result<(), AppError> {
    if user_agent.is_empty() {
        return Err(AppError::Config(
            "EDGAR user agent is empty; pass --user-agent or set EDGAR_USER_AGENT".to_string(),
        ));
    }

    let normalized = user_agent.to_lowercase();
    if PLACEHOLDER_USER_AGENTS.contains(&normalized.as_str()) {
        return Err(AppError::Config(format!(
            "EDGAR user agent '{}' is a placeholder; use your own name and contact email",
            user_agent
        )));
    }

    if !user_agent.contains('@') {
        return Err(AppError::Config(format!(
            "EDGAR user agent '{}' has no contact email address",
            user_agent
        )));
    }

    Ok(())
}
