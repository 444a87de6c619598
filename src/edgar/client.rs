// src/edgar/client.rs
use crate::config::EdgarConfig;
use crate::edgar::cache::CikCache;
use crate::edgar::models::{Cik, CompanyIndex, CompanySubmission, FilingReport};
use crate::utils::error::EdgarError;
use reqwest::header;

/// Outcome of a filing lookup.
///
/// Keeps "the company has no recent filings" apart from "the lookup failed".
/// Callers that only care whether a report exists can use [`FilingLookup::into_report`].
#[derive(Debug)]
pub enum FilingLookup {
    Found(FilingReport),
    NoRecentFilings,
    CompanyNotFound(String),
    RetrievalFailed(String),
}

impl FilingLookup {
    /// Collapses every non-`Found` outcome into `None`.
    pub fn into_report(self) -> Option<FilingReport> {
        match self {
            FilingLookup::Found(report) => Some(report),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&FilingReport> {
        match self {
            FilingLookup::Found(report) => Some(report),
            _ => None,
        }
    }

    /// Short machine-readable name of the outcome.
    pub fn status(&self) -> &'static str {
        match self {
            FilingLookup::Found(_) => "found",
            FilingLookup::NoRecentFilings => "no_recent_filings",
            FilingLookup::CompanyNotFound(_) => "company_not_found",
            FilingLookup::RetrievalFailed(_) => "retrieval_failed",
        }
    }

    /// Why the lookup produced no report, if it failed.
    pub fn message(&self) -> Option<String> {
        match self {
            FilingLookup::Found(_) | FilingLookup::NoRecentFilings => None,
            FilingLookup::CompanyNotFound(name) => Some(format!("Company '{}' not found", name)),
            FilingLookup::RetrievalFailed(reason) => Some(reason.clone()),
        }
    }
}

/// Creates a reqwest client configured for EDGAR interaction.
fn build_edgar_client(config: &EdgarConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str()) // Set the required User-Agent
        .timeout(config.timeout)
        .build()
}

pub struct EdgarClient {
    http: reqwest::Client,
    config: EdgarConfig,
    cache: Option<CikCache>,
}

impl EdgarClient {
    pub fn new(config: EdgarConfig) -> Result<Self, EdgarError> {
        let http = build_edgar_client(&config)?;
        Ok(Self {
            http,
            config,
            cache: None,
        })
    }

    /// Enables the name -> CIK cache for this client.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(CikCache::new());
        self
    }

    /// GETs a URL and returns the body, failing on any non-success status.
    /// Includes the politeness delay before the request.
    async fn fetch_text(&self, url: &str) -> Result<String, EdgarError> {
        tracing::debug!("Requesting {} as '{}'", url, self.config.user_agent);

        if !self.config.request_delay.is_zero() {
            tokio::time::sleep(self.config.request_delay).await;
        }

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?; // Propagates reqwest::Error as EdgarError::Network

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("HTTP error status: {} for URL: {}", status, url);
            if status == reqwest::StatusCode::FORBIDDEN {
                tracing::warn!("Received 403 Forbidden - check User-Agent and rate limits.");
            }
            return Err(EdgarError::Retrieval {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Downloads the full company index.
    pub async fn fetch_company_index(&self) -> Result<CompanyIndex, EdgarError> {
        let body = self.fetch_text(&self.config.tickers_url).await?;
        let index = CompanyIndex::from_json(&body)?;
        tracing::debug!("Company index holds {} entries", index.len());
        if index.is_empty() {
            tracing::warn!("Company index at {} has no entries", self.config.tickers_url);
        }
        Ok(index)
    }

    /// Resolves a company name to its zero-padded CIK.
    ///
    /// Match is exact apart from case: "lockheed martin corp" finds
    /// "LOCKHEED MARTIN CORP", "Lockheed" finds nothing.
    pub async fn resolve_cik(&self, company_name: &str) -> Result<Cik, EdgarError> {
        if let Some(cache) = &self.cache {
            if let Some(cik) = cache.get(company_name).await {
                tracing::debug!("CIK cache hit for '{}': {}", company_name, cik);
                return Ok(cik);
            }
        }

        let index = self.fetch_company_index().await?;
        let entry = index
            .find_by_title(company_name)
            .ok_or_else(|| EdgarError::CompanyNotFound(company_name.to_string()))?;
        let cik = Cik::from_number(entry.cik);
        tracing::info!("Resolved '{}' to CIK {}", company_name, cik);

        if let Some(cache) = &self.cache {
            cache.insert(company_name, cik.clone()).await;
            tracing::debug!("CIK cache now holds {} name(s)", cache.len().await);
        }

        Ok(cik)
    }

    /// Fetches the company submission document for a given CIK.
    pub async fn fetch_submissions(&self, cik: &Cik) -> Result<CompanySubmission, EdgarError> {
        let url = self.config.submissions_url(cik.as_str());
        let body = self.fetch_text(&url).await?;
        let submission: CompanySubmission = serde_json::from_str(&body)?;
        Ok(submission)
    }

    /// Looks up a company's recent filings, optionally keeping one form type.
    ///
    /// `Ok(None)` means the submissions document has no recent filings section.
    pub async fn fetch_company_filings(
        &self,
        company_name: &str,
        form_type: Option<&str>,
    ) -> Result<Option<FilingReport>, EdgarError> {
        let cik = self.resolve_cik(company_name).await?;
        let submission = self.fetch_submissions(&cik).await?;
        tracing::debug!(
            "Submissions for CIK {} list registrant '{}'",
            cik,
            submission.name.as_deref().unwrap_or("unknown")
        );

        let recent = match submission.recent_filings() {
            Some(recent) => recent,
            None => {
                tracing::info!("No recent filings listed for {} (CIK {})", company_name, cik);
                return Ok(None);
            }
        };

        let filings = recent.to_records(&cik, form_type, &self.config.archives_base);
        tracing::info!(
            "Found {} filing(s) for {} (filter: {})",
            filings.len(),
            company_name,
            form_type.unwrap_or("all forms")
        );

        Ok(Some(FilingReport {
            company_name: company_name.to_string(),
            cik,
            filings,
        }))
    }

    /// Like [`fetch_company_filings`](Self::fetch_company_filings), but never fails:
    /// errors are logged and reported as a [`FilingLookup`] variant.
    pub async fn get_company_filings(
        &self,
        company_name: &str,
        form_type: Option<&str>,
    ) -> FilingLookup {
        match self.fetch_company_filings(company_name, form_type).await {
            Ok(Some(report)) => FilingLookup::Found(report),
            Ok(None) => FilingLookup::NoRecentFilings,
            Err(EdgarError::CompanyNotFound(name)) => {
                tracing::error!("Error: Company '{}' not found", name);
                FilingLookup::CompanyNotFound(name)
            }
            Err(e) => {
                tracing::error!("Error: {}", e);
                FilingLookup::RetrievalFailed(e.to_string())
            }
        }
    }
}
