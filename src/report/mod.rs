// src/report/mod.rs
use crate::edgar::client::FilingLookup;
use crate::edgar::models::{FilingRecord, FilingReport};
use serde::Serialize;
use std::io::{self, Write};

pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

/// Writes a human-readable report of the first `limit` filings, in stored order.
/// An absent report prints a fixed notice.
pub fn display_filings<W: Write>(
    out: &mut W,
    report: Option<&FilingReport>,
    limit: usize,
) -> io::Result<()> {
    let report = match report {
        Some(report) => report,
        None => {
            writeln!(out, "No filing data available")?;
            return Ok(());
        }
    };

    writeln!(out, "\nCompany Data for {}:", report.company_name)?;
    writeln!(out, "CIK: {}", report.cik)?;

    writeln!(out, "\nRecent Filings:")?;
    for (i, filing) in report.filings.iter().take(limit).enumerate() {
        writeln!(out, "\n{}. Form {}", i + 1, filing.form)?;
        writeln!(out, "   Filed on: {}", filing.date)?;
        writeln!(out, "   URL: {}", filing.url)?;
        writeln!(out, "   Accession Number: {}", filing.accession_number)?;
    }

    Ok(())
}

/// Writes the short detail block for one chosen filing.
pub fn display_selected_filing<W: Write>(out: &mut W, filing: &FilingRecord) -> io::Result<()> {
    writeln!(out, "\nSelected Filing Details:")?;
    writeln!(out, "Form: {}", filing.form)?;
    writeln!(out, "Date: {}", filing.date)?;
    writeln!(out, "URL: {}", filing.url)?;
    Ok(())
}

/// How a lookup ended, for JSON output.
#[derive(Debug, Serialize)]
pub struct LookupStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&FilingLookup> for LookupStatus {
    fn from(lookup: &FilingLookup) -> Self {
        Self {
            status: lookup.status(),
            message: lookup.message(),
        }
    }
}

/// JSON output: the reports, how each lookup ended, and when they were generated.
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<'a> {
    pub generated_at: String,
    pub all_status: LookupStatus,
    pub all_filings: Option<&'a FilingReport>,
    pub form_type: &'a str,
    pub filtered_status: LookupStatus,
    pub filtered_filings: Option<&'a FilingReport>,
}

impl<'a> ReportEnvelope<'a> {
    pub fn new(all: &'a FilingLookup, form_type: &'a str, filtered: &'a FilingLookup) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            all_status: LookupStatus::from(all),
            all_filings: all.report(),
            form_type,
            filtered_status: LookupStatus::from(filtered),
            filtered_filings: filtered.report(),
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, envelope: &ReportEnvelope<'_>) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, envelope)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}
