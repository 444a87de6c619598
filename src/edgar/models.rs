// src/edgar/models.rs
use crate::edgar::urls;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row of the EDGAR company index.
/// Example: https://www.sec.gov/files/company_tickers.json
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyIndexEntry {
    pub title: String,
    #[serde(rename = "cik_str")]
    pub cik: u64,
}

/// The full company index, in upstream order.
#[derive(Debug, Default)]
pub struct CompanyIndex {
    entries: Vec<CompanyIndexEntry>,
}

impl CompanyIndex {
    /// Parses the index body. Upstream keys are positions ("0", "1", ...),
    /// so entries are ordered by numeric key rather than by hash order.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, CompanyIndexEntry> = serde_json::from_str(body)?;
        let mut keyed: Vec<(String, CompanyIndexEntry)> = raw.into_iter().collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let a_pos = a.parse::<u64>().unwrap_or(u64::MAX);
            let b_pos = b.parse::<u64>().unwrap_or(u64::MAX);
            a_pos.cmp(&b_pos).then_with(|| a.cmp(b))
        });

        Ok(Self {
            entries: keyed.into_iter().map(|(_, entry)| entry).collect(),
        })
    }

    /// First entry whose title equals `company_name`, ignoring case. No partial matching.
    pub fn find_by_title(&self, company_name: &str) -> Option<&CompanyIndexEntry> {
        let wanted = company_name.to_uppercase();
        self.entries
            .iter()
            .find(|entry| entry.title.to_uppercase() == wanted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Central Index Key, zero-padded to 10 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cik(String);

impl Cik {
    pub fn from_number(cik: u64) -> Self {
        Cik(format!("{:010}", cik))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of the EDGAR submissions document we read.
/// Example: https://data.sec.gov/submissions/CIK0000936468.json
#[derive(Debug, Default, Deserialize)]
pub struct CompanySubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub filings: Option<Filings>,
}

impl CompanySubmission {
    /// The "recent" filings section, or `None` when it is missing or holds no filings.
    pub fn recent_filings(&self) -> Option<&RecentFilings> {
        self.filings
            .as_ref()
            .and_then(|filings| filings.recent.as_ref())
            .filter(|recent| !recent.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Filings {
    #[serde(default)]
    pub recent: Option<RecentFilings>,
}

/// Parallel arrays: index `i` across all of them describes one filing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFilings {
    #[serde(default)]
    pub accession_number: Vec<String>,
    #[serde(default)]
    pub filing_date: Vec<String>,
    #[serde(default)]
    pub form: Vec<String>,
    #[serde(default)]
    pub primary_document: Vec<String>,
}

impl RecentFilings {
    pub fn is_empty(&self) -> bool {
        self.form.is_empty() && self.filing_date.is_empty() && self.accession_number.is_empty()
    }

    /// Builds one record per filing whose form equals `form_filter` exactly
    /// (case-sensitive; "10-K" does not match "10-K/A"). `None` keeps every form.
    /// Upstream order is preserved.
    pub fn to_records(
        &self,
        cik: &Cik,
        form_filter: Option<&str>,
        archives_base: &str,
    ) -> Vec<FilingRecord> {
        let (forms, dates, accessions) =
            (self.form.len(), self.filing_date.len(), self.accession_number.len());
        if forms != dates || dates != accessions {
            tracing::warn!(
                "Recent filings arrays differ in length (form: {}, filingDate: {}, accessionNumber: {}); reading the shortest",
                forms,
                dates,
                accessions
            );
        }

        self.form
            .iter()
            .zip(&self.filing_date)
            .zip(&self.accession_number)
            .enumerate()
            .filter(|(_, ((form, _), _))| form_filter.map_or(true, |wanted| form.as_str() == wanted))
            .map(|(i, ((form, date), accession))| {
                if !urls::accession_is_well_formed(accession) {
                    tracing::warn!("Unexpected accession number format: {}", accession);
                }
                let primary_document_url = self
                    .primary_document
                    .get(i)
                    .filter(|doc| !doc.is_empty())
                    .map(|doc| urls::primary_document_url(archives_base, accession, cik.as_str(), doc));

                FilingRecord {
                    form: form.clone(),
                    date: date.clone(),
                    url: urls::filing_url(archives_base, accession, cik.as_str()),
                    accession_number: accession.clone(),
                    primary_document_url,
                }
            })
            .collect()
    }
}

/// A single filing selected for the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilingRecord {
    pub form: String,
    pub date: String, // YYYY-MM-DD, as listed upstream
    pub url: String,
    pub accession_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_document_url: Option<String>,
}

/// A company's filings as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilingReport {
    pub company_name: String,
    pub cik: Cik,
    pub filings: Vec<FilingRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ARCHIVES_BASE;

    const INDEX_JSON: &str = r#"{
        "10": {"cik_str": 2, "ticker": "LMTX", "title": "Lockheed Martin Corp"},
        "0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."},
        "2": {"cik_str": 936468, "ticker": "LMT", "title": "LOCKHEED MARTIN CORP"}
    }"#;

    fn recent(forms: &[&str]) -> RecentFilings {
        RecentFilings {
            accession_number: (0..forms.len())
                .map(|i| format!("0000936468-24-{:06}", i))
                .collect(),
            filing_date: (0..forms.len())
                .map(|i| format!("2024-01-{:02}", i + 1))
                .collect(),
            form: forms.iter().map(|f| f.to_string()).collect(),
            primary_document: Vec::new(),
        }
    }

    #[test]
    fn test_cik_is_zero_padded() {
        assert_eq!(Cik::from_number(936468).as_str(), "0000936468");
        assert_eq!(Cik::from_number(1234567890).to_string(), "1234567890");
    }

    #[test]
    fn test_index_lookup_is_case_insensitive_exact_and_ordered() {
        let index = CompanyIndex::from_json(INDEX_JSON).unwrap();
        assert_eq!(index.len(), 3);

        // "2" precedes "10" numerically, so the LMT entry wins.
        let upper = index.find_by_title("LOCKHEED MARTIN CORP").unwrap();
        let lower = index.find_by_title("lockheed martin corp").unwrap();
        assert_eq!(upper.cik, 936468);
        assert_eq!(lower.cik, upper.cik);

        assert!(index.find_by_title("Lockheed").is_none(), "No partial matches");
        assert!(index.find_by_title("Apple Inc").is_none(), "Punctuation must match");
    }

    #[test]
    fn test_form_filter_is_exact() {
        let filings = recent(&["10-K", "10-K/A", "8-K"]);
        let cik = Cik::from_number(936468);

        let only_10k = filings.to_records(&cik, Some("10-K"), DEFAULT_ARCHIVES_BASE);
        assert_eq!(only_10k.len(), 1);
        assert_eq!(only_10k[0].form, "10-K");
        assert_eq!(only_10k[0].accession_number, "0000936468-24-000000");

        let lowercase = filings.to_records(&cik, Some("10-k"), DEFAULT_ARCHIVES_BASE);
        assert!(lowercase.is_empty(), "Form filter is case-sensitive");

        let all = filings.to_records(&cik, None, DEFAULT_ARCHIVES_BASE);
        let forms: Vec<&str> = all.iter().map(|r| r.form.as_str()).collect();
        assert_eq!(forms, vec!["10-K", "10-K/A", "8-K"]);
    }

    #[test]
    fn test_records_carry_urls_and_primary_document() {
        let mut filings = recent(&["10-Q"]);
        filings.primary_document = vec!["lmt-20240331.htm".to_string()];
        let records = filings.to_records(&Cik::from_number(936468), None, DEFAULT_ARCHIVES_BASE);

        assert_eq!(
            records[0].url,
            "https://www.sec.gov/Archives/edgar/data/0000936468/000093646824000000/0000936468-24-000000.txt"
        );
        assert_eq!(
            records[0].primary_document_url.as_deref(),
            Some("https://www.sec.gov/Archives/edgar/data/0000936468/000093646824000000/lmt-20240331.htm")
        );
        assert_eq!(records[0].date, "2024-01-01");
    }

    #[test]
    fn test_mismatched_arrays_stop_at_shortest() {
        let mut filings = recent(&["10-K", "8-K", "8-K"]);
        filings.filing_date.truncate(2);
        let records = filings.to_records(&Cik::from_number(1), None, DEFAULT_ARCHIVES_BASE);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_recent_section_absent_or_empty() {
        let missing: CompanySubmission = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert!(missing.recent_filings().is_none());

        let no_recent: CompanySubmission =
            serde_json::from_str(r#"{"filings": {"files": []}}"#).unwrap();
        assert!(no_recent.recent_filings().is_none());

        let empty: CompanySubmission = serde_json::from_str(
            r#"{"filings": {"recent": {"form": [], "filingDate": [], "accessionNumber": []}}}"#,
        )
        .unwrap();
        assert!(empty.recent_filings().is_none());

        let present: CompanySubmission = serde_json::from_str(
            r#"{"filings": {"recent": {"form": ["8-K"], "filingDate": ["2024-02-01"], "accessionNumber": ["0000936468-24-000001"]}}}"#,
        )
        .unwrap();
        assert_eq!(present.recent_filings().map(|r| r.form.len()), Some(1));
    }
}
