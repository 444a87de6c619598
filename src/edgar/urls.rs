// src/edgar/urls.rs
use once_cell::sync::Lazy;
use regex::Regex;

// ##########-##-######, dashes optional
static ACCESSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{10}-?[0-9]{2}-?[0-9]{6}$").expect("Failed to compile ACCESSION_RE")
});

/// Removes the dashes from an accession number, as used in archive folder names.
pub fn strip_accession(accession_number: &str) -> String {
    accession_number.replace('-', "")
}

/// Builds the URL of the full submission text file for a filing:
/// `{archives_base}/{cik}/{accession without dashes}/{accession}.txt`.
///
/// Pure string formatting; the target is not checked for existence.
pub fn filing_url(archives_base: &str, accession_number: &str, cik: &str) -> String {
    format!(
        "{}/{}/{}/{}.txt",
        archives_base.trim_end_matches('/'),
        cik,
        strip_accession(accession_number),
        accession_number
    )
}

/// Builds the URL of a filing's primary document (the main HTML/XML file).
pub fn primary_document_url(
    archives_base: &str,
    accession_number: &str,
    cik: &str,
    primary_document: &str,
) -> String {
    format!(
        "{}/{}/{}/{}",
        archives_base.trim_end_matches('/'),
        cik,
        strip_accession(accession_number),
        primary_document
    )
}

pub fn accession_is_well_formed(accession_number: &str) -> bool {
    ACCESSION_RE.is_match(accession_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ARCHIVES_BASE;

    #[test]
    fn test_filing_url_strips_only_folder_segment() {
        let url = filing_url(DEFAULT_ARCHIVES_BASE, "0000936468-23-000123", "0000936468");
        assert_eq!(
            url,
            "https://www.sec.gov/Archives/edgar/data/0000936468/000093646823000123/0000936468-23-000123.txt"
        );
    }

    #[test]
    fn test_filing_url_is_deterministic() {
        let a = filing_url(DEFAULT_ARCHIVES_BASE, "0000320193-24-000081", "0000320193");
        let b = filing_url(DEFAULT_ARCHIVES_BASE, "0000320193-24-000081", "0000320193");
        assert_eq!(a, b);
        let other = filing_url(DEFAULT_ARCHIVES_BASE, "0000320193-24-000082", "0000320193");
        assert_ne!(a, other, "Distinct accession numbers must not share a URL");
    }

    #[test]
    fn test_filing_url_accepts_undashed_accession() {
        let url = filing_url("http://mirror.test/data/", "000093646823000123", "0000936468");
        assert_eq!(
            url,
            "http://mirror.test/data/0000936468/000093646823000123/000093646823000123.txt"
        );
    }

    #[test]
    fn test_primary_document_url() {
        let url = primary_document_url(
            DEFAULT_ARCHIVES_BASE,
            "0000936468-24-000012",
            "0000936468",
            "lmt-20231231.htm",
        );
        assert_eq!(
            url,
            "https://www.sec.gov/Archives/edgar/data/0000936468/000093646824000012/lmt-20231231.htm"
        );
    }

    #[test]
    fn test_accession_shape() {
        assert!(accession_is_well_formed("0000936468-23-000123"));
        assert!(accession_is_well_formed("000093646823000123"));
        assert!(!accession_is_well_formed("936468-23-000123"));
        assert!(!accession_is_well_formed("0000936468-23-00012X"));
        assert!(!accession_is_well_formed(""));
    }

    #[test]
    fn test_accession_rejects_non_ascii_digits() {
        assert!(!accession_is_well_formed("٠٠٠٠٩٣٦٤٦٨-٢٣-٠٠٠١٢٣"));
        assert!(!accession_is_well_formed("０００００９３６４６８-２３-０００１２３"));
    }
}
