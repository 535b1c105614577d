//! Document text and filename heuristics.

use chrono::{Datelike, Local};
use regex::Regex;
use tracing::debug;

use super::CONTENT_SCAN_CAP;
use crate::format::format_manual_citation;
use crate::models::{Citation, CitationStyle, SourceType};
use crate::utils::{strip_extension, truncate_chars};

/// First 4-digit year token starting with 19 or 20
fn find_year(text: &str) -> Option<String> {
    let re = Regex::new(r"\b(19|20)\d{2}\b").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

/// First "by <Name>" / "author: <Name>" / "written by <Name>" / "© <Name>"
/// credit line. Patterns are tried in order; the first match wins.
fn find_authors(text: &str) -> Option<String> {
    let patterns = [
        r"(?i)(?:by|author[s]?:?)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"(?i)(?:written by|©)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    ];
    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(text) {
                if let Some(name) = caps.get(1) {
                    return Some(name.as_str().to_string());
                }
            }
        }
    }
    None
}

fn find_doi(text: &str) -> Option<String> {
    let re = Regex::new(r"10\.\d{4,}/\S+").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}

fn find_isbn(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)ISBN[:\s]*([0-9\-X]+)").ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn find_publisher(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)(?:publisher|published by|press|publishing)[:\s]*([A-Z][a-zA-Z\s]+)")
        .ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|p| !p.is_empty())
}

/// Infer a citation from a document's body text and filename.
///
/// - title: filename with the extension stripped and `-`/`_` turned to spaces
/// - year: first 19xx/20xx token in the content, then the filename, then the
///   current calendar year
/// - authors: first credit-line match, or the "[Author]" placeholder
/// - doi / publisher: first pattern match, if any
///
/// An ISBN match is noted in the debug log but is not a citation field. The
/// source type is inferred with [`detect_source_type`].
pub fn extract_from_document(content: &str, filename: &str) -> Citation {
    let scanned = truncate_chars(content, CONTENT_SCAN_CAP);

    let title = strip_extension(filename).replace(['-', '_'], " ");
    let year = find_year(scanned)
        .or_else(|| find_year(filename))
        .unwrap_or_else(|| Local::now().year().to_string());
    let authors = find_authors(scanned).unwrap_or_else(|| "[Author]".to_string());

    if let Some(isbn) = find_isbn(scanned) {
        debug!(%isbn, "isbn found in document text");
    }

    let mut citation = Citation::new(detect_source_type(content, filename));
    citation.authors = authors;
    citation.title = title;
    citation.year = year;
    citation.doi = find_doi(scanned);
    citation.publisher = find_publisher(scanned);
    citation
}

/// Infer the source type from document content and filename.
///
/// The journal check runs before the website check; a paper that mentions
/// both a DOI and a URL is a journal article. Unlike the field extractions,
/// detection scans the whole content, so a marker past the extraction cap
/// still counts.
pub fn detect_source_type(content: &str, filename: &str) -> SourceType {
    let content = content.to_lowercase();
    let filename = filename.to_lowercase();

    if filename.contains("article") || content.contains("journal") || content.contains("doi:") {
        SourceType::Journal
    } else if content.contains("http") || content.contains("www.") {
        SourceType::Website
    } else {
        SourceType::Book
    }
}

/// Extract metadata from a document and render it in the given style.
pub fn cite_document(content: &str, filename: &str, style: CitationStyle) -> String {
    let citation = extract_from_document(content, filename);
    format_manual_citation(&citation, citation.source_type, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_filename() {
        let citation = extract_from_document("", "deep-work_rules.pdf");
        assert_eq!(citation.title, "deep work rules");
    }

    #[test]
    fn test_year_from_content_before_filename() {
        let citation = extract_from_document("Published in 1987.", "report-2003.txt");
        assert_eq!(citation.year, "1987");

        let citation = extract_from_document("no year here", "report-2003.txt");
        assert_eq!(citation.year, "2003");
    }

    #[test]
    fn test_year_defaults_to_current() {
        let citation = extract_from_document("nothing", "notes.txt");
        assert_eq!(citation.year, Local::now().year().to_string());
    }

    #[test]
    fn test_author_patterns() {
        let citation = extract_from_document("Written by Jane Austen, a novelist", "a.txt");
        assert_eq!(citation.authors, "Jane Austen");

        let citation = extract_from_document("Authors: Alan Turing", "a.txt");
        assert_eq!(citation.authors, "Alan Turing");

        let citation = extract_from_document("no credit line at all", "a.txt");
        assert_eq!(citation.authors, "[Author]");
    }

    #[test]
    fn test_doi_and_publisher() {
        let content = "doi: 10.1038/s41586-020-2649-2 Published by Nature Publishing Group";
        let citation = extract_from_document(content, "paper.txt");
        assert_eq!(citation.doi.as_deref(), Some("10.1038/s41586-020-2649-2"));
        assert_eq!(
            citation.publisher.as_deref(),
            Some("Nature Publishing Group")
        );
    }

    #[test]
    fn test_detect_journal_before_website() {
        // Content mentions both a journal and a URL; journal wins.
        let source = detect_source_type(
            "Published in a peer-reviewed journal, see http://example.com",
            "paper.txt",
        );
        assert_eq!(source, SourceType::Journal);
    }

    #[test]
    fn test_detect_website_and_book_fallback() {
        assert_eq!(
            detect_source_type("read more at www.example.com", "page.txt"),
            SourceType::Website
        );
        assert_eq!(
            detect_source_type("plain prose, nothing else", "memoir.txt"),
            SourceType::Book
        );
    }

    #[test]
    fn test_detect_scans_whole_content() {
        // The extraction cap does not apply to detection; a marker past the
        // first 5000 chars still classifies the document.
        let mut content = "x".repeat(CONTENT_SCAN_CAP + 1000);
        content.push_str(" published in a peer-reviewed journal");
        assert_eq!(detect_source_type(&content, "notes.txt"), SourceType::Journal);

        let mut content = "x".repeat(CONTENT_SCAN_CAP + 1000);
        content.push_str(" read more at www.example.com");
        assert_eq!(detect_source_type(&content, "notes.txt"), SourceType::Website);
    }

    #[test]
    fn test_detect_article_filename() {
        assert_eq!(
            detect_source_type("", "my-article-draft.txt"),
            SourceType::Journal
        );
    }

    #[test]
    fn test_cite_document_end_to_end() {
        let rendered = cite_document(
            "Written by Cal Newport. Published in 2016.",
            "deep-work.txt",
            CitationStyle::Apa,
        );
        assert_eq!(rendered, "Cal Newport (2016). *deep work*.");
    }
}
