//! URL heuristics: infer a website or video citation from a raw URL string.

use chrono::{Datelike, Local};
use tracing::debug;
use url::Url;

use crate::format::format_manual_citation;
use crate::models::{Citation, CitationStyle, SourceType};
use crate::utils::{capitalize, strip_extension};

/// Current date in long form, "Month D, YYYY"
fn today_long() -> String {
    Local::now().format("%B %-d, %Y").to_string()
}

/// Derive a page title from the last path segment: dashes and underscores to
/// spaces, extension stripped, each word capitalized.
fn title_from_path(url: &Url) -> String {
    let last = url
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or("");
    let spaced = last.replace(['-', '_'], " ");
    strip_extension(&spaced)
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Infer a citation from a URL string.
///
/// The website name comes from the first DNS label of the hostname (leading
/// "www." stripped), the title from the last path segment, and the access
/// date is today. A youtube/vimeo hostname yields a Video citation with
/// `channel_name` and `video_url` populated. Malformed input never fails:
/// it produces a placeholdered Website citation with the raw string kept as
/// `url`.
pub fn extract_from_url(raw: &str) -> Citation {
    let year = Local::now().year().to_string();
    let access_date = today_long();

    let Ok(url) = Url::parse(raw) else {
        debug!(input = %raw, "unparseable url, returning placeholders");
        let mut citation = Citation::new(SourceType::Website);
        citation.authors = "[Author]".to_string();
        citation.title = "[Page Title]".to_string();
        citation.year = year;
        citation.website_name = Some("[Website]".to_string());
        citation.url = Some(raw.to_string());
        citation.access_date = Some(access_date);
        return citation;
    };

    let host = url.host_str().unwrap_or("");
    let website_name = capitalize(
        host.trim_start_matches("www.")
            .split('.')
            .next()
            .unwrap_or(""),
    );

    let source_type = if host.contains("youtube") || host.contains("vimeo") {
        SourceType::Video
    } else {
        SourceType::Website
    };

    let title = {
        let from_path = title_from_path(&url);
        if from_path.is_empty() {
            website_name.clone()
        } else {
            from_path
        }
    };

    let mut citation = Citation::new(source_type);
    citation.authors = "[Author/Organization]".to_string();
    citation.title = if title.is_empty() {
        "[Page Title]".to_string()
    } else {
        title
    };
    citation.year = year;
    citation.website_name = Some(website_name.clone());
    citation.url = Some(raw.to_string());
    citation.access_date = Some(access_date);
    if source_type == SourceType::Video {
        citation.channel_name = Some(website_name);
        citation.video_url = Some(raw.to_string());
    }
    citation
}

/// Extract metadata from a URL and render it in the given style.
pub fn cite_url(raw: &str, style: CitationStyle) -> String {
    let citation = extract_from_url(raw);
    format_manual_citation(&citation, citation.source_type, style)
}
