//! Metadata extraction heuristics.
//!
//! Best-effort inference of a partial [`Citation`](crate::models::Citation)
//! from untrusted text: an uploaded document's body and filename, or a raw
//! URL string. Extraction never fails; anything the heuristics cannot find
//! is filled with a placeholder.

mod document;
mod url;

pub use document::{cite_document, detect_source_type, extract_from_document};
pub use url::{cite_url, extract_from_url};

/// Field-extraction scans are capped to the first slice of the document body
/// to bound regex cost on large files. Source-type detection is substring
/// matching and scans the whole content.
pub(crate) const CONTENT_SCAN_CAP: usize = 5000;
