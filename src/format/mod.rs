//! Style formatter matrix: pure template rules mapping a citation to a
//! formatted reference string.
//!
//! Dispatch is two-level, style then source type, giving twenty leaf
//! templates. Every template follows the same policy: an absent optional
//! field drops its whole fragment together with its decorating punctuation.
//! Titles of standalone works (books, videos, journal names) are italicized
//! with `*...*` markers; titles of contained works (articles, web pages) are
//! quoted. Harvard and the Chicago journal rule render a missing year as
//! "n.d."; the other styles omit the year clause entirely.

mod authors;

pub use authors::format_authors;

use crate::models::{Citation, CitationStyle, SourceType};

/// Borrowed view of a citation's fields with `None` flattened to "".
struct Fields<'a> {
    authors: &'a str,
    title: &'a str,
    year: &'a str,
    publisher: &'a str,
    pages: &'a str,
    url: &'a str,
    access_date: &'a str,
    journal_name: &'a str,
    volume: &'a str,
    issue: &'a str,
    doi: &'a str,
    website_name: &'a str,
    channel_name: &'a str,
    video_url: &'a str,
}

impl<'a> Fields<'a> {
    fn new(citation: &'a Citation) -> Self {
        let opt = |field: &'a Option<String>| field.as_deref().unwrap_or("");
        Self {
            authors: &citation.authors,
            title: &citation.title,
            year: &citation.year,
            publisher: opt(&citation.publisher),
            pages: opt(&citation.pages),
            url: opt(&citation.url),
            access_date: opt(&citation.access_date),
            journal_name: opt(&citation.journal_name),
            volume: opt(&citation.volume),
            issue: opt(&citation.issue),
            doi: opt(&citation.doi),
            website_name: opt(&citation.website_name),
            channel_name: opt(&citation.channel_name),
            video_url: opt(&citation.video_url),
        }
    }

    /// Channel name for video templates, falling back to the raw author string
    fn uploader(&self) -> &'a str {
        if self.channel_name.is_empty() {
            self.authors
        } else {
            self.channel_name
        }
    }
}

/// Italicize a non-empty value with markdown-style markers
fn italic(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!("*{s}*")
    }
}

/// "n.d." placeholder for styles that need a non-empty date slot
fn or_nd(s: &str) -> &str {
    if s.is_empty() {
        "n.d."
    } else {
        s
    }
}

/// Prefix a non-empty value ("vol. 5", "pp. 10-20")
fn labeled(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}

/// Join the non-empty parts with a separator
fn join_present(parts: &[String], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Final cleanup: collapse runs of spaces and strip stray leading punctuation
/// left behind when the author segment is empty.
fn tidy(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.trim().chars() {
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(ch);
    }
    out.trim_start_matches(['.', ',', ' ']).to_string()
}

/// Render a citation in the given style for the given source type.
///
/// Pure and total: never fails, never performs I/O, and always returns the
/// same output for the same inputs. Missing required fields render as empty
/// segments rather than placeholders.
pub fn format_manual_citation(
    citation: &Citation,
    source_type: SourceType,
    style: CitationStyle,
) -> String {
    let fields = Fields::new(citation);
    let raw = match style {
        CitationStyle::Apa => apa(source_type, &fields),
        CitationStyle::Mla => mla(source_type, &fields),
        CitationStyle::Chicago => chicago(source_type, &fields),
        CitationStyle::Harvard => harvard(source_type, &fields),
        CitationStyle::Ieee => ieee(source_type, &fields),
    };
    tidy(&raw)
}

fn apa(source_type: SourceType, f: &Fields) -> String {
    let a = format_authors(f.authors, CitationStyle::Apa);
    match source_type {
        SourceType::Book => {
            let mut s = a;
            if !f.year.is_empty() {
                s.push_str(&format!(" ({})", f.year));
            }
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" {}", italic(f.title)));
            }
            if !f.publisher.is_empty() {
                s.push_str(&format!(". {}", f.publisher));
            }
            s.push('.');
            s
        }
        SourceType::Website => {
            let mut s = a;
            if !f.year.is_empty() {
                s.push_str(&format!(" ({})", f.year));
            }
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", f.title));
            }
            if !f.website_name.is_empty() {
                s.push_str(&format!(" {}.", f.website_name));
            }
            if !f.url.is_empty() {
                s.push_str(&format!(
                    " Retrieved {} from {}",
                    or_nd(f.access_date),
                    f.url
                ));
            }
            s
        }
        SourceType::Journal => {
            let mut s = a;
            if !f.year.is_empty() {
                s.push_str(&format!(" ({})", f.year));
            }
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", f.title));
            }
            if !f.journal_name.is_empty() {
                s.push_str(&format!(" {}", italic(f.journal_name)));
            }
            if !f.volume.is_empty() {
                s.push_str(&format!(", {}", f.volume));
            }
            if !f.issue.is_empty() {
                s.push_str(&format!("({})", f.issue));
            }
            if !f.pages.is_empty() {
                s.push_str(&format!(", {}", f.pages));
            }
            s.push('.');
            if !f.doi.is_empty() {
                s.push_str(&format!(" https://doi.org/{}", f.doi));
            }
            s
        }
        SourceType::Video => {
            let mut s = f.uploader().to_string();
            if !f.year.is_empty() {
                s.push_str(&format!(" ({})", f.year));
            }
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" {}", italic(f.title)));
            }
            s.push_str(" [Video]. YouTube.");
            if !f.video_url.is_empty() {
                s.push_str(&format!(" {}", f.video_url));
            }
            s
        }
    }
}

fn mla(source_type: SourceType, f: &Fields) -> String {
    let a = format_authors(f.authors, CitationStyle::Mla);
    match source_type {
        SourceType::Book => {
            let mut s = a;
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", italic(f.title)));
            }
            let tail = join_present(&[f.publisher.to_string(), f.year.to_string()], ", ");
            if !tail.is_empty() {
                s.push_str(&format!(" {tail}."));
            }
            s
        }
        SourceType::Website => {
            let mut s = a;
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" \"{}.\"", f.title));
            }
            let tail = join_present(
                &[
                    italic(f.website_name),
                    f.year.to_string(),
                    f.url.to_string(),
                ],
                ", ",
            );
            if !tail.is_empty() {
                s.push_str(&format!(" {tail}."));
            }
            s.push_str(&format!(" Accessed {}.", or_nd(f.access_date)));
            s
        }
        SourceType::Journal => {
            let mut s = a;
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" \"{}.\"", f.title));
            }
            let tail = join_present(
                &[
                    italic(f.journal_name),
                    labeled("vol. ", f.volume),
                    labeled("no. ", f.issue),
                    f.year.to_string(),
                    labeled("pp. ", f.pages),
                ],
                ", ",
            );
            if !tail.is_empty() {
                s.push_str(&format!(" {tail}."));
            }
            if !f.doi.is_empty() {
                s.push_str(&format!(" DOI: {}", f.doi));
            }
            s
        }
        SourceType::Video => {
            let mut s = String::new();
            if !f.title.is_empty() {
                s.push_str(&format!("\"{}.\" ", f.title));
            }
            s.push_str("YouTube");
            let who = f.uploader();
            if !who.is_empty() {
                s.push_str(&format!(", uploaded by {who}"));
            }
            if !f.year.is_empty() {
                s.push_str(&format!(", {}", f.year));
            }
            if !f.video_url.is_empty() {
                s.push_str(&format!(", {}", f.video_url));
            }
            s.push('.');
            s
        }
    }
}

fn chicago(source_type: SourceType, f: &Fields) -> String {
    let a = format_authors(f.authors, CitationStyle::Chicago);
    match source_type {
        SourceType::Book => {
            let mut s = a;
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", italic(f.title)));
            }
            let tail = join_present(&[f.publisher.to_string(), f.year.to_string()], ", ");
            if !tail.is_empty() {
                s.push_str(&format!(" {tail}."));
            }
            s
        }
        SourceType::Website => {
            let mut s = a;
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" \"{}.\"", f.title));
            }
            let tail = join_present(&[f.website_name.to_string(), f.year.to_string()], ". ");
            if !tail.is_empty() {
                s.push_str(&format!(" {tail}."));
            }
            if !f.url.is_empty() {
                s.push_str(&format!(" {}", f.url));
            }
            s
        }
        SourceType::Journal => {
            let mut s = a;
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" \"{}.\"", f.title));
            }
            if !f.journal_name.is_empty() {
                s.push_str(&format!(" {}", italic(f.journal_name)));
            }
            if !f.volume.is_empty() {
                s.push_str(&format!(" {}", f.volume));
            }
            if !f.issue.is_empty() {
                s.push_str(&format!(", no. {}", f.issue));
            }
            s.push_str(&format!(" ({})", or_nd(f.year)));
            if !f.pages.is_empty() {
                s.push_str(&format!(": {}", f.pages));
            }
            s.push('.');
            if !f.doi.is_empty() {
                s.push_str(&format!(" https://doi.org/{}", f.doi));
            }
            s
        }
        SourceType::Video => {
            let mut s = f.uploader().to_string();
            s.push('.');
            if !f.title.is_empty() {
                s.push_str(&format!(" \"{}.\"", f.title));
            }
            s.push_str(" YouTube video");
            if !f.year.is_empty() {
                s.push_str(&format!(", {}", f.year));
            }
            s.push('.');
            if !f.video_url.is_empty() {
                s.push_str(&format!(" {}", f.video_url));
            }
            s
        }
    }
}

fn harvard(source_type: SourceType, f: &Fields) -> String {
    let a = format_authors(f.authors, CitationStyle::Harvard);
    match source_type {
        SourceType::Book => {
            let mut s = a;
            s.push_str(&format!(" ({})", or_nd(f.year)));
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", italic(f.title)));
            }
            if !f.publisher.is_empty() {
                s.push_str(&format!(" {}.", f.publisher));
            }
            s
        }
        SourceType::Website => {
            let mut s = a;
            s.push_str(&format!(" ({})", or_nd(f.year)));
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", f.title));
            }
            s.push_str(" [online]");
            if !f.website_name.is_empty() {
                s.push_str(&format!(" {}.", f.website_name));
            }
            if !f.url.is_empty() {
                s.push_str(&format!(
                    " Available at: {} [Accessed {}].",
                    f.url,
                    or_nd(f.access_date)
                ));
            }
            s
        }
        SourceType::Journal => {
            let mut s = a;
            s.push_str(&format!(" ({})", or_nd(f.year)));
            if !f.title.is_empty() {
                s.push_str(&format!(" '{}',", f.title));
            }
            if !f.journal_name.is_empty() {
                s.push_str(&format!(" {}", italic(f.journal_name)));
            }
            if !f.volume.is_empty() {
                s.push_str(&format!(", {}", f.volume));
            }
            if !f.issue.is_empty() {
                s.push_str(&format!("({})", f.issue));
            }
            if !f.pages.is_empty() {
                s.push_str(&format!(", pp. {}", f.pages));
            }
            s.push('.');
            if !f.doi.is_empty() {
                s.push_str(&format!(" doi: {}", f.doi));
            }
            s
        }
        SourceType::Video => {
            let mut s = f.uploader().to_string();
            s.push_str(&format!(" ({})", or_nd(f.year)));
            if !f.title.is_empty() {
                s.push_str(&format!(" {}.", italic(f.title)));
            }
            s.push_str(" [video]");
            if !f.video_url.is_empty() {
                s.push_str(&format!(" Available at: {}", f.video_url));
            }
            s
        }
    }
}

fn ieee(source_type: SourceType, f: &Fields) -> String {
    // IEEE keeps the raw author string; no list collapsing.
    match source_type {
        SourceType::Book => {
            let mut s = String::new();
            if !f.authors.is_empty() {
                s.push_str(f.authors);
                s.push_str(", ");
            }
            if !f.title.is_empty() {
                s.push_str(&italic(f.title));
            }
            s.push('.');
            let tail = join_present(&[f.publisher.to_string(), f.year.to_string()], ", ");
            if !tail.is_empty() {
                s.push_str(&format!(" {tail}."));
            }
            s
        }
        SourceType::Website => {
            let mut s = String::new();
            if !f.authors.is_empty() {
                s.push_str(f.authors);
                s.push_str(", ");
            }
            if !f.title.is_empty() {
                s.push_str(&format!("\"{},\" ", f.title));
            }
            let tail = join_present(&[f.website_name.to_string(), f.year.to_string()], ", ");
            s.push_str(&tail);
            s.push('.');
            if !f.url.is_empty() {
                s.push_str(&format!(" [Online]. Available: {}.", f.url));
            }
            s.push_str(&format!(" [Accessed: {}].", or_nd(f.access_date)));
            s
        }
        SourceType::Journal => {
            let mut s = String::new();
            if !f.authors.is_empty() {
                s.push_str(f.authors);
                s.push_str(", ");
            }
            if !f.title.is_empty() {
                s.push_str(&format!("\"{},\" ", f.title));
            }
            let tail = join_present(
                &[
                    italic(f.journal_name),
                    labeled("vol. ", f.volume),
                    labeled("no. ", f.issue),
                    labeled("pp. ", f.pages),
                    f.year.to_string(),
                ],
                ", ",
            );
            s.push_str(&tail);
            s.push('.');
            if !f.doi.is_empty() {
                s.push_str(&format!(" doi: {}", f.doi));
            }
            s
        }
        SourceType::Video => {
            let mut s = String::new();
            let who = f.uploader();
            if !who.is_empty() {
                s.push_str(who);
                s.push_str(", ");
            }
            if !f.title.is_empty() {
                s.push_str(&format!("\"{},\" ", f.title));
            }
            s.push_str("YouTube");
            if !f.year.is_empty() {
                s.push_str(&format!(", {}", f.year));
            }
            s.push_str(". [Online Video].");
            if !f.video_url.is_empty() {
                s.push_str(&format!(" Available: {}", f.video_url));
            }
            s
        }
    }
}
