//! Citation model representing a bibliographic source of any type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// The category of the cited work
///
/// Determines which optional fields are meaningful and which extraction
/// heuristics apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Book,
    Website,
    Journal,
    Video,
}

impl SourceType {
    /// All source types, in display order
    pub const ALL: [SourceType; 4] = [
        SourceType::Book,
        SourceType::Website,
        SourceType::Journal,
        SourceType::Video,
    ];

    /// Returns the display name of the source type
    pub fn name(&self) -> &str {
        match self {
            SourceType::Book => "Book",
            SourceType::Website => "Website",
            SourceType::Journal => "Journal Article",
            SourceType::Video => "Video",
        }
    }

    /// Returns the source type identifier (used in prompts and CLI args)
    pub fn id(&self) -> &str {
        match self {
            SourceType::Book => "book",
            SourceType::Website => "website",
            SourceType::Journal => "journal",
            SourceType::Video => "video",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unrecognized source type identifier
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown source type: {0}")]
pub struct UnknownSourceType(pub String);

impl FromStr for SourceType {
    type Err = UnknownSourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "book" => Ok(SourceType::Book),
            "website" => Ok(SourceType::Website),
            "journal" => Ok(SourceType::Journal),
            "video" => Ok(SourceType::Video),
            other => Err(UnknownSourceType(other.to_string())),
        }
    }
}

/// A named citation formatting convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// APA 7th edition
    Apa,
    /// MLA 9th edition
    Mla,
    /// Chicago 17th edition
    Chicago,
    /// Harvard
    Harvard,
    /// IEEE
    Ieee,
}

impl CitationStyle {
    /// All supported styles, in display order
    pub const ALL: [CitationStyle; 5] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Harvard,
        CitationStyle::Ieee,
    ];

    /// Returns the display name of the style (used in UI labels and prompts)
    pub fn name(&self) -> &str {
        match self {
            CitationStyle::Apa => "APA 7th Edition",
            CitationStyle::Mla => "MLA 9th Edition",
            CitationStyle::Chicago => "Chicago 17th Edition",
            CitationStyle::Harvard => "Harvard",
            CitationStyle::Ieee => "IEEE",
        }
    }

    /// Returns the style identifier (used in CLI args and export filenames)
    pub fn id(&self) -> &str {
        match self {
            CitationStyle::Apa => "apa",
            CitationStyle::Mla => "mla",
            CitationStyle::Chicago => "chicago",
            CitationStyle::Harvard => "harvard",
            CitationStyle::Ieee => "ieee",
        }
    }
}

impl std::fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unrecognized style identifier
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown citation style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for CitationStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apa" => Ok(CitationStyle::Apa),
            "mla" => Ok(CitationStyle::Mla),
            "chicago" => Ok(CitationStyle::Chicago),
            "harvard" => Ok(CitationStyle::Harvard),
            "ieee" => Ok(CitationStyle::Ieee),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

/// A structured record of bibliographic facts plus zero or more pre-rendered,
/// style-specific textual representations.
///
/// `authors`, `title` and `year` are free text; the formatter degrades
/// gracefully when they are empty. The optional fields are only meaningful for
/// certain source types. `formatted` is a pure cache keyed by style and can be
/// recomputed from the other fields at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Unique identifier, assigned by the collection when stored
    pub id: String,

    /// Category of the cited work
    pub source_type: SourceType,

    /// Authors (comma/ampersand-separated free text)
    pub authors: String,

    /// Work title
    pub title: String,

    /// Publication year (free text, may be "n.d." or a range)
    pub year: String,

    /// Publisher (books)
    pub publisher: Option<String>,

    /// Page range (books, journal articles)
    pub pages: Option<String>,

    /// Page URL (websites)
    pub url: Option<String>,

    /// Date the source was accessed, "Month D, YYYY" (websites)
    pub access_date: Option<String>,

    /// Journal name (journal articles)
    pub journal_name: Option<String>,

    /// Volume number (journal articles)
    pub volume: Option<String>,

    /// Issue number (journal articles)
    pub issue: Option<String>,

    /// Digital Object Identifier (journal articles)
    pub doi: Option<String>,

    /// Website name (websites)
    pub website_name: Option<String>,

    /// Channel name (videos)
    pub channel_name: Option<String>,

    /// Video URL (videos)
    pub video_url: Option<String>,

    /// Style-keyed cache of rendered citation strings
    pub formatted: HashMap<CitationStyle, String>,
}

impl Citation {
    /// Create an empty citation for the given source type
    pub fn new(source_type: SourceType) -> Self {
        Self {
            id: String::new(),
            source_type,
            authors: String::new(),
            title: String::new(),
            year: String::new(),
            publisher: None,
            pages: None,
            url: None,
            access_date: None,
            journal_name: None,
            volume: None,
            issue: None,
            doi: None,
            website_name: None,
            channel_name: None,
            video_url: None,
            formatted: HashMap::new(),
        }
    }

    /// Whether the required fields are filled in
    ///
    /// Formatting an incomplete citation is still permitted; the gaps simply
    /// render as empty segments.
    pub fn is_complete(&self) -> bool {
        !self.authors.trim().is_empty() && !self.title.trim().is_empty()
    }

    /// The rendered string for a style, if it has been formatted
    pub fn rendered(&self, style: CitationStyle) -> Option<&str> {
        self.formatted.get(&style).map(String::as_str)
    }
}

/// Builder for constructing Citation objects
#[derive(Debug, Clone)]
pub struct CitationBuilder {
    citation: Citation,
}

impl CitationBuilder {
    /// Create a new builder for the given source type
    pub fn new(source_type: SourceType) -> Self {
        Self {
            citation: Citation::new(source_type),
        }
    }

    /// Set authors
    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.citation.authors = authors.into();
        self
    }

    /// Set title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.citation.title = title.into();
        self
    }

    /// Set year
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.citation.year = year.into();
        self
    }

    /// Set publisher
    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.citation.publisher = Some(publisher.into());
        self
    }

    /// Set page range
    pub fn pages(mut self, pages: impl Into<String>) -> Self {
        self.citation.pages = Some(pages.into());
        self
    }

    /// Set page URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.citation.url = Some(url.into());
        self
    }

    /// Set access date
    pub fn access_date(mut self, date: impl Into<String>) -> Self {
        self.citation.access_date = Some(date.into());
        self
    }

    /// Set journal name
    pub fn journal_name(mut self, name: impl Into<String>) -> Self {
        self.citation.journal_name = Some(name.into());
        self
    }

    /// Set volume
    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.citation.volume = Some(volume.into());
        self
    }

    /// Set issue
    pub fn issue(mut self, issue: impl Into<String>) -> Self {
        self.citation.issue = Some(issue.into());
        self
    }

    /// Set DOI
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.citation.doi = Some(doi.into());
        self
    }

    /// Set website name
    pub fn website_name(mut self, name: impl Into<String>) -> Self {
        self.citation.website_name = Some(name.into());
        self
    }

    /// Set channel name
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.citation.channel_name = Some(name.into());
        self
    }

    /// Set video URL
    pub fn video_url(mut self, url: impl Into<String>) -> Self {
        self.citation.video_url = Some(url.into());
        self
    }

    /// Build the Citation
    pub fn build(self) -> Citation {
        self.citation
    }
}
