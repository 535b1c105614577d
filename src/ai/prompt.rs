//! Prompt builders for the AI formatting path.
//!
//! The prompts carry the same structured facts the manual matrix consumes,
//! plus the style's display name, and instruct the backend to answer with
//! the formatted citation only.

use crate::models::{Citation, CitationStyle, SourceType};
use crate::utils::truncate_chars;

/// Document excerpts embedded in prompts are capped to keep requests small.
const EXCERPT_CAP: usize = 3000;

/// Render the citation's facts as a "Key: value" block, one line per
/// non-empty field. Only fields relevant to the source type are included.
pub fn source_info(citation: &Citation, source_type: SourceType) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut push = |label: &str, value: &str| {
        if !value.is_empty() {
            parts.push(format!("{label}: {value}"));
        }
    };

    push("Author(s)", &citation.authors);
    push("Title", &citation.title);
    push("Year", &citation.year);

    let opt = |field: &Option<String>| field.clone().unwrap_or_default();
    match source_type {
        SourceType::Book => {
            push("Publisher", &opt(&citation.publisher));
            push("Pages", &opt(&citation.pages));
        }
        SourceType::Website => {
            push("Website Name", &opt(&citation.website_name));
            push("URL", &opt(&citation.url));
            push("Access Date", &opt(&citation.access_date));
        }
        SourceType::Journal => {
            push("Journal", &opt(&citation.journal_name));
            push("Volume", &opt(&citation.volume));
            push("Issue", &opt(&citation.issue));
            push("Pages", &opt(&citation.pages));
            push("DOI", &opt(&citation.doi));
        }
        SourceType::Video => {
            push("Channel", &opt(&citation.channel_name));
            push("URL", &opt(&citation.video_url));
        }
    }
    parts.join("\n")
}

/// Prompt for formatting a structured citation
pub fn citation_prompt(
    citation: &Citation,
    source_type: SourceType,
    style: CitationStyle,
) -> String {
    format!(
        "Generate a citation in {style} format for the following source:\n\n\
         Source Type: {source_type}\n{info}\n\n\
         Please provide ONLY the formatted citation, nothing else. \
         Follow {style} guidelines exactly.",
        style = style.name(),
        source_type = source_type.id(),
        info = source_info(citation, source_type),
    )
}

/// Prompt for extracting metadata from a document and formatting a citation
pub fn document_prompt(filename: &str, content: &str, style: CitationStyle) -> String {
    format!(
        "Based on the following document information, extract metadata and \
         generate a citation in {style} format.\n\n\
         Document Name: {filename}\n\
         Document Content (excerpt):\n{excerpt}\n\n\
         Please:\n\
         1. Extract or infer: Author(s), Title, Year, Publisher (if applicable)\n\
         2. Determine the source type (book, article, report, etc.)\n\
         3. Generate a properly formatted {style} citation\n\n\
         If information is missing, make reasonable inferences from the \
         content or use [Unknown] placeholders.\n\n\
         Output ONLY the formatted citation, nothing else.",
        style = style.name(),
        excerpt = truncate_chars(content, EXCERPT_CAP),
    )
}

/// Prompt for inferring and formatting a citation from a URL
pub fn url_prompt(url: &str, style: CitationStyle) -> String {
    format!(
        "Generate a citation in {style} format for the following URL:\n\n\
         URL: {url}\n\n\
         Please:\n\
         1. Infer the source type (website, online article, video, etc.)\n\
         2. Extract or infer: Author/Organization, Title, Website Name, Publication Date\n\
         3. Include the access date as today's date\n\
         4. Generate a properly formatted {style} citation\n\n\
         Output ONLY the formatted citation, nothing else.",
        style = style.name(),
    )
}

/// Prompt for converting citations from one style to another
pub fn convert_prompt(input: &str, from: CitationStyle, to: CitationStyle) -> String {
    format!(
        "Convert the following citations from {from} format to {to} format.\n\n\
         Input Citations ({from}):\n{input}\n\n\
         Please convert each citation to {to} format. Maintain the same order. \
         Output ONLY the converted citations, one per line, with no additional \
         text or explanations.",
        from = from.name(),
        to = to.name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CitationBuilder;

    #[test]
    fn test_source_info_skips_empty_and_irrelevant_fields() {
        let citation = CitationBuilder::new(SourceType::Journal)
            .authors("Curie, Marie")
            .title("On Radioactive Substances")
            .journal_name("Annales de Physique")
            .publisher("Ignored For Journals")
            .build();

        let info = source_info(&citation, SourceType::Journal);
        assert_eq!(
            info,
            "Author(s): Curie, Marie\nTitle: On Radioactive Substances\nJournal: Annales de Physique"
        );
        assert!(!info.contains("Year"));
        assert!(!info.contains("Publisher"));
    }

    #[test]
    fn test_citation_prompt_names_style_and_source_type() {
        let citation = CitationBuilder::new(SourceType::Book)
            .authors("Smith, John")
            .title("Deep Work")
            .build();
        let prompt = citation_prompt(&citation, SourceType::Book, CitationStyle::Chicago);
        assert!(prompt.contains("Chicago 17th Edition"));
        assert!(prompt.contains("Source Type: book"));
        assert!(prompt.contains("Author(s): Smith, John"));
        assert!(prompt.contains("ONLY the formatted citation"));
    }

    #[test]
    fn test_document_prompt_caps_excerpt() {
        let long_content = "x".repeat(10_000);
        let prompt = document_prompt("notes.txt", &long_content, CitationStyle::Apa);
        assert!(prompt.len() < 4000);
        assert!(prompt.contains("Document Name: notes.txt"));
    }

    #[test]
    fn test_convert_prompt_names_both_styles() {
        let prompt = convert_prompt("Some citation.", CitationStyle::Apa, CitationStyle::Mla);
        assert!(prompt.contains("from APA 7th Edition format to MLA 9th Edition format"));
        assert!(prompt.contains("Some citation."));
    }
}
