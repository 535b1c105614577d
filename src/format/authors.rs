//! Author-list collapsing rules.

use crate::models::CitationStyle;

/// Connective family for author lists. APA, Harvard and IEEE join with an
/// ampersand; MLA and Chicago join with "and" and collapse three or more
/// authors to "First, et al." per MLA 9.
enum Family {
    Ampersand,
    And,
}

fn family(style: CitationStyle) -> Family {
    match style {
        CitationStyle::Apa | CitationStyle::Harvard | CitationStyle::Ieee => Family::Ampersand,
        CitationStyle::Mla | CitationStyle::Chicago => Family::And,
    }
}

/// Collapse a free-text author string into style-specific prose.
///
/// The raw string is split on both `,` and `&`. This conflates internal
/// commas ("Smith, J.") with separators between authors; that ambiguity is a
/// known limitation of the input format and is kept as-is.
pub fn format_authors(raw: &str, style: CitationStyle) -> String {
    let names: Vec<&str> = raw
        .split([',', '&'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match (names.len(), family(style)) {
        (0, _) => String::new(),
        (1, _) => names[0].to_string(),
        (2, Family::Ampersand) => format!("{} & {}", names[0], names[1]),
        (2, Family::And) => format!("{}, and {}", names[0], names[1]),
        (_, Family::Ampersand) => {
            let (last, rest) = names.split_last().unwrap_or((&"", &[]));
            format!("{}, & {}", rest.join(", "), last)
        }
        (_, Family::And) => format!("{}, et al.", names[0]),
    }
}
