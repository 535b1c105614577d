//! Core data models for citations and citation styles.

mod citation;

pub use citation::{
    Citation, CitationBuilder, CitationStyle, SourceType, UnknownSourceType, UnknownStyle,
};
