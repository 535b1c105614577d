//! # Cite Master
//!
//! A citation modeling and formatting engine: turn bibliographic facts into
//! correctly formatted references across five citation styles, or infer
//! those facts from a document or a URL.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Citation, SourceType, CitationStyle)
//! - [`format`]: Author-list collapsing and the style formatter matrix
//! - [`extract`]: Metadata extraction heuristics for documents and URLs
//! - [`collection`]: The in-memory bibliography and id generation
//! - [`ai`]: Pluggable text-generation backend for AI-formatted citations
//!
//! ## Manual vs AI mode
//!
//! The manual path ([`format_manual_citation`]) is pure and deterministic
//! and needs no network access. The AI path delegates the same structured
//! facts to a [`ai::TextGenerator`] implementation; both sit behind
//! [`ai::Formatter`].

pub mod ai;
pub mod collection;
pub mod extract;
pub mod format;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use collection::Bibliography;
pub use format::{format_authors, format_manual_citation};
pub use models::{Citation, CitationBuilder, CitationStyle, SourceType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
