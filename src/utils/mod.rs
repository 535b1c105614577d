//! Shared text helpers used by the extractors and prompt builders.

mod text;

pub use text::{capitalize, strip_extension, truncate_chars};
