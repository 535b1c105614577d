//! In-memory bibliography: an ordered collection of generated citations.

use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

use crate::format::format_manual_citation;
use crate::models::{Citation, CitationStyle};

/// Length of generated citation ids (base-36 characters)
const ID_LEN: usize = 7;

/// Source of citation ids.
///
/// Injectable so tests can use predictable ids; the default is a random
/// 7-character base-36 token, short enough to read and with a collision
/// probability that is negligible at bibliography scale (collisions are
/// retried regardless).
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    fn next_id(&mut self) -> String;
}

/// Default random id generator
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LEN)
            .map(|_| {
                let digit: u32 = rng.gen_range(0..36);
                char::from_digit(digit, 36).unwrap_or('0')
            })
            .collect()
    }
}

/// Deterministic counter-based ids, for tests
#[derive(Debug, Default)]
pub struct SequentialIds(u64);

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("id{:05}", self.0)
    }
}

/// Ordered, insertion-order-preserving collection of citations.
///
/// Citations are owned by a single logical session; there is no concurrency
/// contract. Removal is by id and never reorders the remaining entries.
#[derive(Debug)]
pub struct Bibliography {
    citations: Vec<Citation>,
    index: HashMap<String, usize>,
    ids: Box<dyn IdGenerator>,
}

impl Default for Bibliography {
    fn default() -> Self {
        Self::new()
    }
}

impl Bibliography {
    /// Create an empty bibliography with random ids
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(RandomIds))
    }

    /// Create an empty bibliography with a custom id generator
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            citations: Vec::new(),
            index: HashMap::new(),
            ids,
        }
    }

    /// Append a citation, assigning it a fresh unique id. Returns the id.
    pub fn add(&mut self, mut citation: Citation) -> String {
        let mut id = self.ids.next_id();
        while self.index.contains_key(&id) {
            debug!(%id, "citation id collision, regenerating");
            id = self.ids.next_id();
        }
        citation.id = id.clone();
        self.index.insert(id.clone(), self.citations.len());
        self.citations.push(citation);
        id
    }

    /// Render a draft in the given style, store the result in its `formatted`
    /// map and append it. Returns the assigned id.
    pub fn format_and_add(&mut self, mut draft: Citation, style: CitationStyle) -> String {
        let rendered = format_manual_citation(&draft, draft.source_type, style);
        draft.formatted.insert(style, rendered);
        self.add(draft)
    }

    /// Remove a citation by id, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Citation> {
        let pos = self.index.remove(id)?;
        let removed = self.citations.remove(pos);
        for (i, citation) in self.citations.iter().enumerate().skip(pos) {
            self.index.insert(citation.id.clone(), i);
        }
        Some(removed)
    }

    /// Look up a citation by id
    pub fn get(&self, id: &str) -> Option<&Citation> {
        self.index.get(id).and_then(|&pos| self.citations.get(pos))
    }

    /// Render a stored citation in an additional style, caching the result.
    /// Returns the rendered string, or None if the id is unknown.
    pub fn render(&mut self, id: &str, style: CitationStyle) -> Option<String> {
        let pos = *self.index.get(id)?;
        let citation = self.citations.get_mut(pos)?;
        let rendered = format_manual_citation(citation, citation.source_type, style);
        citation.formatted.insert(style, rendered.clone());
        Some(rendered)
    }

    /// Join every citation's rendering for the selected style with blank
    /// lines, skipping citations that have not been rendered in that style.
    pub fn export(&self, style: CitationStyle) -> String {
        self.citations
            .iter()
            .filter_map(|c| c.rendered(style))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Export with a "BIBLIOGRAPHY (<style name>)" title line
    pub fn export_titled(&self, style: CitationStyle) -> String {
        format!("BIBLIOGRAPHY ({})\n\n{}", style.name(), self.export(style))
    }

    /// Remove all citations
    pub fn clear(&mut self) {
        self.citations.clear();
        self.index.clear();
    }

    /// Number of stored citations
    pub fn len(&self) -> usize {
        self.citations.len()
    }

    /// Whether the bibliography holds no citations
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// Iterate over citations in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Citation> {
        self.citations.iter()
    }
}
