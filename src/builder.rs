//! Map document construction.
//!
//! This module contains the `MapDocumentBuilder` which turns map file text into a `Document`:
//! 1. Area scan: one `Entry` per area pattern match, in textual order.
//! 2. Section scan: an independent pass over the same text for section blocks.
//! 3. Assembly: areas first, then sections, in a single ordered sequence.
//!
//! Text matching neither pattern is ignored. No cross-validation happens between the two
//! scans, so a section may name a parent that no area line declared.

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::catalog::{parse_literal, PatternCatalog};
use crate::entry::Entry;
use crate::error::{MapError, Result};

/// The structured form of a linker map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub map: Vec<Entry>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

pub struct MapDocumentBuilder<C: PatternCatalog> {
    catalog: C,
}

impl<C: PatternCatalog> MapDocumentBuilder<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Scans `text` for top-level areas.
    pub fn extract_areas(&self, text: &str) -> Result<Vec<Entry>> {
        let mut areas = Vec::new();
        for caps in self.catalog.area_pattern().captures_iter(text) {
            let entry = Entry::area(
                self.group(&caps, "id")?,
                parse_literal(self.group(&caps, "address")?)?,
                parse_literal(self.group(&caps, "size")?)?,
            );
            tracing::trace!(
                "area {} at {:#x} ({:#x} bytes)",
                entry.identifier(),
                entry.address(),
                entry.size()
            );
            areas.push(entry);
        }
        tracing::debug!("{}: found {} areas", self.catalog.name(), areas.len());
        Ok(areas)
    }

    /// Scans `text` for sections. Independent of `extract_areas`.
    pub fn extract_sections(&self, text: &str) -> Result<Vec<Entry>> {
        let mut sections = Vec::new();
        for caps in self.catalog.section_pattern().captures_iter(text) {
            let entry = Entry::section(
                self.group(&caps, "parent")?,
                self.group(&caps, "id")?,
                parse_literal(self.group(&caps, "address")?)?,
                parse_literal(self.group(&caps, "size")?)?,
            );
            tracing::trace!(
                "section {} in {} at {:#x} ({:#x} bytes)",
                entry.identifier(),
                entry.parent().unwrap_or_default(),
                entry.address(),
                entry.size()
            );
            sections.push(entry);
        }
        tracing::debug!("{}: found {} sections", self.catalog.name(), sections.len());
        Ok(sections)
    }

    /// Concatenates areas and sections into a document, in that order.
    pub fn assemble(&self, areas: Vec<Entry>, sections: Vec<Entry>) -> Document {
        let mut map = areas;
        map.extend(sections);
        Document { map }
    }

    /// Runs both scans over `text` and assembles the result.
    pub fn build(&self, text: &str) -> Result<Document> {
        let areas = self.extract_areas(text)?;
        let sections = self.extract_sections(text)?;
        Ok(self.assemble(areas, sections))
    }

    fn group<'t>(&self, caps: &Captures<'t>, name: &'static str) -> Result<&'t str> {
        caps.name(name)
            .map(|m| m.as_str())
            .ok_or_else(|| MapError::MissingGroup {
                catalog: self.catalog.name(),
                group: name,
            })
    }
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
