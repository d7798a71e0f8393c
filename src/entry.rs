//! Map entries.
//!
//! An `Entry` is either a top-level memory area or an output section nested under one.

use serde::{Deserialize, Serialize};

/// Which kind of record an `Entry` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Area,
    Section,
}

/// A single record of the output document.
///
/// Fields are declared in the key order of the emitted document. `parent` is a textual
/// back-pointer to the enclosing area and is only present on sections; it is not checked
/// against the areas that were actually found. Loading a document rejects areas that carry a
/// `parent` and sections that lack one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct Entry {
    address: u64,
    /// Reserved for section attributes. Nothing populates it yet.
    flags: Option<String>,
    #[serde(rename = "id")]
    identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,
    size: u64,
    #[serde(rename = "type")]
    entry_type: EntryType,
}

impl Entry {
    /// Creates a top-level area entry.
    pub fn area(identifier: &str, address: u64, size: u64) -> Self {
        Self {
            address,
            flags: None,
            identifier: identifier.to_string(),
            parent: None,
            size,
            entry_type: EntryType::Area,
        }
    }

    /// Creates a section entry nested under the area named `parent`.
    pub fn section(parent: &str, identifier: &str, address: u64, size: u64) -> Self {
        Self {
            address,
            flags: None,
            identifier: identifier.to_string(),
            parent: Some(parent.to_string()),
            size,
            entry_type: EntryType::Section,
        }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn flags(&self) -> Option<&str> {
        self.flags.as_deref()
    }
}

#[derive(Deserialize)]
struct RawEntry {
    address: u64,
    #[serde(default)]
    flags: Option<String>,
    id: String,
    #[serde(default)]
    parent: Option<String>,
    size: u64,
    #[serde(rename = "type")]
    entry_type: EntryType,
}

impl TryFrom<RawEntry> for Entry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match (raw.entry_type, &raw.parent) {
            (EntryType::Area, Some(parent)) => {
                return Err(format!("area `{}` has a parent `{parent}`", raw.id))
            }
            (EntryType::Section, None) => {
                return Err(format!("section `{}` has no parent", raw.id))
            }
            _ => {}
        }
        Ok(Self {
            address: raw.address,
            flags: raw.flags,
            identifier: raw.id,
            parent: raw.parent,
            size: raw.size,
            entry_type: raw.entry_type,
        })
    }
}

#[cfg(test)]
#[path = "tests/entry.rs"]
mod tests;
