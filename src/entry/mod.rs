//! # Entry Data Model
//!
//! Defines the records the selector operates on and their JSON ingestion.
//!
//! An input file is an ordered array of entries. Each entry is either a
//! selectable item or a labeled group of further entries:
//!
//! ```json
//! [
//!   { "value": "apple", "displayValue": "Apple", "help": { "value": "A fruit" } },
//!   { "group": "Vegetables", "items": [ { "value": "carrot" } ] }
//! ]
//! ```
//!
//! A record carrying a `"group"` key is a group; the key's string value is
//! the group's display label. Anything else must carry `"value"` and is a
//! leaf item. The item-vs-group decision is made exactly once, here at
//! ingestion - downstream code only ever sees the typed [`Entry`] union.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A selectable leaf record.
///
/// `value` is the canonical identity: it is what search matches against,
/// what the selection event carries, and what the binary prints. The
/// optional `display_value` is an additional human-facing (and searchable)
/// label; the optional `help` text is surfaced on demand without selecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub value: String,
    #[serde(rename = "displayValue", skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<Help>,
}

/// Help text attached to an item, revealed by its help affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Help {
    pub value: String,
}

/// A labeled bundle of entries. Groups may nest, though in practice the
/// data only uses one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display label. In the wire format this is the `"group"` key, whose
    /// presence also marks the record as a group.
    #[serde(rename = "group")]
    pub label: String,
    #[serde(default)]
    pub items: Vec<Entry>,
}

/// An entry in the selector's input list: a leaf item or a group.
///
/// Untagged on the wire; the `"group"` key decides the variant. Serde tries
/// `Group` first so a record with both `"group"` and `"value"` classifies
/// as a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Group(Group),
    Item(Item),
}

impl Item {
    /// The label shown in the list row: `display_value` when present,
    /// otherwise `value`.
    pub fn label(&self) -> &str {
        self.display_value.as_deref().unwrap_or(&self.value)
    }
}

impl Entry {
    /// Count of selectable leaves under this entry (1 for an item).
    pub fn leaf_count(&self) -> usize {
        match self {
            Entry::Item(_) => 1,
            Entry::Group(g) => g.items.iter().map(Entry::leaf_count).sum(),
        }
    }
}

/// Parse an entry list from a JSON string.
///
/// A record that is neither a group nor an item (for example, an item
/// missing `value`) is a contract violation and fails the whole parse.
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(json).context("Failed to parse entry list")
}

/// Load an entry list from a JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entry file: {}", path.display()))?;
    parse_entries(&contents)
        .with_context(|| format!("Failed to parse entry file: {}", path.display()))
}
