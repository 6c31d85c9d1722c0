//! The read-only project table behind the modal dialogs.
//!
//! Content is supplied by the front-end; this module only owns the lookup.
//! Cards are resolved by their displayed heading text, so the lookup is
//! case-insensitive and whitespace-tolerant.

use fnv::FnvHashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectEntry {
    /// Display title; also the lookup key.
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub source_url: Option<String>,
    pub demo_url: Option<String>,
    pub store_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProjectTable {
    by_key: FnvHashMap<String, ProjectEntry>,
}

impl ProjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ProjectEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    pub fn insert(&mut self, entry: ProjectEntry) {
        self.by_key.insert(entry.title.to_lowercase(), entry);
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Resolve a card's heading text. A miss is a non-fatal no-op for the
    /// caller, so it is simply `None`.
    pub fn resolve(&self, shown_title: &str) -> Option<&ProjectEntry> {
        self.by_key.get(&shown_title.trim().to_lowercase())
    }
}
