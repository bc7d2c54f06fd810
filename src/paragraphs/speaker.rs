//! Speakers and the per-document speaker registry.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// A speaker identified by the exact label printed in the transcript, plus
/// the set of pages the label was seen on.
#[derive(Debug, Clone, Serialize)]
pub struct Speaker {
    /// The label as printed, e.g. `"MR. SMITH:"`.
    pub label: String,
    /// Pages on which this label appeared.
    pub pages: BTreeSet<u32>,
}

impl Speaker {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pages: BTreeSet::new(),
        }
    }
}

/// Per-document registry of speakers, keyed by exact label.
///
/// Entries are created on first sighting and updated in place afterwards;
/// they are never deleted. Iteration follows first-sighting order.
#[derive(Debug, Clone, Default)]
pub struct SpeakerRegistry {
    speakers: IndexMap<String, Speaker>,
}

impl SpeakerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sighting of `label` on `page`, creating the entry if this is
    /// the first sighting. Returns the registry key (the label itself).
    pub fn record(&mut self, label: &str, page: u32) -> &str {
        let entry = self
            .speakers
            .entry(label.to_string())
            .or_insert_with(|| Speaker::new(label));
        entry.pages.insert(page);
        &entry.label
    }

    /// Look up a speaker by exact label.
    pub fn get(&self, label: &str) -> Option<&Speaker> {
        self.speakers.get(label)
    }

    /// Number of distinct speakers.
    pub fn len(&self) -> usize {
        self.speakers.len()
    }

    /// True when no speaker has been recorded.
    pub fn is_empty(&self) -> bool {
        self.speakers.is_empty()
    }

    /// Iterate speakers in first-sighting order.
    pub fn iter(&self) -> impl Iterator<Item = &Speaker> {
        self.speakers.values()
    }
}
