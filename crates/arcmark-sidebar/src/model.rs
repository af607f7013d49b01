//! In-memory bookmark model built from sidebar records

use serde::{Deserialize, Serialize};

/// A pinned tab with the page metadata Arc saved for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabEntry {
    /// Sidebar item identifier, unique within a run
    pub id: String,
    /// Saved page title
    pub title: String,
    /// Saved page URL (may be empty)
    pub url: String,
}

/// A sidebar folder referencing its children by id.
///
/// Folders own no tabs directly; `children` holds ids resolved against the
/// [`TabRegistry`] at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    /// Child ids in sidebar order; this order determines render order
    pub children: Vec<String>,
}

/// Ordered id -> tab mapping.
///
/// Entries are removed as folders claim them, so whatever is left after all
/// folders have rendered is exactly the set of unfiled tabs, still in
/// sidebar order.
#[derive(Debug, Default)]
pub struct TabRegistry {
    entries: Vec<TabEntry>,
}

impl TabRegistry {
    /// Register a tab. A duplicate id replaces the earlier entry in place,
    /// keeping its original position.
    pub fn insert(&mut self, tab: TabEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|t| t.id == tab.id) {
            *existing = tab;
        } else {
            self.entries.push(tab);
        }
    }

    /// Remove and return the tab with the given id, if present.
    pub fn take(&mut self, id: &str) -> Option<TabEntry> {
        let idx = self.entries.iter().position(|tab| tab.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and yield all remaining tabs in insertion order.
    pub fn drain(&mut self) -> impl Iterator<Item = TabEntry> + '_ {
        self.entries.drain(..)
    }
}
