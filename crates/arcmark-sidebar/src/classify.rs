//! Single-pass classification of raw sidebar records
//!
//! Records are heterogeneous: the same record can carry both a tab payload
//! and folder metadata, so the tab and folder checks run independently on
//! every record. Required fields are enforced fail-fast; one malformed
//! record aborts the whole run rather than being skipped.

use serde_json::{Map, Value};

use crate::error::SidebarError;
use crate::model::{Folder, TabEntry, TabRegistry};
use crate::Result;

/// Classifier output for one run.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Folders in sidebar order.
    pub folders: Vec<Folder>,
    /// Every tab seen, keyed by id.
    pub tabs: TabRegistry,
    /// Whether any record qualified as a tab or folder at all.
    pub found: bool,
}

/// Walk the raw records once, building the folder list and tab registry.
pub fn classify(records: &[Map<String, Value>]) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    for record in records {
        if let Some(tab) = record.get("data").and_then(|data| data.get("tab")) {
            let id = require_str(record.get("id"), "id")?;
            let title = require_str(tab.get("savedTitle"), "savedTitle")?;
            let url = require_str(tab.get("savedURL"), "savedURL")?;
            catalog.tabs.insert(TabEntry { id, title, url });
            catalog.found = true;
        }

        // Every record must carry a 'title' key; a null or empty value just
        // means the record is not a folder.
        let title = record
            .get("title")
            .ok_or(SidebarError::MissingField("title"))?;
        if let Some(name) = folder_name(title) {
            let children = require_children(record)?;
            catalog.folders.push(Folder {
                name: name.to_string(),
                children,
            });
            catalog.found = true;
        }
    }

    tracing::debug!(
        folders = catalog.folders.len(),
        tabs = catalog.tabs.len(),
        "Classified sidebar records"
    );

    Ok(catalog)
}

/// Non-empty string titles mark a record as a folder.
fn folder_name(title: &Value) -> Option<&str> {
    title.as_str().filter(|name| !name.is_empty())
}

fn require_str(value: Option<&Value>, field: &'static str) -> Result<String> {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(SidebarError::MissingField(field))
}

fn require_children(record: &Map<String, Value>) -> Result<Vec<String>> {
    let ids = record
        .get("childrenIds")
        .and_then(Value::as_array)
        .ok_or(SidebarError::MissingField("childrenIds"))?;

    ids.iter()
        .map(|id| {
            id.as_str().map(str::to_string).ok_or_else(|| {
                SidebarError::MalformedSource(format!("non-string child id: {id}"))
            })
        })
        .collect()
}
