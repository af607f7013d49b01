//! Locating and loading the Arc sidebar state file
//!
//! Arc keeps the whole sidebar (spaces, folders, pinned tabs) in one JSON
//! document. The pinned-tab container sits at a fixed position inside
//! `sidebar.containers`; that positional contract lives in a single constant
//! here so a vendor schema shift is a one-line change.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SidebarError;
use crate::Result;

/// Location of the sidebar state file relative to the user's home directory.
const SIDEBAR_RELATIVE_PATH: &str = "Library/Application Support/Arc/StorableSidebar.json";

/// Index of the pinned-tab container within `sidebar.containers`.
const PINNED_CONTAINER_INDEX: usize = 1;

#[derive(Debug, Deserialize)]
struct StorableSidebar {
    sidebar: SidebarState,
}

#[derive(Debug, Deserialize)]
struct SidebarState {
    containers: Vec<Value>,
}

/// Default on-disk location of Arc's sidebar state.
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SidebarError::NoHomeDir)?;
    Ok(home.join(SIDEBAR_RELATIVE_PATH))
}

/// Read and parse the sidebar file, returning the raw records of the
/// pinned-tab container.
///
/// Only object-typed entries are kept; stray scalars in the items array are
/// silently dropped.
pub fn load_items(path: &Path) -> Result<Vec<Map<String, Value>>> {
    if !path.exists() {
        return Err(SidebarError::SourceNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let doc: StorableSidebar = serde_json::from_str(&raw)?;
    let items = pinned_items(doc.sidebar)?;

    tracing::debug!(count = items.len(), "Loaded sidebar records");
    Ok(items)
}

fn pinned_items(sidebar: SidebarState) -> Result<Vec<Map<String, Value>>> {
    let container = sidebar
        .containers
        .into_iter()
        .nth(PINNED_CONTAINER_INDEX)
        .ok_or_else(|| {
            SidebarError::MalformedSource(format!(
                "sidebar.containers has no index {PINNED_CONTAINER_INDEX}"
            ))
        })?;

    let items = match container {
        Value::Object(mut map) => map.remove("items").ok_or_else(|| {
            SidebarError::MalformedSource("pinned container has no 'items' array".to_string())
        })?,
        _ => {
            return Err(SidebarError::MalformedSource(
                "pinned container is not an object".to_string(),
            ))
        }
    };

    let Value::Array(items) = items else {
        return Err(SidebarError::MalformedSource(
            "'items' is not an array".to_string(),
        ));
    };

    Ok(items
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_sidebar(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("StorableSidebar.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = load_items(&path).unwrap_err();
        assert!(matches!(err, SidebarError::SourceNotFound(p) if p == path));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let (_dir, path) = write_sidebar("{not json");
        assert!(matches!(
            load_items(&path).unwrap_err(),
            SidebarError::Json(_)
        ));
    }

    #[test]
    fn test_loads_pinned_container_items() {
        let (_dir, path) = write_sidebar(
            r#"{"sidebar": {"containers": [
                {"items": [{"id": "wrong-container"}]},
                {"items": [{"id": "t1"}, 42, "stray", {"id": "t2"}]}
            ]}}"#,
        );

        let items = load_items(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "t1");
        assert_eq!(items[1]["id"], "t2");
    }

    #[test]
    fn test_short_containers_array_is_malformed() {
        let (_dir, path) = write_sidebar(r#"{"sidebar": {"containers": [{"items": []}]}}"#);
        assert!(matches!(
            load_items(&path).unwrap_err(),
            SidebarError::MalformedSource(_)
        ));
    }

    #[test]
    fn test_container_without_items_is_malformed() {
        let (_dir, path) = write_sidebar(r#"{"sidebar": {"containers": [{}, {"topApps": []}]}}"#);
        assert!(matches!(
            load_items(&path).unwrap_err(),
            SidebarError::MalformedSource(_)
        ));
    }
}
