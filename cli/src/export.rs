//! Export pipeline tail: render the catalog and write the output file,
//! or skip writing when nothing qualified.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use arcmark_sidebar::Catalog;

/// Outcome of an export run.
#[derive(Debug)]
pub enum Outcome {
    /// Bookmarks were rendered and written to this path.
    Written(PathBuf),
    /// No record qualified as a tab or folder; no file was created.
    NothingFound,
}

/// Render `catalog` and write it to `output`, overwriting any existing file.
pub fn run(mut catalog: Catalog, output: &Path, timestamp: i64) -> anyhow::Result<Outcome> {
    if !catalog.found {
        return Ok(Outcome::NothingFound);
    }

    let html = arcmark_netscape::render(&catalog.folders, &mut catalog.tabs, timestamp)?;
    fs::write(output, html)
        .with_context(|| format!("Failed to write bookmarks to '{}'", output.display()))?;

    tracing::info!(path = %output.display(), "Wrote bookmark export");
    Ok(Outcome::Written(output.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcmark_sidebar::{Folder, TabEntry};

    fn catalog_with_one_tab() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.folders.push(Folder {
            name: "Work".to_string(),
            children: vec!["t1".to_string()],
        });
        catalog.tabs.insert(TabEntry {
            id: "t1".to_string(),
            title: "Example".to_string(),
            url: "https://example.com".to_string(),
        });
        catalog.found = true;
        catalog
    }

    #[test]
    fn test_nothing_found_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");

        let outcome = run(Catalog::default(), &output, 1).unwrap();

        assert!(matches!(outcome, Outcome::NothingFound));
        assert!(!output.exists());
    }

    #[test]
    fn test_written_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        fs::write(&output, "stale").unwrap();

        let outcome = run(catalog_with_one_tab(), &output, 1).unwrap();

        assert!(matches!(outcome, Outcome::Written(p) if p == output));
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
        assert!(html.contains("https://example.com"));
        assert!(!html.contains("stale"));
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing-dir").join("out.html");

        assert!(run(catalog_with_one_tab(), &output, 1).is_err());
    }
}
