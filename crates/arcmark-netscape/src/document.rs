//! Netscape Bookmark File rendering
//!
//! Assembles the fixed header/footer around one `<DL>` block: folders first,
//! each with a nested `<DL>` of its resolved children, then every tab no
//! folder claimed as a top-level entry.

use arcmark_sidebar::{Folder, TabEntry, TabRegistry};

use crate::error::RenderError;
use crate::escape;
use crate::Result;

const DOCUMENT_TITLE: &str = "Arc Bookmarks";

/// Render the bookmark document.
///
/// Every child id a folder lists is removed from the registry as it is
/// processed, so whatever remains afterwards is emitted as unfiled top-level
/// entries, in sidebar order. Tabs with an empty URL produce no anchor but
/// are still consumed. The single `timestamp` (seconds since epoch) is
/// reused for every ADD_DATE and LAST_MODIFIED attribute.
pub fn render(folders: &[Folder], tabs: &mut TabRegistry, timestamp: i64) -> Result<String> {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>".to_string(),
        String::new(),
        r#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">"#.to_string(),
        format!("<Title>{DOCUMENT_TITLE}</Title>"),
        format!("<h1>{DOCUMENT_TITLE}</h1>"),
        "<DL><p>".to_string(),
    ];

    for folder in folders {
        lines.push(format!(
            "    <DT><H3 ADD_DATE=\"{timestamp}\">{}</H3>",
            escape::text(&folder.name)
        ));
        lines.push("    <DL><p>".to_string());

        for id in &folder.children {
            let tab = tabs.take(id).ok_or_else(|| RenderError::UnknownChild {
                folder: folder.name.clone(),
                id: id.clone(),
            })?;
            if !tab.url.is_empty() {
                lines.push(anchor(&tab, timestamp, 8));
            }
        }

        lines.push("    </DL><p>".to_string());
    }

    for tab in tabs.drain() {
        if !tab.url.is_empty() {
            lines.push(anchor(&tab, timestamp, 4));
        }
    }

    lines.push("</DL><p>".to_string());

    tracing::debug!(lines = lines.len(), "Rendered bookmark document");
    Ok(lines.join("\n"))
}

fn anchor(tab: &TabEntry, timestamp: i64, indent: usize) -> String {
    format!(
        "{:indent$}<DT><A HREF=\"{}\" ADD_DATE=\"{timestamp}\" LAST_MODIFIED=\"{timestamp}\">{}</A>",
        "",
        escape::url(&tab.url),
        escape::text(&tab.title),
    )
}
