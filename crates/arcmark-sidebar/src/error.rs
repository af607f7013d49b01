//! Sidebar error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Cannot find Arc data at: '{}'", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Cannot resolve the user's home directory")]
    NoHomeDir,

    #[error("Failed to read sidebar state: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sidebar state is not the expected JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected sidebar structure: {0}")]
    MalformedSource(String),

    #[error("Sidebar record is missing required field '{0}'")]
    MissingField(&'static str),
}
