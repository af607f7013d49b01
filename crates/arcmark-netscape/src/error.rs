//! Render error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A folder references a tab id that is not in the registry — either it
    /// never existed, or an earlier folder already claimed it.
    #[error("Folder '{folder}' references unknown tab id '{id}'")]
    UnknownChild { folder: String, id: String },
}
