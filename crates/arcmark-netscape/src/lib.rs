//! Arcmark Netscape Output
//!
//! Renders classified sidebar content as a Netscape Bookmark File — the
//! de facto `<DL>`/`<DT>`/`<A>` HTML structure browsers use for bookmark
//! import and export.

mod document;
mod error;
pub mod escape;

pub use document::render;
pub use error::RenderError;

pub type Result<T> = std::result::Result<T, RenderError>;
