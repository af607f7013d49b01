//! Arcmark Sidebar Access
//!
//! Reads Arc's `StorableSidebar.json`, extracts the pinned-tab container,
//! and classifies its records into folders and tab entries.
//!
//! The vendor schema is undocumented; this crate targets the single layout
//! Arc writes today (`sidebar.containers[1].items`) and fails fast on
//! anything else.

mod classify;
mod error;
mod model;
mod source;

pub use classify::{classify, Catalog};
pub use error::SidebarError;
pub use model::{Folder, TabEntry, TabRegistry};
pub use source::{default_path, load_items};

pub type Result<T> = std::result::Result<T, SidebarError>;
