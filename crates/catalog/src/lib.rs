//! Snippet catalog: the exported snippet records and what tools do with them.
//!
//! Records are the JSON export of the gallery's data tables. The catalog treats `css` and
//! `tailwind` as opaque text: it looks records up, lists and searches them, and appends
//! them to a project file.

#![forbid(unsafe_code)]

mod output;
mod snippet;
mod store;

pub use output::{AddOutcome, ExportFormat, add_to_project, export_header, render_export};
pub use snippet::{Category, Snippet};
pub use store::Catalog;
