//! Leptos UI components for the viewer's markup.
//!
//! Every piece of HTML the browser inserts comes from here, so the
//! static renderer and the live page produce identical fragments.
//!
//! # Component Hierarchy
//!
//! ```text
//! #result
//! ├── RelationsTable
//! └── ScoreList
//! #result-container (while a search is in flight)
//! └── SearchPlaceholder
//! #trusted2
//! └── div.company (per record)
//!     └── TrustedCardBody
//! ReportDocument (static output only)
//! ```

mod document;
mod placeholder;
mod relations;
mod score;
mod trusted;

pub use document::ReportDocument;
pub use placeholder::SearchPlaceholder;
pub use relations::RelationsTable;
pub use score::ScoreList;
pub use trusted::{TRUSTED_TAG, TrustedCardBody, TrustedList};
