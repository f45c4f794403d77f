//! # Note Graph
//!
//! Graph model for a vault of interlinked notes, plus the fold that builds it
//! and the serializer that makes it embeddable.
//!
//! ## Architecture
//!
//! ```text
//! NoteContent[] (per note, from notegraph-extract)
//!     │
//!     ├──> Graph Assembler
//!     │      ├─ Node per note (id = vault-relative path)
//!     │      ├─ Link per wikilink target (resolved, may dangle)
//!     │      └─ Category per note directory (first-seen order)
//!     │
//!     ├──> Note Graph
//!     │      ├─ nodes / links in processing order
//!     │      └─ categories in id order
//!     │
//!     └──> Graph Fragments
//!            └─ one escaped JS object literal per entity
//! ```
//!
//! The whole graph is built fresh for one run and held in memory; there is no
//! persistence beyond the optional JSON dump and no incremental update.

mod assembler;
mod categories;
mod error;
mod fragments;
mod types;

pub use assembler::GraphAssembler;
pub use categories::CategoryRegistry;
pub use error::{GraphError, Result};
pub use fragments::GraphFragments;
pub use types::{Category, Link, Node, NoteGraph};
