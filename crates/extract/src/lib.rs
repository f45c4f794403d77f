//! # Note Content Extraction
//!
//! Turns raw markdown notes into the flat content a graph needs: a title, a
//! body, and the outbound wikilink targets.
//!
//! ## Architecture
//!
//! ```text
//! &str (raw note)
//!     │
//!     ├──> comrak (arena AST, wikilink extension)
//!     │
//!     └──> single pre-order walk
//!            ├─ Text      -> body fragment (document order)
//!            ├─ Heading   -> first level-1 heading sets the title
//!            ├─ WikiLink  -> raw target, verbatim
//!            └─ other     -> ignored
//! ```
//!
//! Extraction is a pure function of the note text: a note with no heading, no
//! text, and no links produces empty fields, never an error.

mod content;

pub use content::{parse_note, NoteContent};
