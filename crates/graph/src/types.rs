use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One note in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Vault-relative path of the note; unique within one run
    pub id: String,

    /// Display title, empty if the note has no level-1 heading
    pub name: String,

    /// Index into the graph's category list
    pub category: usize,

    /// Newline-joined body text, may be empty
    pub value: String,

    /// Raw link targets as written in the note, unresolved
    pub links: Vec<String>,
}

/// A directed edge between two notes.
///
/// `target` is resolved textually from the raw wikilink target and is never
/// checked against the node set — dangling edges are permitted by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
}

/// A note grouping, keyed by directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Grouping key (the note's parent directory)
    pub name: String,

    /// Dense 0-based id; order equals first appearance in the run
    pub id: usize,
}

/// The assembled graph for one vault
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
}

impl NoteGraph {
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Write the graph as pretty-printed JSON, for debugging and tooling
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
