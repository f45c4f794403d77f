use crate::categories::CategoryRegistry;
use crate::types::{Link, Node, NoteGraph};
use notegraph_extract::NoteContent;
use std::path::Path;

const DEFAULT_EXTENSION: &str = "md";

/// Folds per-note extraction results into one [`NoteGraph`].
///
/// Notes are added one at a time; node and link order is insertion order, and
/// category ids follow the order in which note directories are first seen. The
/// caller is responsible for feeding notes in a fixed (sorted) order when
/// reproducible category ids across runs matter.
pub struct GraphAssembler {
    extension: String,
    registry: CategoryRegistry,
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl GraphAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }

    /// Use a different note file extension for link-target resolution
    #[must_use]
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            registry: CategoryRegistry::new(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add one note to the graph.
    ///
    /// `path` becomes the node id and must be unique within the run; its parent
    /// directory is the grouping key. Every raw link target produces one edge,
    /// resolved textually — no filesystem lookup, dangling targets allowed.
    pub fn add_note(&mut self, path: &str, content: NoteContent) {
        let category = self.registry.assign(&grouping_key(path));

        for target in &content.links {
            self.links.push(Link {
                source: path.to_string(),
                target: self.resolve_target(target),
            });
        }

        self.nodes.push(Node {
            id: path.to_string(),
            name: content.title,
            category,
            value: content.body,
            links: content.links,
        });
    }

    /// Finish the fold and hand back the assembled graph
    #[must_use]
    pub fn finish(self) -> NoteGraph {
        let graph = NoteGraph {
            nodes: self.nodes,
            links: self.links,
            categories: self.registry.into_categories(),
        };

        log::info!(
            "Assembled note graph: {} nodes, {} links, {} categories",
            graph.node_count(),
            graph.link_count(),
            graph.category_count()
        );

        graph
    }

    /// Append the note extension to a raw wikilink target
    fn resolve_target(&self, raw: &str) -> String {
        format!("{raw}.{}", self.extension)
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory portion of a note path; `.` for vault-root notes
fn grouping_key(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}
