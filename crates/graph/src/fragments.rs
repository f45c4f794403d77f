use crate::types::NoteGraph;

/// Serialized graph: one JS object literal per entity, ready to splice into
/// the visualization template.
///
/// Every free-text field is escaped before embedding, so no fragment can
/// terminate the surrounding string literal early or inject raw newlines into
/// the page source. The template layer does no further escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphFragments {
    pub nodes: Vec<String>,
    pub links: Vec<String>,
    pub categories: Vec<String>,
}

impl GraphFragments {
    #[must_use]
    pub fn from_graph(graph: &NoteGraph) -> Self {
        Self {
            nodes: graph
                .nodes
                .iter()
                .map(|node| {
                    format!(
                        r#"{{ id: "{}", name: "{}", category: {}, value: "{}" }}"#,
                        escape_literal(&node.id),
                        escape_literal(&node.name),
                        node.category,
                        escape_literal(&node.value),
                    )
                })
                .collect(),
            links: graph
                .links
                .iter()
                .map(|link| {
                    format!(
                        r#"{{ source: "{}", target: "{}" }}"#,
                        escape_literal(&link.source),
                        escape_literal(&link.target),
                    )
                })
                .collect(),
            categories: graph
                .categories
                .iter()
                .map(|category| format!(r#"{{ name: "{}" }}"#, escape_literal(&category.name)))
                .collect(),
        }
    }
}

/// Escape free text for embedding in a double-quoted JS string literal.
///
/// Backslash must go first so the escapes introduced for the other characters
/// are not themselves re-escaped.
fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
