use comrak::nodes::{AstNode, NodeHeading, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Flat content extracted from one note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteContent {
    /// Text of the first level-1 heading, empty if the note has none
    pub title: String,

    /// Every text run in document order, joined with newlines
    pub body: String,

    /// Raw wikilink targets in first-encountered order, duplicates preserved
    pub links: Vec<String>,
}

/// Parse a note and extract its title, body, and outbound link targets.
///
/// The walk is a single pre-order traversal, so body fragments come out in the
/// document's natural reading order. Only the first level-1 heading sets the
/// title; later ones are ordinary content. Targets are kept verbatim — no
/// normalization, no dedup — so the assembler sees exactly what the note wrote.
#[must_use]
pub fn parse_note(source: &str) -> NoteContent {
    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.wikilinks_title_after_pipe = true;

    let root = parse_document(&arena, source, &options);
    extract_content(root)
}

fn extract_content<'a>(root: &'a AstNode<'a>) -> NoteContent {
    let mut title = String::new();
    let mut fragments: Vec<String> = Vec::new();
    let mut links: Vec<String> = Vec::new();

    for node in root.descendants() {
        match &node.data.borrow().value {
            NodeValue::Text(text) => fragments.push(text.clone()),

            NodeValue::Heading(NodeHeading { level: 1, .. }) => {
                if title.is_empty() {
                    title = heading_text(node);
                }
            }

            NodeValue::WikiLink(link) => links.push(link.url.clone()),

            _ => {}
        }
    }

    NoteContent {
        title,
        body: fragments.join("\n"),
        links,
    }
}

/// Concatenate the direct text children of a heading, in child order.
///
/// Nested formatting (emphasis, code spans) is dropped rather than recursed
/// into, so `# *One*` yields an empty title while `# One` yields "One".
fn heading_text<'a>(heading: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in heading.children() {
        if let NodeValue::Text(t) = &child.data.borrow().value {
            text.push_str(t);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_from_first_heading() {
        let content = parse_note("# One\n\nsome text\n\n# Two\n");
        assert_eq!(content.title, "One");
    }

    #[test]
    fn later_headings_do_not_change_title() {
        let a = parse_note("# One\n\n# Second\n");
        let b = parse_note("# One\n\n# Changed\n");
        assert_eq!(a.title, b.title);
        assert_eq!(a.title, "One");
    }

    #[test]
    fn no_heading_means_empty_title() {
        let content = parse_note("just a paragraph\n\n## not level one\n");
        assert_eq!(content.title, "");
    }

    #[test]
    fn title_ignores_nested_formatting() {
        let content = parse_note("# Intro *emphasized*\n");
        // Only the direct text child counts; the emphasis subtree is dropped.
        assert_eq!(content.title, "Intro ");
    }

    #[test]
    fn body_joins_text_runs_in_document_order() {
        let content = parse_note("# Title\n\nfirst line\n\nsecond line\n");
        assert_eq!(content.body, "Title\nfirst line\nsecond line");
    }

    #[test]
    fn empty_note_produces_empty_content() {
        assert_eq!(parse_note(""), NoteContent::default());
    }

    #[test]
    fn test_wikilink_targets_are_verbatim() {
        let content = parse_note("See [[Foo Bar]] and [[baz]].\n");
        assert_eq!(content.links, vec!["Foo Bar", "baz"]);
    }

    #[test]
    fn duplicate_links_are_preserved_in_order() {
        let content = parse_note("[[a]] [[b]] [[a]]\n");
        assert_eq!(content.links, vec!["a", "b", "a"]);
    }

    #[test]
    fn link_titles_do_not_replace_targets() {
        let content = parse_note("[[target|display text]]\n");
        assert_eq!(content.links, vec!["target"]);
    }

    #[test]
    fn note_with_links_only_has_empty_title_and_link_labels_in_body() {
        let content = parse_note("[[alpha]]\n");
        assert_eq!(content.title, "");
        assert_eq!(content.links, vec!["alpha"]);
        // The link label is itself a text run and lands in the body.
        assert_eq!(content.body, "alpha");
    }
}
