use notegraph_extract::parse_note;
use notegraph_graph::{GraphAssembler, NoteGraph};
use std::fs;
use std::path::{Path, PathBuf};

/// Read, parse, and fold every note into one graph.
///
/// Node ids are vault-relative paths. A note that cannot be read is logged and
/// skipped — it contributes no node, no links, and no category assignment —
/// and the run continues with the remaining notes. Each note is attempted
/// exactly once.
pub fn build_graph(root: &Path, paths: &[PathBuf], extension: &str) -> NoteGraph {
    let mut assembler = GraphAssembler::with_extension(extension);
    let mut skipped = 0usize;

    for path in paths {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };

        let id = note_id(root, path);
        assembler.add_note(&id, parse_note(&source));
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} unreadable note(s)");
    }

    assembler.finish()
}

/// Vault-relative path string for a note; falls back to the full path when the
/// note lies outside the scan root (symlinked vaults).
fn note_id(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
