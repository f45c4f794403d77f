use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every note file under `root` with the given extension.
///
/// Results come back sorted by path so the downstream fold processes notes in
/// a fixed order, which pins category ids across runs. Entries that cannot be
/// read are logged and skipped; they never abort the scan.
pub fn find_notes(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("error accessing path: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect();

    paths.sort();
    paths
}
