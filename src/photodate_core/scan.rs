use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list every regular file under `root`.
///
/// The walk is lazy and does not follow symlinks. Entries that cannot be read
/// (permission errors, files vanishing mid-walk) are logged and skipped so a
/// bad subtree never ends the enumeration.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}
