//! Shared directory walk for `.jpg` entries.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::canon::JPG_SUFFIX;

/// Walk every entry under `root` whose name ends in the literal `.jpg` suffix.
///
/// Entries are visited in name-sorted order so first-come-first-served
/// conflict resolution is deterministic across filesystems. Walk errors are
/// passed through for the caller to report per entry.
pub fn jpg_entries(root: &Path) -> impl Iterator<Item = Result<DirEntry, walkdir::Error>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter(|result| match result {
            Ok(entry) => entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(JPG_SUFFIX)),
            Err(_) => true,
        })
}
