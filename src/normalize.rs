//! Stage 1: rename real `.jpg` files to canonical 6-digit names.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::canon;
use crate::types::{Conflict, NormalizeOutcome, Rename};
use crate::walk;

/// Scan real (non-symlink) `.jpg` files under `root` and rename each to its
/// canonical name in the same directory.
///
/// Renames are collected during the scan and applied afterwards in discovery
/// order; `preview` logs them without touching the filesystem. A file whose
/// intended target is already taken is reported as a conflict and keeps its
/// original name. Per-entry failures are logged and skipped, never fatal.
pub fn normalize_real_files(root: &Path, preview: bool) -> NormalizeOutcome {
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut conflicts = Vec::new();
    let mut planned = Vec::new();

    for result in walk::jpg_entries(root) {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                println!("[ERROR][REAL] {}: {e}", e.path().unwrap_or(root).display());
                continue;
            },
        };
        if entry.file_type().is_symlink() || !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(new_name) = canon::canonical_file_name(name) else {
            println!("[WARN][REAL] no digits in file name, skip: {}", path.display());
            continue;
        };
        if name == new_name {
            // Already normalized.
            continue;
        }
        let new_path = path.with_file_name(&new_name);
        // The target counts as taken if any entry (a dangling symlink
        // included) already sits there, or an earlier queued rename claimed
        // it. First file scanned wins; the walk order is name-sorted.
        if new_path.symlink_metadata().is_ok() || claimed.contains(&new_path) {
            let conflict = Conflict {
                source: path.to_path_buf(),
                target: new_path,
            };
            println!(
                "[CONFLICT][REAL] {} -> {} (target exists, skip rename)",
                conflict.source.display(),
                conflict.target.display()
            );
            conflicts.push(conflict);
            continue;
        }
        claimed.insert(new_path.clone());
        planned.push(Rename {
            from: path.to_path_buf(),
            to: new_path,
        });
    }

    let mut renames = Vec::new();
    for rename in planned {
        println!(
            "[RENAME][REAL] {} -> {}",
            rename.from.display(),
            rename.to.display()
        );
        if !preview {
            if let Err(e) = std::fs::rename(&rename.from, &rename.to) {
                println!("[ERROR][REAL] {}: {e}", rename.from.display());
                continue;
            }
        }
        renames.push(rename);
    }

    NormalizeOutcome { conflicts, renames }
}
