//! Stage 2: point `.jpg` symlinks at the canonical file in their directory.

use std::path::{Path, PathBuf};

use crate::canon;
use crate::types::{BrokenLink, RepairOutcome, Retarget};
use crate::walk;

/// Scan `.jpg` symlinks under `root` and retarget each at the canonical real
/// file named after the link's own digits, in the link's own directory.
///
/// A link whose canonical target is missing (or is not a plain file) is
/// reported broken and left untouched. `preview` logs intended retargets
/// without touching the filesystem. Per-entry failures are logged and
/// skipped, never fatal.
pub fn repair_symlinks(root: &Path, preview: bool) -> RepairOutcome {
    let mut outcome = RepairOutcome::default();

    for result in walk::jpg_entries(root) {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                println!("[ERROR][LINK] {}: {e}", e.path().unwrap_or(root).display());
                continue;
            },
        };
        if !entry.file_type().is_symlink() {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // The link's own name decides the target, never its current contents.
        let Some(canonical_name) = canon::canonical_file_name(name) else {
            println!("[WARN][LINK] no digits in symlink name, skip: {}", path.display());
            continue;
        };
        let expected = path.with_file_name(&canonical_name);
        // An unreadable link still has a well-defined expected target.
        let current = std::fs::read_link(path).ok();

        if !is_plain_file(&expected) {
            let shown = current
                .as_ref()
                .map_or_else(|| "<unreadable>".to_string(), |t| t.display().to_string());
            println!(
                "[BROKEN][LINK] {} -> {shown} (missing {})",
                path.display(),
                expected.display()
            );
            outcome.broken.push(BrokenLink {
                current,
                expected,
                link: path.to_path_buf(),
            });
            continue;
        }

        // Target lives in the link's own directory, so the relative path is
        // just the canonical file name.
        let target = PathBuf::from(&canonical_name);
        if current.as_deref() == Some(target.as_path()) {
            outcome.correct += 1;
            continue;
        }
        let retarget = Retarget {
            link: path.to_path_buf(),
            target,
        };
        println!(
            "[RETARGET][LINK] {} -> {}",
            retarget.link.display(),
            retarget.target.display()
        );
        if !preview {
            if let Err(e) = replace_link(&retarget.link, &retarget.target) {
                println!("[ERROR][LINK] {}: {e}", retarget.link.display());
                continue;
            }
        }
        outcome.retargets.push(retarget);
    }

    outcome
}

/// Whether `path` is a regular file and not itself a symlink. Exactly one
/// level of indirection is honored; a canonical entry that is itself a link
/// is reported broken rather than followed.
fn is_plain_file(path: &Path) -> bool {
    path.symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_file())
}

/// Replace `link` with a fresh symlink to `target` (remove then recreate).
fn replace_link(link: &Path, target: &Path) -> std::io::Result<()> {
    std::fs::remove_file(link)?;
    std::os::unix::fs::symlink(target, link)
}
