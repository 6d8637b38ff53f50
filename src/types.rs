/// Transient records produced by one scan, consumed by reporting and (under
/// `--apply`) by the filesystem mutations. Nothing here persists across runs.
use std::path::PathBuf;

/// A symlink whose expected canonical target is missing or not a plain file.
#[derive(Debug, Clone)]
pub struct BrokenLink {
    /// Raw target currently stored in the link, if it could be read.
    pub current: Option<PathBuf>,
    /// Canonical path that should exist next to the link.
    pub expected: PathBuf,
    /// The symlink itself.
    pub link: PathBuf,
}

/// A rename suppressed because its target is already taken.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// File that keeps its original name.
    pub source: PathBuf,
    /// Intended canonical path that was already claimed.
    pub target: PathBuf,
}

/// A same-directory rename of a real file to its canonical name.
#[derive(Debug, Clone)]
pub struct Rename {
    /// Current path of the file.
    pub from: PathBuf,
    /// Canonical path in the same directory.
    pub to: PathBuf,
}

/// A symlink rewritten to a relative canonical target.
#[derive(Debug, Clone)]
pub struct Retarget {
    /// The symlink that was rewritten.
    pub link: PathBuf,
    /// New relative target within the link's own directory.
    pub target: PathBuf,
}

/// What stage 1 did (or would do, in preview mode).
#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    /// Renames suppressed because the target existed or was already claimed.
    pub conflicts: Vec<Conflict>,
    /// Renames performed, in discovery order.
    pub renames: Vec<Rename>,
}

/// What stage 2 did (or would do, in preview mode).
#[derive(Debug, Default)]
pub struct RepairOutcome {
    /// Links left untouched because their canonical target is missing.
    pub broken: Vec<BrokenLink>,
    /// Links that already pointed at the correct relative target.
    pub correct: usize,
    /// Links rewritten to the canonical relative target.
    pub retargets: Vec<Retarget>,
}
