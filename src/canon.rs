//! Canonical 6-digit name derivation from dataset file names.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of decimal digits in a file name.
static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// The only extension this tool touches. Matched literally and
/// case-sensitively, so `.JPG` entries are never visited.
pub const JPG_SUFFIX: &str = ".jpg";

/// Derive the canonical 6-digit stem from a file name.
///
/// Every digit run in the name is concatenated in order of appearance
/// (`v0_63` -> `063`), read as an unsigned integer, and zero-padded to six
/// digits (`000063`). Numbers wider than six digits keep their full width.
/// Returns `None` when the name contains no digits.
pub fn canonical_stem(name: &str) -> Option<String> {
    let digits: String = DIGIT_RUNS.find_iter(name).map(|m| m.as_str()).collect();
    if digits.is_empty() {
        return None;
    }
    // Stripping leading zeros then padding back to six is the same as parsing
    // and reformatting, without a fixed-width integer to overflow.
    let significant = digits.trim_start_matches('0');
    let value = if significant.is_empty() { "0" } else { significant };
    Some(format!("{value:0>6}"))
}

/// Canonical file name for a dataset entry: canonical stem plus the `.jpg`
/// suffix. `None` when the name has no digits.
pub fn canonical_file_name(name: &str) -> Option<String> {
    canonical_stem(name).map(|stem| format!("{stem}{JPG_SUFFIX}"))
}
