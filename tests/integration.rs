use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn run_jpgcanon(root: &Path, apply: bool) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jpgcanon"));
    cmd.arg(root);
    if apply {
        cmd.arg("--apply");
    }
    cmd.output().unwrap()
}

/// A small messy dataset: one file to rename, one digit-less file, one stale
/// link whose canonical file appears after stage 1, one link that stays broken.
fn seed_tree(root: &Path) {
    fs::write(root.join("v0_63.jpg"), b"real pixels").unwrap();
    fs::write(root.join("photo.jpg"), b"no digits").unwrap();
    symlink("/stale/abs/000063.jpg", root.join("frame63.jpg")).unwrap();
    symlink("nowhere.jpg", root.join("v99.jpg")).unwrap();
}

#[test]
fn preview_logs_everything_but_mutates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let out = run_jpgcanon(dir.path(), false);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("[RENAME][REAL]"), "missing rename log:\n{stdout}");
    assert!(stdout.contains("[WARN][REAL]"), "missing no-digit warning:\n{stdout}");
    assert!(stdout.contains("Real file renames: 1"), "wrong counts:\n{stdout}");

    // Nothing on disk moved.
    assert!(dir.path().join("v0_63.jpg").is_file());
    assert!(!dir.path().join("000063.jpg").exists());
    assert_eq!(
        fs::read_link(dir.path().join("frame63.jpg")).unwrap(),
        PathBuf::from("/stale/abs/000063.jpg")
    );
}

#[test]
fn apply_normalizes_files_and_repairs_links() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let out = run_jpgcanon(dir.path(), true);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    // Stage 1 renamed the real file; the digit-less one kept its name.
    assert!(dir.path().join("000063.jpg").is_file());
    assert!(!dir.path().join("v0_63.jpg").exists());
    assert!(dir.path().join("photo.jpg").is_file());

    // Stage 2 retargeted the stale link at the freshly canonical file.
    assert_eq!(
        fs::read_link(dir.path().join("frame63.jpg")).unwrap(),
        PathBuf::from("000063.jpg")
    );

    // The link with no canonical file is reported, not touched.
    assert_eq!(
        fs::read_link(dir.path().join("v99.jpg")).unwrap(),
        PathBuf::from("nowhere.jpg")
    );
    assert!(stdout.contains("Broken symlinks (missing targets): 1"), "{stdout}");
    assert!(stdout.contains("Broken examples:"), "{stdout}");
    assert!(stdout.contains("expected"), "{stdout}");
}

#[test]
fn second_apply_run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    seed_tree(dir.path());

    let first = run_jpgcanon(dir.path(), true);
    assert!(first.status.success());

    let second = run_jpgcanon(dir.path(), true);
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);

    assert!(stdout.contains("Real file renames: 0"), "{stdout}");
    assert!(stdout.contains("Symlinks retargeted: 0"), "{stdout}");
    assert!(stdout.contains("Symlinks already correct: 1"), "{stdout}");
}

#[test]
fn preview_and_apply_classify_alike_when_canonical_files_exist() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("000005.jpg"), b"pixels").unwrap();
    symlink("/stale/000005.jpg", dir.path().join("v5.jpg")).unwrap();

    let preview = run_jpgcanon(dir.path(), false);
    let preview_out = String::from_utf8_lossy(&preview.stdout);
    assert!(preview_out.contains("Symlinks retargeted: 1"), "{preview_out}");
    assert_eq!(
        fs::read_link(dir.path().join("v5.jpg")).unwrap(),
        PathBuf::from("/stale/000005.jpg")
    );

    let apply = run_jpgcanon(dir.path(), true);
    let apply_out = String::from_utf8_lossy(&apply.stdout);
    assert!(apply_out.contains("Symlinks retargeted: 1"), "{apply_out}");
    assert_eq!(
        fs::read_link(dir.path().join("v5.jpg")).unwrap(),
        PathBuf::from("000005.jpg")
    );
}

#[test]
fn summary_lists_at_most_twenty_broken_link_examples() {
    let dir = tempfile::tempdir().unwrap();
    // 21 digit-named dangling links, none with a canonical real file.
    for n in 100..121 {
        symlink("nowhere.jpg", dir.path().join(format!("v{n}.jpg"))).unwrap();
    }

    let out = run_jpgcanon(dir.path(), false);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    // The count reports every broken link, the example listing caps at 20.
    assert!(stdout.contains("Broken symlinks (missing targets): 21"), "{stdout}");
    assert!(stdout.contains("\n  1. "), "{stdout}");
    assert!(stdout.contains("\n  20. "), "{stdout}");
    assert!(!stdout.contains("\n  21. "), "{stdout}");
}

#[test]
fn missing_root_fails_with_reported_error() {
    let out = run_jpgcanon(Path::new("/definitely/not/a/real/root"), false);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("root not found"), "{stderr}");
}
