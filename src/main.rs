mod canon;
mod error;
mod normalize;
mod repair;
mod types;
mod walk;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::Error;
use crate::types::{NormalizeOutcome, RepairOutcome};

/// Cap on broken-link examples listed in the summary block.
const BROKEN_EXAMPLE_CAP: usize = 20;

#[derive(Parser)]
#[command(
    name = "jpgcanon",
    about = "Canonicalize dataset JPEG names to 6-digit form and repair their symlinks"
)]
struct Cli {
    /// Dataset root to process (e.g. the training split of an image dataset)
    root: PathBuf,
    /// Apply changes (otherwise run in preview mode: log only, no mutation)
    #[arg(long)]
    apply: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Run both stages over the resolved root, then print the summary.
///
/// # Errors
///
/// Returns `Error::RootNotFound` if the root path cannot be resolved.
fn run(cli: &Cli) -> Result<(), Error> {
    let root = std::fs::canonicalize(&cli.root).map_err(|source| Error::RootNotFound {
        path: cli.root.clone(),
        source,
    })?;
    let preview = !cli.apply;

    println!(
        "== Step 1: normalize real files under {} (preview={preview}) ==",
        root.display()
    );
    let files = normalize::normalize_real_files(&root, preview);

    println!();
    println!("== Step 2: repair symlinks to point at canonical files (preview={preview}) ==");
    let links = repair::repair_symlinks(&root, preview);

    print_summary(&files, &links);
    Ok(())
}

/// Print the final counts plus up to `BROKEN_EXAMPLE_CAP` broken-link
/// examples (link, its current target, the expected canonical path).
fn print_summary(files: &NormalizeOutcome, links: &RepairOutcome) {
    println!();
    println!("== SUMMARY ==");
    println!("Real file renames: {}", files.renames.len());
    println!("Real file conflicts (skipped): {}", files.conflicts.len());
    println!("Symlinks already correct: {}", links.correct);
    println!("Symlinks retargeted: {}", links.retargets.len());
    println!("Broken symlinks (missing targets): {}", links.broken.len());

    if links.broken.is_empty() {
        return;
    }
    println!();
    println!("Broken examples:");
    for (index, broken) in links.broken.iter().take(BROKEN_EXAMPLE_CAP).enumerate() {
        let current = broken
            .current
            .as_ref()
            .map_or_else(|| "<unreadable>".to_string(), |t| t.display().to_string());
        println!(
            "  {}. {} -> {current}, expected {}",
            index + 1,
            broken.link.display(),
            broken.expected.display()
        );
    }
}
