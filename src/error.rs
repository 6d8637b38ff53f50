/// Process-level error type for jpgcanon.
use std::path::PathBuf;

/// Fatal errors only. Anything recoverable per entry is logged inline by the
/// stages and never surfaces here.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset root does not exist or cannot be resolved.
    #[error("root not found: {}", path.display())]
    RootNotFound {
        /// Path the user supplied on the command line.
        path: PathBuf,
        /// Underlying resolution failure.
        source: std::io::Error,
    },
}
