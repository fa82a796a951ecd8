//! Error types for `generate-mocks`.

use camino::Utf8PathBuf;
use codegen_support::SupportError;
use thiserror::Error;

/// Errors raised before or while launching the mock generator.
///
/// A tool that starts and exits non-zero is not an error here; its status is
/// carried by [`crate::CommandOutcome`] and propagated by the binary.
#[derive(Debug, Error)]
pub enum MockDriverError {
    /// No input files were configured.
    #[error("no input files configured; add at least one entry to `inputs`")]
    NoInputs,

    /// The project identifier is blank.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The working directory could not be determined.
    #[error("failed to resolve the working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    /// The working directory is not valid UTF-8.
    #[error("working directory is not valid UTF-8: {0}")]
    NonUtf8WorkingDir(String),

    /// The external tool could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// Executable that failed to start.
        program: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration loading or output directory preparation failed.
    #[error(transparent)]
    Support(#[from] SupportError),
}
