//! Error types shared by the generator crates.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while resolving configuration or committing artefacts.
#[derive(Debug, Error)]
pub enum SupportError {
    /// A configuration layer could not be merged or extracted.
    #[error("failed to load configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found at {0}")]
    MissingConfigFile(Utf8PathBuf),

    /// The output path does not name a file.
    #[error("output path {0} does not name a file")]
    InvalidOutputPath(Utf8PathBuf),

    /// Filesystem failure tied to a specific path.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed when the failure occurred.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for SupportError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}
