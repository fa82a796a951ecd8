//! Error types for `make-box-builder`.

use codegen_support::SupportError;
use thiserror::Error;

/// Errors surfaced while configuring or emitting the overload family.
#[derive(Debug, Error)]
pub enum BoxBuilderError {
    /// The arity bound leaves no overload to emit.
    #[error("arity bound must be at least {min}, got {bound}")]
    InvalidArityBound {
        /// Configured bound.
        bound: u32,
        /// Smallest accepted bound.
        min: u32,
    },

    /// A naming option is not usable as a Swift identifier.
    #[error("{field} must be a Swift identifier, got {value:?}")]
    InvalidIdentifier {
        /// Configuration key holding the value.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Configuration loading or output writing failed.
    #[error(transparent)]
    Support(#[from] SupportError),

    /// The generated text could not be written to the sink.
    #[error("failed to write generated source: {0}")]
    Write(#[source] std::io::Error),
}
