//! Shared plumbing for the Loftwing source generators.
//!
//! Both generators resolve an immutable configuration record from layered
//! sources, log to stderr through `tracing`, and commit their artefacts with
//! a single atomic write. The helpers for those concerns live here so the
//! generator crates only carry their own semantics.

pub mod error;
pub mod layers;
pub mod logging;
pub mod output;

pub use error::SupportError;
pub use layers::{LayerSources, load_layered};
pub use logging::init_tracing;
pub use output::{ensure_dir, first_missing_dir, parent_dir, remove_dir_tree, write_atomically};
