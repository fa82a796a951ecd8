//! Driver for the external mock generator.
//!
//! Loftwing's test suite relies on mocks that Cuckoo synthesises from the
//! protocols in a handful of source files. This crate turns a
//! [`MockConfig`] into one Cuckoo invocation with absolute paths, runs it
//! through a [`CommandRunner`], and reports the tool's exit status back
//! untouched. It never reads the input files itself.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod plan;
pub mod runner;

pub use config::{MockConfig, load_config};
pub use driver::{MockReport, generate_mocks, run_plan};
pub use error::MockDriverError;
pub use plan::MockPlan;
pub use runner::{CommandOutcome, CommandRunner, Invocation, ProcessRunner};
