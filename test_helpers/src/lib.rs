//! Test helpers shared across the generator crates.
//!
//! [`figment`] isolates configuration-layer tests from the real environment,
//! [`stub_tool`] writes throwaway executables that stand in for the external
//! mocking tool, and [`tree`] snapshots directory contents so tests can prove
//! which files a run touched.

pub mod figment;
#[cfg(unix)]
pub mod stub_tool;
pub mod tree;
