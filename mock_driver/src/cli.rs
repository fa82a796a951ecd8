//! Command-line interface definitions for `generate-mocks`.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser};
use serde::Serialize;

/// Parsed CLI arguments for `generate-mocks`.
#[derive(Debug, Parser)]
#[command(name = "generate-mocks")]
#[command(about = "Regenerate Loftwing's test mocks with Cuckoo")]
#[command(version)]
pub struct Args {
    /// TOML file layered over the built-in defaults.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Values that take precedence over every other layer.
    #[command(flatten)]
    pub overrides: Overrides,
}

/// Flag-level overrides; unset flags leave lower layers untouched.
#[derive(Debug, Default, Clone, ClapArgs, Serialize)]
pub struct Overrides {
    /// Mock generator executable.
    #[arg(long, value_name = "path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<Utf8PathBuf>,
    /// Project identifier passed to the generator.
    #[arg(long, value_name = "name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// File the generator writes the mocks to.
    #[arg(short, long, value_name = "path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
    /// Directory the input files are listed relative to.
    #[arg(long, value_name = "path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_root: Option<Utf8PathBuf>,
    /// Input file to mock (repeat for several files).
    #[arg(long = "input", value_name = "path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Utf8PathBuf>>,
    /// Directory relative paths are anchored at.
    #[arg(long, value_name = "path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<Utf8PathBuf>,
}
