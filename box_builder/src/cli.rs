//! Command-line interface definitions for `make-box-builder`.
//!
//! Every flag is optional: with no arguments the tool emits the overloads
//! Loftwing ships with. Flags only override the layers beneath them.

use camino::Utf8PathBuf;
use clap::{Args as ClapArgs, Parser};
use serde::Serialize;

/// Parsed CLI arguments for `make-box-builder`.
#[derive(Debug, Parser)]
#[command(name = "make-box-builder")]
#[command(about = "Emit the BoxBuilder buildBlock overloads as Swift source")]
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
    /// Exclusive upper bound on generated arity (must be at least 2).
    #[arg(long, value_name = "N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arity_bound: Option<u32>,
    /// Type extended by the generated block.
    #[arg(long, value_name = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_type: Option<String>,
    /// Name shared by every overload.
    #[arg(long, value_name = "name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    /// Generic parameter accepted and returned by each overload.
    #[arg(long, value_name = "name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_parameter: Option<String>,
    /// Prefix for positional parameter names.
    #[arg(long, value_name = "prefix")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_prefix: Option<String>,
    /// Write the generated source to this file instead of stdout.
    #[arg(short, long, value_name = "path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Utf8PathBuf>,
}
