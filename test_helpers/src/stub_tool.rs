//! Throwaway shell scripts that impersonate the external mocking tool.
//!
//! The scripts only understand the `--output <path>` flag; every other
//! argument is ignored.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::os::unix::fs::PermissionsExt;

/// Writes a tool that stores `marker` at its `--output` path and exits 0.
///
/// # Errors
///
/// Returns an error when the script cannot be written or made executable.
pub fn marker_tool(dir: &Utf8Path, marker: &str) -> Result<Utf8PathBuf> {
    let body = format!(
        concat!(
            "out=\"\"\n",
            "while [ \"$#\" -gt 0 ]; do\n",
            "  if [ \"$1\" = \"--output\" ]; then out=\"$2\"; shift; fi\n",
            "  shift\n",
            "done\n",
            "printf '%s' '{}' > \"$out\"\n",
        ),
        single_quote_escape(marker)
    );
    write_script(dir, "marker-tool", &body)
}

/// Writes a tool that prints `message` to stderr and exits with `status`.
///
/// # Errors
///
/// Returns an error when the script cannot be written or made executable.
pub fn failing_tool(dir: &Utf8Path, status: u8, message: &str) -> Result<Utf8PathBuf> {
    let body = format!(
        "printf '%s\\n' '{}' >&2\nexit {status}\n",
        single_quote_escape(message)
    );
    write_script(dir, "failing-tool", &body)
}

fn write_script(dir: &Utf8Path, name: &str, body: &str) -> Result<Utf8PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}"))
        .with_context(|| format!("write stub tool {path}"))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .with_context(|| format!("mark stub tool {path} executable"))?;
    Ok(path)
}

fn single_quote_escape(value: &str) -> String {
    value.replace('\'', r"'\''")
}
