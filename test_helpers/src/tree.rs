//! Directory snapshots for asserting which files a run created.

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;

/// Relative file path mapped to its contents.
pub type TreeSnapshot = BTreeMap<Utf8PathBuf, Vec<u8>>;

/// Reads every regular file below `root`, keyed by its path relative to
/// `root`.
///
/// # Errors
///
/// Returns an error when a directory cannot be listed, a file cannot be
/// read, or a path is not valid UTF-8.
pub fn snapshot(root: &Utf8Path) -> Result<TreeSnapshot> {
    let mut files = TreeSnapshot::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir).with_context(|| format!("list {dir}"))? {
            let entry = entry.with_context(|| format!("list {dir}"))?;
            let path = Utf8PathBuf::from_path_buf(entry.path())
                .map_err(|path| anyhow!("non-UTF-8 path: {}", path.display()))?;
            if entry.file_type()?.is_dir() {
                pending.push(path);
                continue;
            }
            let contents = std::fs::read(&path).with_context(|| format!("read {path}"))?;
            let relative = path
                .strip_prefix(root)
                .with_context(|| format!("{path} escaped {root}"))?
                .to_path_buf();
            files.insert(relative, contents);
        }
    }
    Ok(files)
}
