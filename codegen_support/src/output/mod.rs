//! Artefact writers built on `cap_std`.
//!
//! Generated files are written to a hidden sibling first and renamed into
//! place, so an interrupted run leaves either the previous artefact or the
//! complete new one at the target path.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use std::io::Write;
use tracing::debug;

use crate::error::SupportError;

/// Opens `path` as a directory, creating it and any missing parents first.
///
/// # Errors
///
/// Returns [`SupportError::Io`] when the directory cannot be created or
/// opened.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir, SupportError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                SupportError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| SupportError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(SupportError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}

/// Returns the outermost directory [`ensure_dir`] would have to create for
/// `path`, or `None` when `path` already exists.
#[must_use]
pub fn first_missing_dir(path: &Utf8Path) -> Option<&Utf8Path> {
    path.ancestors()
        .take_while(|ancestor| !ancestor.as_str().is_empty() && !ancestor.exists())
        .last()
}

/// Removes the directory tree rooted at `path`.
///
/// # Errors
///
/// Returns [`SupportError::InvalidOutputPath`] when `path` has no final
/// component, and [`SupportError::Io`] when the tree cannot be removed.
pub fn remove_dir_tree(path: &Utf8Path) -> Result<(), SupportError> {
    let Some(name) = path.file_name() else {
        return Err(SupportError::InvalidOutputPath(path.to_path_buf()));
    };
    let parent = parent_dir(path);
    Dir::open_ambient_dir(parent, ambient_authority())
        .and_then(|dir| dir.remove_dir_all(name))
        .map_err(|io_err| SupportError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })
}

/// Returns the directory holding `path`, treating a bare file name as
/// relative to the working directory.
#[must_use]
pub fn parent_dir(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

/// Replaces the file at `path` with `content` in a single rename.
///
/// # Errors
///
/// Returns [`SupportError::InvalidOutputPath`] when `path` has no file name,
/// and [`SupportError::Io`] when the staging file cannot be written or moved.
pub fn write_atomically(path: &Utf8Path, content: &str) -> Result<(), SupportError> {
    let Some(file_name) = path.file_name() else {
        return Err(SupportError::InvalidOutputPath(path.to_path_buf()));
    };
    let parent = parent_dir(path);
    let dir = ensure_dir(parent)?;
    let staging = format!(".{file_name}.tmp");
    let staging_path = parent.join(&staging);

    stage(&dir, &staging, |file| file.write_all(content.as_bytes())).map_err(|io_err| {
        SupportError::Io {
            path: staging_path.clone(),
            source: io_err,
        }
    })?;

    dir.rename(&staging, &dir, file_name)
        .map_err(|io_err| SupportError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    debug!(path = %path, bytes = content.len(), "artefact written");
    Ok(())
}

/// Writes the staging file `name` in `dir` with `fill` and syncs it.
///
/// A staging file that could not be completed is removed again.
fn stage<F>(dir: &Dir, name: &str, fill: F) -> std::io::Result<()>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    let mut file = dir.open_with(
        name,
        OpenOptions::new().write(true).create(true).truncate(true),
    )?;
    let written = fill(&mut file).and_then(|()| file.sync_all());
    drop(file);
    if let Err(err) = written {
        if let Err(cleanup_err) = dir.remove_file(name) {
            debug!(staging = name, error = %cleanup_err, "staging file left behind");
        }
        return Err(err);
    }
    Ok(())
}
