//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//!
//! Writes go to a temporary file in the target's directory which is then
//! renamed over the target, so a file is always either fully old or fully
//! new. The temporary file takes the target's permission bits before the
//! rename.

use std::io::Write as _;
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Operation, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the full content of `path` as raw bytes.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] with [`Operation::Read`] if the file cannot be read.
  pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| Error::io(Operation::Read, path, e))
  }

  /// Atomically replaces the content of `path`, keeping its permissions.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Io`] naming the step that failed: `stat` on the
  /// original, `write` of the temporary file, `set permissions` on it, or the
  /// final `rename`. The original is untouched on any error.
  pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    let permissions = std::fs::metadata(path)
      .map_err(|e| Error::io(Operation::Stat, path, e))?
      .permissions();

    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
      .prefix(".addlicense-")
      .tempfile_in(dir)
      .map_err(|e| Error::io(Operation::Write, path, e))?;
    trace!("Writing {} via {}", path.display(), temp.path().display());

    temp
      .write_all(content)
      .and_then(|()| temp.as_file().sync_all())
      .map_err(|e| Error::io(Operation::Write, path, e))?;

    temp
      .as_file()
      .set_permissions(permissions)
      .map_err(|e| Error::io(Operation::SetPermissions, path, e))?;

    temp
      .persist(path)
      .map_err(|e| Error::io(Operation::Rename, path, e.error))?;

    Ok(())
  }
}
