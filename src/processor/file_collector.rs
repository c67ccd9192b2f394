//! # File Collector Module
//!
//! This module enumerates the candidate files under a root path.
//!
//! Traversal is lazy: files are yielded as the walk reaches them, and each
//! call to [`Walker::files`] starts a fresh walk. Entries are visited
//! in file-name order so runs are deterministic.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::ignore::IgnoreSet;

/// Walker for directory traversal with ignore patterns.
///
/// The walker yields regular files only. Symlinks are neither followed nor
/// yielded, and a directory matching an ignore pattern is pruned with its
/// whole subtree. A root that is itself a directory is never pruned.
pub struct Walker {
  ignore: IgnoreSet,
}

impl Walker {
  /// Creates a walker that excludes entries matching `ignore`.
  pub const fn new(ignore: IgnoreSet) -> Self {
    Self { ignore }
  }

  /// Walks `root` and yields every candidate file.
  ///
  /// A root that names a file yields that file unless its name is ignored.
  ///
  /// # Errors
  ///
  /// The iterator yields [`Error::Walk`] for a missing root or an unreadable
  /// directory, attributed to the offending path. Callers decide whether to
  /// stop at the first error.
  pub fn files<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    debug!("Scanning: {}", root.display());

    let walk_root = root.to_path_buf();
    let error_root = root.to_path_buf();

    WalkDir::new(root)
      .follow_links(false)
      .follow_root_links(false)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(move |entry| !self.is_excluded(&walk_root, entry))
      .filter_map(move |entry| match entry {
        Ok(entry) if entry.file_type().is_file() && !entry.path_is_symlink() => Some(Ok(entry.into_path())),
        Ok(entry) => {
          if entry.path_is_symlink() {
            trace!("Skipping: {} (symlink)", entry.path().display());
          }
          None
        }
        Err(source) => {
          let path = source.path().map_or_else(|| error_root.clone(), Path::to_path_buf);
          Some(Err(Error::Walk { path, source }))
        }
      })
  }

  fn is_excluded(&self, root: &Path, entry: &DirEntry) -> bool {
    let is_dir = entry.file_type().is_dir();
    if entry.depth() == 0 && is_dir {
      return false;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    self.ignore.is_ignored(entry.path(), relative, is_dir)
  }
}
