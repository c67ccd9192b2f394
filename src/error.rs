//! # Error Module
//!
//! Structured error types for the library. Every variant that touches the
//! filesystem carries the path it was working on so callers can attribute a
//! failure without re-deriving context.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Read,
  Write,
  Stat,
  SetPermissions,
  Rename,
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Operation::Read => "read",
      Operation::Write => "write",
      Operation::Stat => "stat",
      Operation::SetPermissions => "set permissions on",
      Operation::Rename => "rename",
    };
    f.write_str(name)
  }
}

/// Errors produced while loading inputs, walking trees and rewriting files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The license file could not be read.
  #[error("Failed to read license file '{path}': {source}")]
  License {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The license file has no content to insert.
  #[error("License file '{path}' is empty")]
  EmptyLicense { path: PathBuf },

  /// A filesystem operation on a single file failed.
  #[error("Failed to {op} '{path}': {source}")]
  Io {
    op: Operation,
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Directory traversal failed below `path`.
  #[error("Failed to walk '{path}': {source}")]
  Walk {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  /// An ignore pattern is not a valid shell glob.
  #[error("Invalid ignore pattern '{pattern}': {source}")]
  Pattern {
    pattern: String,
    #[source]
    source: glob::PatternError,
  },

  /// The configuration file is unreadable or invalid.
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl Error {
  /// Builds an [`Error::Io`] for `path`.
  pub fn io(op: Operation, path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::Io {
      op,
      path: path.into(),
      source,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
