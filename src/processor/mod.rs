//! # Processor Module
//!
//! This module contains the core functionality for adding license headers to,
//! and removing them from, every candidate file under a set of root paths.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and atomic, permission-preserving writes
//! - [`content_transformer`] - Header insertion and removal on raw bytes
//! - [`file_collector`] - Directory traversal with ignore patterns
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Files are handled one at a time in walk order: read,
//! transform, write, then the next file.

mod content_transformer;
mod file_collector;
mod file_io;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::time::Instant;

pub use content_transformer::ContentTransformer;
pub use file_collector::Walker;
pub use file_io::FileIO;
use tracing::{debug, trace, warn};

use crate::comment::{BuiltinResolver, CommentStyleResolver};
use crate::detector::{ExactDetector, LicenseDetector};
use crate::diff::print_diff;
use crate::error::Result;
use crate::ignore::IgnoreSet;
use crate::license::License;
use crate::report::{FileAction, FileReport, ProcessingSummary, SkipReason};

/// What a run does to each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Insert the license where it is missing
  Add,
  /// Cut out the license where it is present
  Remove,
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Mode::Add => write!(f, "add"),
      Mode::Remove => write!(f, "remove"),
    }
  }
}

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub license: License,
  pub mode: Mode,

  /// Shell-glob patterns for entries to leave out of the walk
  pub ignore_patterns: Vec<String>,

  /// Compute and print changes without writing them
  pub dry_run: bool,

  // Optional components
  pub resolver: Option<Box<dyn CommentStyleResolver>>,
  pub license_detector: Option<Box<dyn LicenseDetector>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     dry_run: true,
  ///     ..ProcessorConfig::new(license, Mode::Add)
  /// }
  /// ```
  pub fn new(license: License, mode: Mode) -> Self {
    Self {
      license,
      mode,
      ignore_patterns: vec![],
      dry_run: false,
      resolver: None,
      license_detector: None,
    }
  }
}

/// Processor for adding or removing license headers.
pub struct Processor {
  /// License text to wrap and look for
  license: License,

  mode: Mode,

  dry_run: bool,

  /// Directory walker carrying the compiled ignore patterns
  walker: Walker,

  /// Maps paths to comment styles
  resolver: Box<dyn CommentStyleResolver>,

  /// Locates existing headers
  license_detector: Box<dyn LicenseDetector>,

  content_transformer: ContentTransformer,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// # Parameters
  ///
  /// * `config` - License, mode and optional components. A missing resolver
  ///   defaults to the built-in comment style table and a missing detector to
  ///   [`ExactDetector`].
  ///
  /// # Errors
  ///
  /// Returns [`crate::error::Error::Pattern`] if any of the ignore patterns is
  /// invalid.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    let ignore = IgnoreSet::new(&config.ignore_patterns)?;

    Ok(Self {
      license: config.license,
      mode: config.mode,
      dry_run: config.dry_run,
      walker: Walker::new(ignore),
      resolver: config.resolver.unwrap_or_else(|| Box::new(BuiltinResolver)),
      license_detector: config.license_detector.unwrap_or_else(|| Box::new(ExactDetector::new())),
      content_transformer: ContentTransformer::new(),
    })
  }

  /// Processes every candidate file under `roots`, in order.
  ///
  /// A file reached through more than one root is processed once. Per-file
  /// failures are recorded in the summary and do not stop the run.
  ///
  /// # Errors
  ///
  /// Returns [`crate::error::Error::Walk`] on the first traversal error. Files
  /// handled before the error keep their changes.
  pub fn process<P: AsRef<Path>>(&self, roots: &[P]) -> Result<ProcessingSummary> {
    let start = Instant::now();
    let mut reports = Vec::new();
    let mut seen = HashSet::new();

    for root in roots {
      for entry in self.walker.files(root.as_ref()) {
        let path = entry?;
        if !seen.insert(path.clone()) {
          trace!("Skipping: {} (already processed)", path.display());
          continue;
        }
        reports.push(self.process_file(&path));
      }
    }

    let elapsed = start.elapsed();
    debug!("Processed {} files in {}ms", reports.len(), elapsed.as_millis());

    Ok(ProcessingSummary::new(reports, elapsed))
  }

  /// Processes a single file and reports the outcome.
  ///
  /// Errors are captured in the report as [`FileAction::Failed`] rather than
  /// returned.
  pub fn process_file(&self, path: &Path) -> FileReport {
    let action = match self.apply(path) {
      Ok(action) => action,
      Err(error) => {
        warn!("{error}");
        FileAction::Failed(error)
      }
    };

    FileReport::new(path.to_path_buf(), action, self.dry_run)
  }

  fn apply(&self, path: &Path) -> Result<FileAction> {
    let Some(style) = self.resolver.resolve(path) else {
      trace!("Skipping: {} ({})", path.display(), SkipReason::UnsupportedStyle);
      return Ok(FileAction::Skipped(SkipReason::UnsupportedStyle));
    };

    let wrapped = self.license.wrap(&style);
    let content = FileIO::read_file(path)?;
    let detection = self.license_detector.detect(&content, &wrapped);

    let updated = match self.mode {
      Mode::Add => self.content_transformer.add_license(&content, &wrapped, detection),
      Mode::Remove => self.content_transformer.remove_license(&content, detection),
    };

    let Cow::Owned(updated) = updated else {
      trace!("Unchanged: {}", path.display());
      return Ok(FileAction::Unchanged);
    };

    if self.dry_run {
      print_diff(path, &content, &updated);
    } else {
      FileIO::write_file(path, &updated)?;
    }

    let action = match self.mode {
      Mode::Add => FileAction::Added,
      Mode::Remove => FileAction::Removed,
    };
    debug!("{:?}: {}", action, path.display());

    Ok(action)
  }
}
