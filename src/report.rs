//! # Report Module
//!
//! This module records what happened to each candidate file during a run and
//! aggregates the outcomes into a [`ProcessingSummary`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// Why a file was left alone without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// No comment style is known for the file's name or extension.
  UnsupportedStyle,
}

impl fmt::Display for SkipReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedStyle => write!(f, "no comment style defined for extension"),
    }
  }
}

/// Outcome for a single file.
#[derive(Debug)]
pub enum FileAction {
  /// License header was inserted.
  Added,
  /// License header was cut out.
  Removed,
  /// Content already had the desired state.
  Unchanged,
  /// File was not a candidate for processing.
  Skipped(SkipReason),
  /// Reading or writing the file failed.
  Failed(Error),
}

impl FileAction {
  pub const fn is_failure(&self) -> bool {
    matches!(self, Self::Failed(_))
  }
}

/// Information about a processed file.
#[derive(Debug)]
pub struct FileReport {
  /// Path to the file as produced by the walk
  pub path: PathBuf,
  /// What was done to it
  pub action: FileAction,
  /// Whether the change was only previewed
  pub dry_run: bool,
}

impl FileReport {
  pub const fn new(path: PathBuf, action: FileAction, dry_run: bool) -> Self {
    Self { path, action, dry_run }
  }
}

/// Summary of a whole run.
#[derive(Debug, Default)]
pub struct ProcessingSummary {
  /// Per-file reports in walk order
  pub reports: Vec<FileReport>,
  /// Wall-clock time spent processing
  pub elapsed: Duration,
}

impl ProcessingSummary {
  /// Builds a summary from collected reports.
  pub const fn new(reports: Vec<FileReport>, elapsed: Duration) -> Self {
    Self { reports, elapsed }
  }

  pub fn total(&self) -> usize {
    self.reports.len()
  }

  pub fn added(&self) -> usize {
    self.count(|action| matches!(action, FileAction::Added))
  }

  pub fn removed(&self) -> usize {
    self.count(|action| matches!(action, FileAction::Removed))
  }

  pub fn unchanged(&self) -> usize {
    self.count(|action| matches!(action, FileAction::Unchanged))
  }

  pub fn skipped(&self) -> usize {
    self.count(|action| matches!(action, FileAction::Skipped(_)))
  }

  pub fn failed(&self) -> usize {
    self.count(FileAction::is_failure)
  }

  /// Reports whose action matches `predicate`, in walk order.
  pub fn filter<F>(&self, predicate: F) -> impl Iterator<Item = &FileReport>
  where
    F: Fn(&FileAction) -> bool,
  {
    self.reports.iter().filter(move |report| predicate(&report.action))
  }

  /// Failed reports alongside their errors.
  pub fn failures(&self) -> impl Iterator<Item = (&FileReport, &Error)> {
    self.reports.iter().filter_map(|report| match &report.action {
      FileAction::Failed(error) => Some((report, error)),
      _ => None,
    })
  }

  fn count<F>(&self, predicate: F) -> usize
  where
    F: Fn(&FileAction) -> bool,
  {
    self.reports.iter().filter(|report| predicate(&report.action)).count()
  }
}

#[cfg(test)]
mod tests {
  use std::io;

  use super::*;
  use crate::error::Operation;

  fn report(path: &str, action: FileAction) -> FileReport {
    FileReport::new(PathBuf::from(path), action, false)
  }

  #[test]
  fn test_summary_counts() {
    let summary = ProcessingSummary::new(
      vec![
        report("a.go", FileAction::Added),
        report("b.go", FileAction::Added),
        report("c.go", FileAction::Unchanged),
        report("d.xyz", FileAction::Skipped(SkipReason::UnsupportedStyle)),
        report(
          "e.go",
          FileAction::Failed(Error::io(
            Operation::Read,
            "e.go",
            io::Error::from(io::ErrorKind::PermissionDenied),
          )),
        ),
      ],
      Duration::from_millis(5),
    );

    assert_eq!(summary.total(), 5);
    assert_eq!(summary.added(), 2);
    assert_eq!(summary.removed(), 0);
    assert_eq!(summary.unchanged(), 1);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.failed(), 1);
  }

  #[test]
  fn test_failures_yield_errors() {
    let summary = ProcessingSummary::new(
      vec![
        report("a.go", FileAction::Removed),
        report(
          "b.go",
          FileAction::Failed(Error::io(
            Operation::Rename,
            "b.go",
            io::Error::from(io::ErrorKind::Other),
          )),
        ),
      ],
      Duration::ZERO,
    );

    let failures: Vec<_> = summary.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0.path, PathBuf::from("b.go"));
    assert!(failures[0].1.to_string().contains("rename"));
  }

  #[test]
  fn test_filter_keeps_walk_order() {
    let summary = ProcessingSummary::new(
      vec![
        report("z.go", FileAction::Added),
        report("m.go", FileAction::Unchanged),
        report("a.go", FileAction::Added),
      ],
      Duration::ZERO,
    );

    let added: Vec<_> = summary
      .filter(|action| matches!(action, FileAction::Added))
      .map(|report| report.path.clone())
      .collect();
    assert_eq!(added, vec![PathBuf::from("z.go"), PathBuf::from("a.go")]);
  }

  #[test]
  fn test_skip_reason_display() {
    assert_eq!(
      SkipReason::UnsupportedStyle.to_string(),
      "no comment style defined for extension"
    );
  }
}
