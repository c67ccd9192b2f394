//! # Output Module
//!
//! This module centralizes all user-facing output for the addlicense tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show which files changed without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `--debug`, silence with `--quiet`
//! - **Scriptable**: Keep stdout predictable for piping/automation
//!
//! Failures are always printed, to stderr, even in quiet mode.

use std::path::{Path, PathBuf};

use owo_colors::{OwoColorize, Stream};

use crate::logging::OutputMode;
use crate::processor::Mode;
use crate::report::{FileAction, FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Printer for the end-of-run report.
pub struct Output {
  mode: OutputMode,
  /// Paths are shown relative to this directory when possible
  base: Option<PathBuf>,
}

impl Output {
  pub const fn new(mode: OutputMode, base: Option<PathBuf>) -> Self {
    Self { mode, base }
  }

  /// Prints everything the user needs to know about a finished run.
  pub fn print_run(&self, summary: &ProcessingSummary, mode: Mode, dry_run: bool) {
    let changed: Vec<_> = summary
      .filter(|action| matches!(action, FileAction::Added | FileAction::Removed))
      .collect();

    if changed.is_empty() {
      self.print_nothing_to_do(mode);
    } else {
      self.print_changed_files(&changed, mode, dry_run);
    }

    self.print_failures(summary);

    self.print_blank_line();
    self.print_summary(summary, mode);
  }

  /// Print the list of files that were (or would be) changed.
  pub fn print_changed_files(&self, files: &[&FileReport], mode: Mode, dry_run: bool) {
    if self.mode.is_quiet() || files.is_empty() {
      return;
    }

    let count = files.len();
    let files_word = if count == 1 { "file" } else { "files" };
    let header = match (mode, dry_run) {
      (Mode::Add, false) => format!("Added license to {count} {files_word}:"),
      (Mode::Add, true) => format!("Would add license to {count} {files_word}:"),
      (Mode::Remove, false) => format!("Removed license from {count} {files_word}:"),
      (Mode::Remove, true) => format!("Would remove license from {count} {files_word}:"),
    };
    println!(
      "{} {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      header
    );

    let show_all = self.mode.is_verbose();
    let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

    for file in files.iter().take(limit) {
      println!("  {}", self.display_path(&file.path));
    }

    if !show_all && count > limit {
      let remaining = count - limit;
      println!(
        "  {}",
        format!("... and {remaining} more (use --debug to see all)").if_supports_color(Stream::Stdout, |s| s.dimmed())
      );
    }
  }

  /// Print the message shown when no file needed changing.
  pub fn print_nothing_to_do(&self, mode: Mode) {
    if self.mode.is_quiet() {
      return;
    }

    let message = match mode {
      Mode::Add => "All files already have license headers.",
      Mode::Remove => "No license headers to remove.",
    };
    println!(
      "{} {}",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      message
    );
  }

  /// Print every failed file with its error, to stderr.
  pub fn print_failures(&self, summary: &ProcessingSummary) {
    let failures: Vec<_> = summary.failures().collect();
    if failures.is_empty() {
      return;
    }

    let count = failures.len();
    eprintln!(
      "{} {} {} failed:",
      symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
      count,
      if count == 1 { "file" } else { "files" }
    );
    for (report, error) in failures {
      eprintln!("  {}: {}", self.display_path(&report.path), error);
    }
  }

  /// Print the processing summary.
  ///
  /// Format: "Summary: X added, Y unchanged, Z skipped, W failed"
  /// In verbose mode, also shows timing.
  pub fn print_summary(&self, summary: &ProcessingSummary, mode: Mode) {
    if self.mode.is_quiet() {
      return;
    }

    let (changed, verb) = match mode {
      Mode::Add => (summary.added(), "added"),
      Mode::Remove => (summary.removed(), "removed"),
    };

    let failed = summary.failed();
    let failed_str = if failed > 0 {
      failed.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
    } else {
      failed.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
    };

    let mut summary_line = format!(
      "Summary: {} {}, {} unchanged, {} skipped, {} failed",
      changed.if_supports_color(Stream::Stdout, |s| s.cyan()),
      verb,
      summary.unchanged().if_supports_color(Stream::Stdout, |s| s.cyan()),
      summary.skipped().if_supports_color(Stream::Stdout, |s| s.dimmed()),
      failed_str
    );

    if self.mode.is_verbose() {
      summary_line.push_str(&format!(" ({:.2}s)", summary.elapsed.as_secs_f64()));
    }

    println!("{summary_line}");
  }

  fn print_blank_line(&self) {
    if !self.mode.is_quiet() {
      println!();
    }
  }

  fn display_path(&self, path: &Path) -> String {
    make_relative_path(path, self.base.as_deref())
  }
}

/// Make a path relative to `base` for display.
///
/// Falls back to the path as given when no relative form exists, e.g. a
/// relative path against an absolute base.
fn make_relative_path(path: &Path, base: Option<&Path>) -> String {
  let relative = base.and_then(|base| {
    if path.is_absolute() != base.is_absolute() {
      return None;
    }
    pathdiff::diff_paths(path, base)
  });

  relative.as_deref().unwrap_or(path).display().to_string()
}
