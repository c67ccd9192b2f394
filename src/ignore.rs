//! # Ignore Module
//!
//! This module decides which walked entries are excluded from processing.
//!
//! Patterns use shell-glob semantics: `*` matches any run of characters,
//! `?` a single character, and `[abc]` / `[!abc]` a character class. Neither
//! `*` nor `?` crosses a `/`. An entry is excluded when any pattern matches
//! any of:
//!
//! 1. its path relative to the walked root, with `/` separators
//!    (`vendor/b.go`);
//! 2. its base name (`b.go`);
//! 3. its full path as produced by the walk (`./src/vendor/b.go`).
//!
//! A pattern ending in `/` only matches directories. Excluding a directory
//! excludes everything below it, so `vendor` and `vendor/*` both keep the
//! walker out of `vendor/sub/c.go`.

use std::path::{Component, Path};

use glob::{MatchOptions, Pattern};
use tracing::trace;

use crate::error::{Error, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
  case_sensitive: true,
  require_literal_separator: true,
  require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct IgnorePattern {
  pattern: Pattern,
  dir_only: bool,
}

/// Compiled set of ignore patterns, fixed for the duration of a run.
///
/// The walk root itself is never excluded, but its children are matched on
/// their full path too. Walking `vendor` with the pattern `vendor/*`
/// therefore yields nothing: every child's full path is `vendor/<name>`.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
///
/// use addlicense::ignore::IgnoreSet;
///
/// # fn main() -> addlicense::error::Result<()> {
/// let ignore = IgnoreSet::new(["vendor/*", "*.pb.go"])?;
///
/// assert!(ignore.is_ignored(Path::new("root/vendor/b.go"), Path::new("vendor/b.go"), false));
/// assert!(ignore.is_ignored(Path::new("root/api/x.pb.go"), Path::new("api/x.pb.go"), false));
/// assert!(!ignore.is_ignored(Path::new("root/a.go"), Path::new("a.go"), false));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
  patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
  /// Compiles `patterns`.
  ///
  /// Backslashes are treated as path separators and a leading `./` is
  /// dropped, since relative paths are matched without one.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Pattern`] for the first pattern that is not a valid
  /// glob.
  pub fn new<I, S>(patterns: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut compiled = Vec::new();

    for raw in patterns {
      let raw = raw.as_ref();
      let normalized = raw.replace('\\', "/");
      let normalized = normalized.strip_prefix("./").unwrap_or(&normalized);

      let (body, dir_only) = match normalized.strip_suffix('/') {
        Some(body) if !body.is_empty() => (body, true),
        _ => (normalized, false),
      };

      let pattern = Pattern::new(body).map_err(|source| Error::Pattern {
        pattern: raw.to_string(),
        source,
      })?;

      compiled.push(IgnorePattern { pattern, dir_only });
    }

    Ok(Self { patterns: compiled })
  }

  /// Checks an entry against every pattern.
  ///
  /// `path` is the entry's full path as walked and `relative` its path below
  /// the walked root; an empty `relative` (the root itself) is only matched
  /// by base name and full path.
  pub fn is_ignored(&self, path: &Path, relative: &Path, is_dir: bool) -> bool {
    if self.patterns.is_empty() {
      return false;
    }

    let relative = slash_path(relative);
    let base_name = path.file_name().and_then(|name| name.to_str());
    let full = slash_path(path);

    for entry in &self.patterns {
      if entry.dir_only && !is_dir {
        continue;
      }

      let matched = (!relative.is_empty() && entry.pattern.matches_with(&relative, MATCH_OPTIONS))
        || base_name.is_some_and(|name| entry.pattern.matches_with(name, MATCH_OPTIONS))
        || entry.pattern.matches_with(&full, MATCH_OPTIONS);

      if matched {
        trace!("Skipping: {} (matches ignore pattern '{}')", path.display(), entry.pattern);
        return true;
      }
    }

    false
  }
}

/// Joins the normal components of `path` with `/`, dropping `.` segments.
fn slash_path(path: &Path) -> String {
  let mut out = String::new();
  for component in path.components() {
    let segment = match component {
      Component::CurDir => continue,
      Component::RootDir => {
        out.push('/');
        continue;
      }
      other => other.as_os_str().to_string_lossy(),
    };
    if !out.is_empty() && !out.ends_with('/') {
      out.push('/');
    }
    out.push_str(&segment);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ignored(patterns: &[&str], relative: &str, is_dir: bool) -> bool {
    let set = IgnoreSet::new(patterns).expect("valid patterns");
    let full = Path::new("root").join(relative);
    set.is_ignored(&full, Path::new(relative), is_dir)
  }

  #[test]
  fn test_relative_path_match() {
    assert!(ignored(&["vendor/*"], "vendor/b.go", false));
    assert!(!ignored(&["vendor/*"], "a.go", false));
  }

  #[test]
  fn test_star_does_not_cross_separator() {
    assert!(!ignored(&["vendor/*.go"], "vendor/sub/c.go", false));
    assert!(ignored(&["vendor/*"], "vendor/sub", true));
  }

  #[test]
  fn test_base_name_match_at_any_depth() {
    assert!(ignored(&["*.pb.go"], "api/v1/service.pb.go", false));
    assert!(ignored(&["vendor"], "third_party/vendor", true));
  }

  #[test]
  fn test_question_mark_and_class() {
    assert!(ignored(&["gen?.go"], "gen1.go", false));
    assert!(!ignored(&["gen?.go"], "gen10.go", false));
    assert!(ignored(&["[ab].go"], "b.go", false));
    assert!(!ignored(&["[!ab].go"], "a.go", false));
  }

  #[test]
  fn test_full_path_match() {
    let set = IgnoreSet::new(["root/generated/*"]).expect("valid pattern");
    assert!(set.is_ignored(Path::new("root/generated/x.go"), Path::new("generated/x.go"), false));
  }

  #[test]
  fn test_trailing_slash_matches_directories_only() {
    assert!(ignored(&["build/"], "build", true));
    assert!(!ignored(&["build/"], "build", false));
  }

  #[test]
  fn test_leading_dot_slash_and_backslash_are_normalized() {
    assert!(ignored(&["./vendor/*"], "vendor/b.go", false));
    assert!(ignored(&["vendor\\*"], "vendor/b.go", false));
  }

  #[test]
  fn test_root_entry_is_matched_by_name_only() {
    let set = IgnoreSet::new(["*.go"]).expect("valid pattern");
    assert!(set.is_ignored(Path::new("main.go"), Path::new(""), false));
  }

  #[test]
  fn test_invalid_pattern() {
    let err = IgnoreSet::new(["[unterminated"]).expect_err("invalid glob");
    assert!(matches!(err, Error::Pattern { .. }));
    assert!(err.to_string().contains("[unterminated"));
  }

  #[test]
  fn test_empty_set_ignores_nothing() {
    let set = IgnoreSet::default();
    assert!(set.patterns.is_empty());
    assert!(!set.is_ignored(Path::new("a.go"), Path::new("a.go"), false));
  }

  #[test]
  fn test_slash_path() {
    assert_eq!(slash_path(Path::new("./a/b/c.go")), "a/b/c.go");
    assert_eq!(slash_path(Path::new("/abs/x")), "/abs/x");
    assert_eq!(slash_path(Path::new("")), "");
  }
}
