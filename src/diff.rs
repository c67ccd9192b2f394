//! # Diff Module
//!
//! This module renders the change a run would make to a file, for dry runs.
//! Content is compared line by line; bytes that are not valid UTF-8 are shown
//! lossily.

use std::fmt;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Lines of unchanged context around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// One line of a rendered unified diff, tagged so it can be colored.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DiffLine {
  /// `---` or `+++` file header.
  File(String),
  /// `@@` hunk header.
  Hunk(String),
  Change(ChangeTag, String),
}

impl fmt::Display for DiffLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::File(line) | Self::Hunk(line) => f.write_str(line),
      Self::Change(tag, text) => write!(f, "{}{}", sign(*tag), text),
    }
  }
}

/// Builds the unified diff between `original` and `new` for `path`.
///
/// Identical content yields no lines, not even the file headers.
fn diff_lines(path: &Path, original: &[u8], new: &[u8]) -> Vec<DiffLine> {
  let original = String::from_utf8_lossy(original);
  let new = String::from_utf8_lossy(new);
  let name = path.display().to_string();

  let diff = TextDiff::from_lines(original.as_ref(), new.as_ref());
  let mut unified = diff.unified_diff();
  unified.context_radius(CONTEXT_RADIUS);

  let mut lines = Vec::new();
  for hunk in unified.iter_hunks() {
    if lines.is_empty() {
      lines.push(DiffLine::File(format!("--- {name}")));
      lines.push(DiffLine::File(format!("+++ {name}")));
    }
    lines.push(DiffLine::Hunk(hunk.header().to_string()));
    for change in hunk.iter_changes() {
      let text = change.value().trim_end_matches(['\n', '\r']).to_string();
      lines.push(DiffLine::Change(change.tag(), text));
    }
  }
  lines
}

/// Prints the diff between `original` and `new` to stderr, colorized when the
/// terminal supports it.
pub fn print_diff(path: &Path, original: &[u8], new: &[u8]) {
  for line in diff_lines(path, original, new) {
    let text = line.to_string();
    match line {
      DiffLine::File(_) => eprintln!("{}", text.if_supports_color(Stream::Stderr, |s| s.bold())),
      DiffLine::Hunk(_) => eprintln!("{}", text.if_supports_color(Stream::Stderr, |s| s.cyan())),
      DiffLine::Change(ChangeTag::Delete, _) => eprintln!("{}", text.if_supports_color(Stream::Stderr, |s| s.red())),
      DiffLine::Change(ChangeTag::Insert, _) => eprintln!("{}", text.if_supports_color(Stream::Stderr, |s| s.green())),
      DiffLine::Change(ChangeTag::Equal, _) => eprintln!("{text}"),
    }
  }
}

const fn sign(tag: ChangeTag) -> char {
  match tag {
    ChangeTag::Delete => '-',
    ChangeTag::Insert => '+',
    ChangeTag::Equal => ' ',
  }
}
