//! # License Module
//!
//! Loads the license text once per run and renders it in a file's comment
//! syntax.
//!
//! The text is kept as raw bytes so that licenses and target files in any
//! encoding compare byte-for-byte.
//!
//! ## Example
//!
//! ```rust
//! use addlicense::comment::CommentStyle;
//! use addlicense::license::License;
//!
//! let license = License::from_bytes(b"Copyright 2025 Example\nAll rights reserved.\n".to_vec());
//! let wrapped = license.wrap(&CommentStyle::line("# "));
//! assert_eq!(wrapped, b"# Copyright 2025 Example\n# All rights reserved.\n");
//! ```

use std::path::Path;

use tracing::{debug, trace};

use crate::comment::CommentStyle;
use crate::error::{Error, Result};

/// License text used as the insertion and comparison template for every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
  text: Vec<u8>,
}

impl License {
  /// Loads the license text from `path`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::License`] if the file cannot be read and
  /// [`Error::EmptyLicense`] if it holds nothing but whitespace.
  pub fn load(path: &Path) -> Result<Self> {
    debug!("Loading license from: {}", path.display());

    let text = std::fs::read(path).map_err(|source| Error::License {
      path: path.to_path_buf(),
      source,
    })?;

    if text.iter().all(u8::is_ascii_whitespace) {
      return Err(Error::EmptyLicense {
        path: path.to_path_buf(),
      });
    }

    trace!("License content:\n{}", String::from_utf8_lossy(&text));

    Ok(Self { text })
  }

  /// Creates a license from in-memory text.
  pub const fn from_bytes(text: Vec<u8>) -> Self {
    Self { text }
  }

  /// Splits the text into lines.
  ///
  /// Lines are separated by `\n`; a trailing `\r` is dropped so CRLF license
  /// files wrap the same as LF ones. A final newline does not produce an
  /// extra empty line.
  pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
    let text = self.text.strip_suffix(b"\n").unwrap_or(&self.text);
    text
      .split(|&b| b == b'\n')
      .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
  }

  /// Renders the license in `style`, without the separator blank line.
  pub fn wrap(&self, style: &CommentStyle) -> Vec<u8> {
    style.wrap(self.lines())
  }
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_load_license() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("LICENSE.txt");
    std::fs::write(&path, "Copyright 2025 Example\n").expect("write license");

    let license = License::load(&path).expect("license loads");
    assert_eq!(license.text, b"Copyright 2025 Example\n");
  }

  #[test]
  fn test_load_missing_license() {
    let dir = tempdir().expect("tempdir");
    let err = License::load(&dir.path().join("missing.txt")).expect_err("missing file");
    assert!(matches!(err, Error::License { .. }));
    assert!(err.to_string().contains("missing.txt"));
  }

  #[test]
  fn test_load_empty_license() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("LICENSE.txt");
    std::fs::write(&path, " \n\n").expect("write license");

    let err = License::load(&path).expect_err("blank license");
    assert!(matches!(err, Error::EmptyLicense { .. }));
  }

  #[test]
  fn test_lines_handle_crlf_and_trailing_newline() {
    let license = License::from_bytes(b"first\r\n\r\nthird\r\n".to_vec());
    let lines: Vec<&[u8]> = license.lines().collect();
    assert_eq!(lines, vec![&b"first"[..], b"", b"third"]);
  }

  #[test]
  fn test_lines_without_trailing_newline() {
    let license = License::from_bytes(b"only line".to_vec());
    let lines: Vec<&[u8]> = license.lines().collect();
    assert_eq!(lines, vec![&b"only line"[..]]);
  }

  #[test]
  fn test_wrap_block() {
    let license = License::from_bytes(b"Copyright 2025\n\nMIT\n".to_vec());
    let wrapped = license.wrap(&CommentStyle::block("/*", " * ", " */"));
    assert_eq!(wrapped, b"/*\n * Copyright 2025\n *\n * MIT\n */\n");
  }
}
