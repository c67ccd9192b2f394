//! # License Detection Module
//!
//! This module locates an existing license header in file content. It sits
//! behind the [`LicenseDetector`] trait so the matching algorithm can be
//! replaced without touching the processor.
//!
//! Detection works on the license already wrapped for the file's comment
//! style; files whose style is unknown never reach the detector and are
//! reported as unsupported by the processor.

/// First-line prefixes that must stay above the license header.
///
/// Matched case-insensitively against the start of the first line.
const PREFIXES: [&[u8]; 8] = [
  b"#!",                       // shebang
  b"<?xml",                    // XML declaration
  b"<!doctype",                // HTML doctype
  b"# encoding:",              // Ruby encoding
  b"# frozen_string_literal:", // Ruby interpreter instruction
  b"<?php",                    // PHP opening tag
  b"# escape",                 // Dockerfile directive
  b"# syntax",                 // Dockerfile directive
];

/// Where a license header is, or where one belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
  /// The wrapped license occupies `start..end`, including the single blank
  /// line separating it from the rest of the file when one is present.
  Present { start: usize, end: usize },

  /// No license; a new header belongs at byte `insert_at`, right after any
  /// prefix line.
  Absent { insert_at: usize },
}

impl Detection {
  pub const fn is_present(&self) -> bool {
    matches!(self, Self::Present { .. })
  }
}

/// Trait for license detectors.
pub trait LicenseDetector: Send + Sync {
  /// Looks for `wrapped` at the top of `content`.
  fn detect(&self, content: &[u8], wrapped: &[u8]) -> Detection;
}

/// Byte-exact license detector.
///
/// The wrapped license must appear verbatim at byte 0 or directly after a
/// prefix line. No whitespace or case normalization is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactDetector;

impl ExactDetector {
  pub const fn new() -> Self {
    Self
  }
}

impl LicenseDetector for ExactDetector {
  fn detect(&self, content: &[u8], wrapped: &[u8]) -> Detection {
    let insert_at = prefix_len(content);

    if wrapped.is_empty() {
      return Detection::Absent { insert_at };
    }

    // A header at byte 0 wins even if its first line looks like a prefix,
    // e.g. a `# syntax ...` license line in a shell script.
    for start in [0, insert_at] {
      if content[start..].starts_with(wrapped) {
        let end = start + wrapped.len();
        return Detection::Present {
          start,
          end: end + separator_len(&content[end..]),
        };
      }
    }

    Detection::Absent { insert_at }
  }
}

/// Length of the prefix line at the top of `content`, including its newline.
///
/// Returns `0` when the first line is not a recognized prefix.
pub fn prefix_len(content: &[u8]) -> usize {
  let line_end = content.iter().position(|&b| b == b'\n');
  let first_line = &content[..line_end.unwrap_or(content.len())];

  let is_prefix = PREFIXES
    .iter()
    .any(|prefix| first_line.len() >= prefix.len() && first_line[..prefix.len()].eq_ignore_ascii_case(prefix));

  match (is_prefix, line_end) {
    (false, _) => 0,
    (true, Some(end)) => end + 1,
    (true, None) => content.len(),
  }
}

fn separator_len(rest: &[u8]) -> usize {
  if rest.starts_with(b"\r\n") {
    2
  } else if rest.starts_with(b"\n") {
    1
  } else {
    0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const WRAPPED: &[u8] = b"// Copyright 2025 Example\n";

  #[test]
  fn test_detects_license_at_top() {
    let content = b"// Copyright 2025 Example\n\npackage main\n";
    let detection = ExactDetector.detect(content, WRAPPED);
    assert_eq!(detection, Detection::Present { start: 0, end: 27 });
    assert_eq!(&content[27..], b"package main\n");
  }

  #[test]
  fn test_detects_license_without_separator() {
    let content = b"// Copyright 2025 Example\n";
    assert_eq!(
      ExactDetector.detect(content, WRAPPED),
      Detection::Present {
        start: 0,
        end: content.len()
      }
    );
  }

  #[test]
  fn test_detects_license_after_shebang() {
    let content = b"#!/usr/bin/env python\n# Copyright\n\nprint()\n";
    let detection = ExactDetector.detect(content, b"# Copyright\n");
    assert_eq!(detection, Detection::Present { start: 22, end: 35 });
  }

  #[test]
  fn test_absent_license_inserts_after_prefix() {
    let content = b"#!/bin/sh\necho hi\n";
    assert_eq!(ExactDetector.detect(content, b"# Copyright\n"), Detection::Absent { insert_at: 10 });
  }

  #[test]
  fn test_absent_license_inserts_at_start() {
    let content = b"package main\n";
    assert_eq!(ExactDetector.detect(content, WRAPPED), Detection::Absent { insert_at: 0 });
  }

  #[test]
  fn test_license_later_in_file_is_not_detected() {
    let content = b"package main\n\n// Copyright 2025 Example\n";
    assert!(!ExactDetector.detect(content, WRAPPED).is_present());
  }

  #[test]
  fn test_whitespace_differences_are_not_normalized() {
    let content = b"//  Copyright 2025 Example\n\npackage main\n";
    assert!(!ExactDetector.detect(content, WRAPPED).is_present());
  }

  #[test]
  fn test_license_with_prefix_like_first_line() {
    let wrapped = b"# syntax highlighting by Example\n";
    let content = b"# syntax highlighting by Example\n\necho hi\n";
    assert_eq!(ExactDetector.detect(content, wrapped), Detection::Present { start: 0, end: 34 });
  }

  #[test]
  fn test_prefix_len() {
    assert_eq!(prefix_len(b"#!/bin/bash\necho hello"), 12);
    assert_eq!(prefix_len(b"<?XML version=\"1.0\"?>\n<root/>"), 22);
    assert_eq!(prefix_len(b"<!DOCTYPE html>\n<html>"), 16);
    assert_eq!(prefix_len(b"<?php\n\necho 'x';"), 6);
    assert_eq!(prefix_len(b"# frozen_string_literal: true\nputs 1"), 30);
    assert_eq!(prefix_len(b"#!/bin/bash"), 11);
    assert_eq!(prefix_len(b"// Some code\nfn main() {}"), 0);
    assert_eq!(prefix_len(b""), 0);
  }
}
