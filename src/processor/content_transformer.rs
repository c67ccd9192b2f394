//! # Content Transformer Module
//!
//! This module produces the new file content for adding or removing a
//! license header, given a [`Detection`] for the current content.

use std::borrow::Cow;

use crate::detector::Detection;

/// Content transformation utilities for license processing.
///
/// Both operations return [`Cow::Borrowed`] when nothing changes so callers
/// can skip the write entirely.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentTransformer;

impl ContentTransformer {
  pub const fn new() -> Self {
    Self
  }

  /// Inserts `wrapped` at the detected position.
  ///
  /// The header is followed by exactly one blank line unless nothing follows
  /// it. A prefix line that lacks a trailing newline gets one so the header
  /// starts on its own line.
  pub fn add_license<'a>(&self, content: &'a [u8], wrapped: &[u8], detection: Detection) -> Cow<'a, [u8]> {
    let insert_at = match detection {
      Detection::Present { .. } => return Cow::Borrowed(content),
      Detection::Absent { insert_at } => insert_at,
    };

    let (prefix, remainder) = content.split_at(insert_at);
    let mut out = Vec::with_capacity(content.len() + wrapped.len() + 2);

    out.extend_from_slice(prefix);
    if !prefix.is_empty() && !prefix.ends_with(b"\n") {
      out.push(b'\n');
    }

    out.extend_from_slice(wrapped);
    if !remainder.is_empty() {
      out.push(b'\n');
    }

    out.extend_from_slice(remainder);
    Cow::Owned(out)
  }

  /// Cuts the detected header, and its separator blank line, out of
  /// `content`.
  pub fn remove_license<'a>(&self, content: &'a [u8], detection: Detection) -> Cow<'a, [u8]> {
    match detection {
      Detection::Absent { .. } => Cow::Borrowed(content),
      Detection::Present { start, end } => {
        let mut out = Vec::with_capacity(content.len() - (end - start));
        out.extend_from_slice(&content[..start]);
        out.extend_from_slice(&content[end..]);
        Cow::Owned(out)
      }
    }
  }
}
