//! # Comment Style Module
//!
//! This module maps file paths to the comment syntax used to wrap a license
//! and renders license lines in that syntax.
//!
//! The module includes:
//! - [`CommentStyle`] for describing line and block comments
//! - [`CommentStyleResolver`] for choosing a style for a path, with a
//!   [`BuiltinResolver`] backed by a fixed extension table and a
//!   [`ConfigurableResolver`] that layers user overrides on top
//!
//! A path whose extension is not in the table resolves to `None` and is never
//! touched.
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use addlicense::comment::{BuiltinResolver, CommentStyle, CommentStyleResolver};
//!
//! let style = BuiltinResolver.resolve(Path::new("main.go"));
//! assert_eq!(style, Some(CommentStyle::line("// ")));
//!
//! assert_eq!(BuiltinResolver.resolve(Path::new("notes.xyz")), None);
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::trace;

use crate::config::{CommentStyleConfig, Config};

/// Comment syntax used to wrap a license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentStyle {
  /// Every line carries the same prefix (e.g. `// ` or `# `).
  Line { prefix: String },

  /// Lines sit between an opening and closing delimiter, each line carrying
  /// `middle` (e.g. `/*`, ` * `, ` */`). `middle` may be empty.
  Block { open: String, middle: String, close: String },
}

impl CommentStyle {
  /// Create a line-comment style.
  pub fn line(prefix: &str) -> Self {
    Self::Line {
      prefix: prefix.to_string(),
    }
  }

  /// Create a block-comment style.
  pub fn block(open: &str, middle: &str, close: &str) -> Self {
    Self::Block {
      open: open.to_string(),
      middle: middle.to_string(),
      close: close.to_string(),
    }
  }

  /// The prefix written in front of each license line.
  pub fn line_prefix(&self) -> &str {
    match self {
      Self::Line { prefix } => prefix,
      Self::Block { middle, .. } => middle,
    }
  }

  /// Renders `lines` in this comment syntax.
  ///
  /// Each output line ends with `\n`. Empty license lines get the prefix with
  /// its trailing whitespace trimmed so the header never carries trailing
  /// spaces. No separator blank line is appended; that belongs to the writer.
  pub fn wrap<'a>(&self, lines: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    let mut out = Vec::new();

    if let Self::Block { open, .. } = self {
      out.extend_from_slice(open.as_bytes());
      out.push(b'\n');
    }

    let prefix = self.line_prefix();
    for line in lines {
      if line.is_empty() {
        out.extend_from_slice(prefix.trim_end().as_bytes());
      } else {
        out.extend_from_slice(prefix.as_bytes());
        out.extend_from_slice(line);
      }
      out.push(b'\n');
    }

    if let Self::Block { close, .. } = self {
      out.extend_from_slice(close.as_bytes());
      out.push(b'\n');
    }

    out
  }
}

impl From<&CommentStyleConfig> for CommentStyle {
  fn from(config: &CommentStyleConfig) -> Self {
    if config.top.is_empty() && config.bottom.is_empty() {
      Self::line(&config.middle)
    } else {
      Self::block(&config.top, &config.middle, &config.bottom)
    }
  }
}

/// Trait for resolving comment styles for file paths.
///
/// Returning `None` marks the file as unsupported: it is skipped by both add
/// and remove without raising an error.
pub trait CommentStyleResolver: Send + Sync {
  /// Resolve the comment style for the given file path.
  fn resolve(&self, path: &Path) -> Option<CommentStyle>;
}

/// Resolver backed by the built-in extension table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinResolver;

impl CommentStyleResolver for BuiltinResolver {
  fn resolve(&self, path: &Path) -> Option<CommentStyle> {
    builtin_style_for_file(path)
  }
}

/// Resolver that checks user configuration first, then falls back to the
/// built-in table.
///
/// Precedence: exact filename, filename glob, extension override, builtin.
#[derive(Debug)]
pub struct ConfigurableResolver {
  filenames: HashMap<String, CommentStyle>,
  filename_globs: Vec<(glob::Pattern, CommentStyle)>,
  extensions: HashMap<String, CommentStyle>,
}

impl ConfigurableResolver {
  /// Create a resolver from the comment style sections of `config`.
  ///
  /// Filename globs that fail to compile are treated as exact names; config
  /// validation has already rejected malformed globs.
  pub fn new(config: &Config) -> Self {
    let mut filenames = HashMap::new();
    let mut filename_globs = Vec::new();

    for (name, style) in &config.filenames {
      let style = CommentStyle::from(style);
      let is_glob = name.contains(['*', '?', '[']);
      match glob::Pattern::new(name) {
        Ok(pattern) if is_glob => filename_globs.push((pattern, style)),
        _ => {
          filenames.insert(name.clone(), style);
        }
      }
    }

    let extensions = config
      .comment_styles
      .iter()
      .map(|(ext, style)| (ext.clone(), CommentStyle::from(style)))
      .collect();

    Self {
      filenames,
      filename_globs,
      extensions,
    }
  }
}

impl CommentStyleResolver for ConfigurableResolver {
  fn resolve(&self, path: &Path) -> Option<CommentStyle> {
    let file_name = lowercase_file_name(path);

    if let Some(style) = self.filenames.get(&file_name) {
      trace!("Using config filename override for: {}", file_name);
      return Some(style.clone());
    }

    for (pattern, style) in &self.filename_globs {
      if pattern.matches(&file_name) {
        trace!("Using config filename glob override '{}' for: {}", pattern, file_name);
        return Some(style.clone());
      }
    }

    if let Some(style) = self.extensions.get(&lowercase_extension(path)) {
      trace!("Using config extension override for: {}", path.display());
      return Some(style.clone());
    }

    builtin_style_for_file(path)
  }
}

/// Create a comment style resolver for an optional configuration.
pub fn create_resolver(config: Option<&Config>) -> Box<dyn CommentStyleResolver> {
  match config {
    Some(cfg) if cfg.has_overrides() => Box::new(ConfigurableResolver::new(cfg)),
    _ => Box::new(BuiltinResolver),
  }
}

fn lowercase_file_name(path: &Path) -> String {
  path
    .file_name()
    .and_then(|name| name.to_str())
    .unwrap_or("")
    .to_lowercase()
}

fn lowercase_extension(path: &Path) -> String {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .unwrap_or("")
    .to_lowercase()
}

/// Determines the comment style for a file from the built-in table.
///
/// Filename rules are checked first so that names like `CMakeLists.txt` and
/// `config.cmake.in` are not mistaken for their trailing extension.
fn builtin_style_for_file(path: &Path) -> Option<CommentStyle> {
  let file_name = lowercase_file_name(path);

  if file_name == "cmakelists.txt"
    || file_name == "makefile"
    || file_name == "dockerfile"
    || file_name.ends_with(".cmake.in")
    || file_name.ends_with(".dockerfile")
  {
    return Some(CommentStyle::line("# "));
  }

  let style = match lowercase_extension(path).as_str() {
    "c" | "h" | "gv" | "java" | "scala" | "kt" | "kts" => CommentStyle::block("/*", " * ", " */"),
    "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" | "css" | "scss" | "sass" => CommentStyle::block("/**", " * ", " */"),
    "cc" | "cpp" | "cs" | "go" | "hcl" | "hh" | "hpp" | "m" | "mm" | "proto" | "rs" | "swift" | "dart" | "groovy"
    | "v" | "sv" | "php" => CommentStyle::line("// "),
    "py" | "sh" | "bash" | "yaml" | "yml" | "rb" | "tcl" | "tf" | "bzl" | "pl" | "pp" | "toml" | "cmake" => {
      CommentStyle::line("# ")
    }
    "el" | "lisp" => CommentStyle::line(";; "),
    "erl" => CommentStyle::line("% "),
    "hs" | "sql" | "sdl" | "lua" => CommentStyle::line("-- "),
    "html" | "xml" | "vue" | "wxi" | "wxl" | "wxs" => CommentStyle::block("<!--", " ", "-->"),
    "j2" => CommentStyle::block("{#", "", "#}"),
    "ml" | "mli" | "mll" | "mly" => CommentStyle::block("(**", "   ", "*)"),
    _ => return None,
  };

  Some(style)
}
