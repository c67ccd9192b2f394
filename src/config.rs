//! # Configuration Module
//!
//! This module provides configuration support for addlicense, allowing users
//! to add comment styles for file types the built-in table does not know and
//! to keep a project's ignore patterns next to the code.
//!
//! Configuration can be specified in a `.addlicense.toml` file, via the
//! `ADDLICENSE_CONFIG` environment variable, or with `--config`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".addlicense.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "ADDLICENSE_CONFIG";

/// User-defined comment style configuration.
///
/// With neither `top` nor `bottom` set this describes a line comment whose
/// prefix is `middle`; otherwise it describes a block comment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommentStyleConfig {
  /// The string opening a comment block (e.g., "/*").
  #[serde(default)]
  pub top: String,

  /// The string written at the beginning of each license line (e.g., " * " or
  /// "// ").
  #[serde(default)]
  pub middle: String,

  /// The string closing a comment block (e.g., " */").
  #[serde(default)]
  pub bottom: String,
}

impl CommentStyleConfig {
  /// Create a new line-comment style.
  pub fn line(prefix: &str) -> Self {
    Self {
      top: String::new(),
      middle: prefix.to_string(),
      bottom: String::new(),
    }
  }

  /// Create a new block-comment style.
  pub fn block(top: &str, middle: &str, bottom: &str) -> Self {
    Self {
      top: top.to_string(),
      middle: middle.to_string(),
      bottom: bottom.to_string(),
    }
  }

  fn is_line(&self) -> bool {
    self.top.is_empty() && self.bottom.is_empty()
  }
}

/// Main configuration struct for addlicense.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// Ignore patterns appended to the ones given with `--ignore`.
  #[serde(default)]
  pub ignore: Vec<String>,

  /// Custom comment styles for file extensions.
  /// Keys are file extensions without the leading dot (e.g., "java", "xyz").
  #[serde(default, rename = "comment-styles")]
  pub comment_styles: HashMap<String, CommentStyleConfig>,

  /// Filename-specific comment style overrides.
  /// Keys are exact filenames or glob patterns (e.g., "Justfile",
  /// "*.cmake.in").
  #[serde(default)]
  pub filenames: HashMap<String, CommentStyleConfig>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A comment style configuration is invalid.
  #[error("Invalid comment style for '{key}': {message}")]
  InvalidCommentStyle { key: String, message: String },

  /// An ignore pattern or filename glob does not compile.
  #[error("Invalid pattern '{pattern}' in config: {source}")]
  InvalidPattern {
    pattern: String,
    source: glob::PatternError,
  },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, is not valid TOML, or
  /// contains an invalid comment style or pattern.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config = Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })?;

    debug!(
      "Loaded {} comment style overrides and {} ignore patterns",
      config.comment_styles.len() + config.filenames.len(),
      config.ignore.len()
    );

    Ok(config)
  }

  /// Parse, validate and normalize configuration from TOML text.
  ///
  /// # Errors
  ///
  /// Returns an error if the text is not valid TOML or fails validation.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;

    config.validate()?;

    Ok(config.normalize())
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - Line styles have a non-empty `middle`
  /// - Extension names don't include the leading dot
  /// - Ignore patterns and filename globs compile
  fn validate(&self) -> Result<(), ConfigError> {
    for (ext, style) in &self.comment_styles {
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidCommentStyle {
          key: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
      validate_style(ext, style)?;
    }

    for (filename, style) in &self.filenames {
      validate_style(filename, style)?;
      validate_pattern(filename)?;
    }

    for pattern in &self.ignore {
      validate_pattern(pattern)?;
    }

    Ok(())
  }

  /// Check if the configuration has any comment style overrides.
  pub fn has_overrides(&self) -> bool {
    !self.comment_styles.is_empty() || !self.filenames.is_empty()
  }

  /// Normalize keys to lowercase for case-insensitive matching.
  fn normalize(self) -> Self {
    let comment_styles = self
      .comment_styles
      .into_iter()
      .map(|(k, v)| (k.to_lowercase(), v))
      .collect();

    let filenames = self.filenames.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect();

    Self {
      ignore: self.ignore,
      comment_styles,
      filenames,
    }
  }
}

fn validate_style(key: &str, style: &CommentStyleConfig) -> Result<(), ConfigError> {
  if style.is_line() && style.middle.is_empty() {
    return Err(ConfigError::InvalidCommentStyle {
      key: key.to_string(),
      message: "middle field cannot be empty for a line comment".to_string(),
    });
  }
  Ok(())
}

fn validate_pattern(pattern: &str) -> Result<(), ConfigError> {
  glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
    pattern: pattern.to_string(),
    source,
  })?;
  Ok(())
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `ADDLICENSE_CONFIG` environment variable
/// 3. `.addlicense.toml` in `base_dir`
///
/// An explicit path is returned even if it does not exist so that loading
/// reports the missing file instead of silently ignoring it.
pub fn discover_config_path(explicit_path: Option<&Path>, base_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    debug!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      debug!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    debug!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = base_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    debug!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  debug!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when discovery is disabled or no file is found.
///
/// # Errors
///
/// Returns [`crate::error::Error::Config`] if a discovered config file cannot be loaded.
pub fn load_config(explicit_path: Option<&Path>, base_dir: &Path, no_config: bool) -> crate::error::Result<Option<Config>> {
  if no_config {
    debug!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  let config = discover_config_path(explicit_path, base_dir)
    .map(|path| Config::load(&path))
    .transpose()?;
  Ok(config)
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;
  use crate::error::Error;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "ignore = [\"vendor/*\", \"*.pb.go\"]\n",
      "\n",
      "[comment-styles]\n",
      "Java = { middle = \"// \" }\n",
      "xyz = { top = \"/*\", middle = \" * \", bottom = \" */\" }\n",
      "\n",
      "[filenames]\n",
      "\"Justfile\" = { middle = \"# \" }\n",
    );

    let config = Config::parse(config_content).expect("valid config should parse");

    assert_eq!(config.ignore, vec!["vendor/*".to_string(), "*.pb.go".to_string()]);
    assert_eq!(config.comment_styles.len(), 2);
    assert_eq!(config.filenames.len(), 1);

    let java_style = config.comment_styles.get("java").expect("keys are lowercased");
    assert_eq!(java_style, &CommentStyleConfig::line("// "));

    let xyz_style = config.comment_styles.get("xyz").expect("xyz should exist");
    assert_eq!(xyz_style, &CommentStyleConfig::block("/*", " * ", " */"));

    assert!(config.filenames.contains_key("justfile"));
  }

  #[test]
  fn test_parse_empty_config() {
    let config = Config::parse("").expect("empty config should parse");

    assert!(config.ignore.is_empty());
    assert!(!config.has_overrides());
  }

  #[test]
  fn test_parse_rejects_unknown_keys() {
    let result = Config::parse("colour = true\n");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
  }

  #[test]
  fn test_validate_empty_middle_line_style() {
    let result = Config::parse("[comment-styles]\nbad = { middle = \"\" }\n");
    assert!(matches!(result, Err(ConfigError::InvalidCommentStyle { .. })));
  }

  #[test]
  fn test_validate_allows_empty_middle_in_block_style() {
    let config = Config::parse("[comment-styles]\nj3 = { top = \"{#\", bottom = \"#}\" }\n").expect("block style is valid");
    assert_eq!(config.comment_styles["j3"].middle, "");
  }

  #[test]
  fn test_validate_leading_dot() {
    let result = Config::parse("[comment-styles]\n\".bad\" = { middle = \"// \" }\n");
    assert!(matches!(result, Err(ConfigError::InvalidCommentStyle { .. })));
  }

  #[test]
  fn test_validate_bad_ignore_pattern() {
    let result = Config::parse("ignore = [\"[unterminated\"]\n");
    assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
  }

  #[test]
  fn test_load_config_from_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);

    std::fs::write(&config_path, concat!("[comment-styles]\n", "custom = { middle = \"## \" }\n",))
      .expect("write config");

    let config = load_config(None, temp_dir.path(), false)
      .expect("load should succeed")
      .expect("config should be discovered");
    assert_eq!(config.comment_styles.len(), 1);
  }

  #[test]
  fn test_load_config_parse_error_names_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "ignore = [").expect("write config");

    let err = Config::load(&config_path).expect_err("broken TOML should fail");
    assert!(err.to_string().contains("broken.toml"));
  }

  #[test]
  fn test_explicit_missing_config_is_an_error() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let missing = temp_dir.path().join("missing.toml");

    let result = load_config(Some(&missing), temp_dir.path(), false);
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadError { .. }))));
  }

  #[test]
  fn test_no_config_skips_discovery() {
    let temp_dir = TempDir::new().expect("create temp dir");
    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "ignore = [\"x\"]\n").expect("write config");

    let config = load_config(None, temp_dir.path(), true).expect("no error");
    assert!(config.is_none());
  }
}
