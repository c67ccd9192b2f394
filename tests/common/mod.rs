#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use addlicense::license::License;
use addlicense::processor::{Mode, Processor, ProcessorConfig};
use anyhow::Result;

/// License text used across the integration tests.
pub const LICENSE_TEXT: &str = "Copyright 2025 Example Corp\nAll rights reserved.\n";

/// Writes `content` to `dir/relative`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Reads `path` as a UTF-8 string.
pub fn read_file(path: &Path) -> Result<String> {
  Ok(fs::read_to_string(path)?)
}

/// Writes the shared license text to `dir/LICENSE.txt`.
pub fn write_license(dir: &Path) -> Result<PathBuf> {
  write_file(dir, "LICENSE.txt", LICENSE_TEXT)
}

/// The shared license as an in-memory [`License`].
pub fn license() -> License {
  License::from_bytes(LICENSE_TEXT.as_bytes().to_vec())
}

/// Builds a processor for `mode` with the shared license and `ignore`
/// patterns.
pub fn processor(mode: Mode, ignore: &[&str]) -> Result<Processor> {
  let config = ProcessorConfig {
    ignore_patterns: ignore.iter().map(|p| p.to_string()).collect(),
    ..ProcessorConfig::new(license(), mode)
  };
  Ok(Processor::new(config)?)
}

/// Runs a full add pass over `root`.
pub fn add(root: &Path) -> Result<()> {
  processor(Mode::Add, &[])?.process(&[root])?;
  Ok(())
}

/// Runs a full remove pass over `root`.
pub fn remove(root: &Path) -> Result<()> {
  processor(Mode::Remove, &[])?.process(&[root])?;
  Ok(())
}
