//! # addlicense
//!
//! A tool that adds license headers to, or removes them from, source files
//! across a directory tree.
//!
//! `addlicense` modifies source files in place. It never adds a header to a
//! file that already starts with it, and keeps shebangs and similar
//! must-stay-first lines at the top.
//!
//! ## Features
//!
//! * Recursively scan directories, skipping paths that match shell glob
//!   ignore patterns
//! * Automatic comment syntax per file type, with overrides from a
//!   `.addlicense.toml` configuration file
//! * Byte-exact header detection, so adding is idempotent and removing
//!   undoes adding
//! * Atomic writes that keep file permissions
//! * Dry-run mode that prints a diff instead of writing
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use addlicense::license::License;
//! use addlicense::processor::{Mode, Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let license = License::load(Path::new("LICENSE.txt"))?;
//!
//!     let processor = Processor::new(ProcessorConfig {
//!         ignore_patterns: vec!["vendor/*".to_string()],
//!         ..ProcessorConfig::new(license, Mode::Add)
//!     })?;
//!
//!     let summary = processor.process(&["src"])?;
//!     println!("Added license to {} files", summary.added());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Walks root paths and rewrites each candidate file
//! * [`detector`] - Locates an existing license header
//! * [`comment`] - Comment styles and their per-file resolution
//! * [`ignore`] - Ignore pattern matching
//! * [`config`] - Configuration file loading

pub mod cli;
pub mod comment;
pub mod config;
pub mod detector;
pub mod diff;
pub mod error;
pub mod ignore;
pub mod license;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
