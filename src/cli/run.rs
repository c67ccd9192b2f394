//! # Run Command
//!
//! This module implements the `add` and `remove` commands. Both share the
//! same arguments and differ only in the [`Mode`] handed to the processor.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use super::{Cli, Command};
use crate::comment::create_resolver;
use crate::config::load_config;
use crate::license::License;
use crate::logging::{OutputMode, init_tracing};
use crate::output::Output;
use crate::processor::{Mode, Processor, ProcessorConfig};

/// Arguments for the add and remove commands
#[derive(Args, Debug, Default)]
pub struct LicenseArgs {
  /// Files or directories to process. Directories are processed recursively.
  #[arg(required = true, value_name = "PATH")]
  pub paths: Vec<PathBuf>,

  /// Path to the license text file
  #[arg(long, short = 'l', value_name = "FILE")]
  pub license: Option<PathBuf>,

  /// Shell glob patterns for files or directories to skip (repeatable)
  #[arg(long, short = 'i', value_name = "PATTERN")]
  pub ignore: Vec<String>,

  /// Show the changes as a diff without modifying files
  #[arg(long)]
  pub dry_run: bool,

  /// Path to config file (default: .addlicense.toml in the current directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,
}

impl LicenseArgs {
  /// Validate the arguments and return the license path
  fn license_path(&self) -> Result<&PathBuf> {
    match &self.license {
      Some(path) if !path.as_os_str().is_empty() => Ok(path),
      Some(_) => bail!("License file path can't be empty"),
      None => bail!("Missing required argument: --license <FILE>"),
    }
  }
}

/// Run the command selected on the command line.
///
/// # Errors
///
/// Returns an error for invalid arguments, an unreadable or empty license,
/// an invalid configuration, a traversal failure, or when any file failed.
pub fn run(cli: Cli) -> Result<()> {
  init_tracing(cli.global.debug);
  cli.global.colors.apply();

  let (mode, args) = match cli.command {
    Command::Add(args) => (Mode::Add, args),
    Command::Remove(args) => (Mode::Remove, args),
  };
  let output_mode = OutputMode::from_flags(cli.global.quiet, cli.global.debug);

  run_mode(mode, args, output_mode)
}

fn run_mode(mode: Mode, args: LicenseArgs, output_mode: OutputMode) -> Result<()> {
  let license_path = args.license_path()?;

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let config = load_config(args.config.as_deref(), &current_dir, args.no_config)?;

  let license = License::load(license_path)?;

  let mut ignore_patterns = args.ignore.clone();
  if let Some(cfg) = &config {
    debug!("Using configuration file for ignore patterns and comment styles");
    ignore_patterns.extend(cfg.ignore.iter().cloned());
  }

  let processor = Processor::new(ProcessorConfig {
    ignore_patterns,
    dry_run: args.dry_run,
    resolver: Some(create_resolver(config.as_ref())),
    ..ProcessorConfig::new(license, mode)
  })?;

  debug!("Running {} on {} path(s)", mode, args.paths.len());
  let summary = processor.process(&args.paths)?;

  Output::new(output_mode, Some(current_dir)).print_run(&summary, mode, args.dry_run);

  let failed = summary.failed();
  if failed > 0 {
    bail!(
      "Failed to {} license in {} {}",
      mode,
      failed,
      if failed == 1 { "file" } else { "files" }
    );
  }

  Ok(())
}
