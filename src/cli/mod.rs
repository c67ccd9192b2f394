//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing with one subcommand per mode.

mod run;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
pub use run::{LicenseArgs, run};

use crate::logging::ColorMode;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Add license headers to every supported file under src/
  addlicense add --license LICENSE.txt src/

  # Preview the change without touching any file
  addlicense add --dry-run --license LICENSE.txt .

  # Skip vendored and generated code
  addlicense add --license LICENSE.txt --ignore \"vendor/*\" --ignore \"*.pb.go\" .

  # Remove previously added headers
  addlicense remove --license LICENSE.txt src/
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,

  #[command(flatten)]
  pub global: GlobalArgs,
}

/// Flags shared by all subcommands
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
  /// Enable verbose diagnostic output
  #[arg(long, global = true)]
  pub debug: bool,

  /// Suppress all output except errors
  #[arg(short, long, global = true)]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    global = true,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Add the license header to files that lack it
  Add(LicenseArgs),

  /// Remove the license header from files that carry it
  Remove(LicenseArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_add_with_repeated_ignore() {
    let cli = Cli::try_parse_from([
      "addlicense",
      "add",
      "--license",
      "LICENSE.txt",
      "--ignore",
      "vendor/*",
      "--ignore",
      "*.pb.go",
      "src",
      "lib",
    ])
    .expect("valid arguments");

    let Command::Add(args) = cli.command else {
      panic!("expected add subcommand");
    };
    assert_eq!(args.license, Some(PathBuf::from("LICENSE.txt")));
    assert_eq!(args.ignore, ["vendor/*", "*.pb.go"]);
    assert_eq!(args.paths, [PathBuf::from("src"), PathBuf::from("lib")]);
    assert!(!args.dry_run);
  }

  #[test]
  fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["addlicense", "remove", "--license", "L", "--debug", "--colors", "never", "."])
      .expect("valid arguments");

    assert!(matches!(cli.command, Command::Remove(_)));
    assert!(cli.global.debug);
    assert_eq!(cli.global.colors, ColorMode::Never);
  }

  #[test]
  fn test_paths_are_required() {
    assert!(Cli::try_parse_from(["addlicense", "add", "--license", "L"]).is_err());
  }
}
