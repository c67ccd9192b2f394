use clap::ValueEnum;

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Applies the mode to all `owo-colors` output of the process.
  ///
  /// [`ColorMode::Auto`] clears any override so stream detection decides.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Verbosity of user-facing output, chosen once by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
  /// File lists are truncated
  #[default]
  Normal,
  /// Only errors are printed
  Quiet,
  /// File lists are shown in full, with timing
  Verbose,
}

impl OutputMode {
  /// Picks the mode from the `--quiet` and `--debug` flags; quiet wins.
  pub const fn from_flags(quiet: bool, debug: bool) -> Self {
    if quiet {
      OutputMode::Quiet
    } else if debug {
      OutputMode::Verbose
    } else {
      OutputMode::Normal
    }
  }

  pub const fn is_quiet(self) -> bool {
    matches!(self, OutputMode::Quiet)
  }

  pub const fn is_verbose(self) -> bool {
    matches!(self, OutputMode::Verbose)
  }
}
