//! # Logging Module
//!
//! Diagnostics go through [`tracing`]. The library only emits events; the
//! binary installs a subscriber once at startup via [`init_tracing`].
//!
//! Filter precedence: `RUST_LOG` when set, otherwise `debug` with `--debug`,
//! otherwise `warn`. Events are written to stderr so stdout stays reserved
//! for the run summary.
//!
//! ## Example
//!
//! ```rust
//! use addlicense::logging::{ColorMode, init_tracing};
//!
//! init_tracing(false);
//! ColorMode::Auto.apply();
//!
//! tracing::debug!("Processing file: {}", "example.rs");
//! ```

mod modes;

pub use modes::{ColorMode, OutputMode};
use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
pub const fn default_directive(debug: bool) -> &'static str {
  if debug { "debug" } else { "warn" }
}

/// Installs the global fmt subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing(debug: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}
