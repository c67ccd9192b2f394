//! # addlicense
//!
//! A tool that adds or removes license headers in source files.

use addlicense::cli::{Cli, run};
use anyhow::Result;

fn main() -> Result<()> {
  run(Cli::parse_args())
}
