//! # relicense
//!
//! A tool that rewrites outdated copyright headers and refreshes copyright
//! years from git history.

mod cli;
mod output;

use anyhow::Result;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  match cli.command {
    Command::Header(args) => cli::header::run_header(args),
    Command::Dates(args) => cli::dates::run_dates(args),
  }
}
