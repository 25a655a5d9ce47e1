//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing, with one subcommand per rewrite
//! operation.

pub mod dates;
pub mod header;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};

use self::dates::DatesArgs;
use self::header::HeaderArgs;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Version string enriched with the commit the binary was built from.
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), " ", env!("GIT_DATE"), ")");

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  long_version = LONG_VERSION,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Replace detected copyright headers with the canonical text
  relicense header --header-file HEADER.txt src/

  # Only trigger on headers naming the holder
  relicense header --header-file HEADER.txt --holder \"IBM\" src/

  # Preview what would change without touching files
  relicense header --header-file HEADER.txt --dry-run --show-diff src/

  # Refresh year notices from git history
  relicense dates --holder \"IBM\" .

  # Save the would-be changes of a dates run to a diff file
  relicense dates --holder \"IBM\" --dry-run --save-diff changes.diff .
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
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Replace copyright header comment blocks with the canonical text
  Header(HeaderArgs),

  /// Refresh copyright year ranges from git history
  Dates(DatesArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
