//! # Header Command
//!
//! Replaces detected copyright header blocks with the canonical text across
//! a source tree.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use relicense::config::{Config, load_config};
use relicense::diff::DiffManager;
use relicense::header::HeaderRewriter;
use relicense::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use relicense::processor::{Processor, RewriteHeaders};
use tracing::debug;

use crate::output::print_header_summary;

/// Arguments for the header command
#[derive(Args, Debug, Default)]
pub struct HeaderArgs {
  /// Root directory to process in place
  pub path: PathBuf,

  /// Require this holder marker on the trigger line in addition to
  /// "copyright"
  #[arg(long, value_name = "NAME")]
  pub holder: Option<String>,

  /// File containing the canonical header text (required unless configured)
  #[arg(long, short = 'f', value_name = "FILE")]
  pub header_file: Option<PathBuf>,

  /// Dry run mode: report and preview changes without modifying files
  #[arg(long)]
  pub dry_run: bool,

  /// Show diff of changes on stderr
  #[arg(long)]
  pub show_diff: bool,

  /// Save diff of changes to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Path to config file (default: .relicense.toml in the processed root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the header command with the given arguments
pub fn run_header(args: HeaderArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if !args.path.is_dir() {
    eprintln!("ERROR: '{}' is not a directory", args.path.display());
    process::exit(1);
  }

  // Load configuration file if present
  let config = load_config(args.config.as_deref(), &args.path, args.no_config)?;
  if config.is_some() {
    debug!("Using configuration file");
  }
  let config = config.unwrap_or_default();

  // CLI flags take precedence over config
  let holder = args.holder.clone().or_else(|| config.holder.clone());
  let canonical = resolve_canonical_text(&args, &config)?;

  let rewriter = HeaderRewriter::new(config.comment_marker.clone(), holder, canonical);

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff.clone());
  diff_manager.init()?;

  let op = RewriteHeaders::new(rewriter, args.dry_run, diff_manager);
  let summary = Processor::new(&args.path, &op).run();

  // Per-file errors were already printed during the walk; the run itself
  // always completes with a summary and a zero exit code.
  print_header_summary(&summary, args.dry_run);

  Ok(())
}

/// Resolves the canonical header lines from the CLI or config.
///
/// Precedence: `--header-file`, then inline `header` in config, then the
/// config's `header-file`. Having none is a usage error.
fn resolve_canonical_text(args: &HeaderArgs, config: &Config) -> Result<Vec<String>> {
  let text = if let Some(ref path) = args.header_file {
    read_header_file(path)?
  } else if let Some(ref inline) = config.header {
    inline.clone()
  } else if let Some(ref path) = config.header_file {
    read_header_file(path)?
  } else {
    eprintln!("ERROR: No canonical header text: pass --header-file or set `header` in the config");
    process::exit(1)
  };

  let lines: Vec<String> = text.lines().map(str::to_string).collect();
  if lines.iter().all(|line| line.trim().is_empty()) {
    eprintln!("ERROR: Canonical header text is empty");
    process::exit(1);
  }

  Ok(lines)
}

fn read_header_file(path: &std::path::Path) -> Result<String> {
  std::fs::read_to_string(path).with_context(|| format!("Failed to read header file: {}", path.display()))
}
