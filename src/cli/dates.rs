//! # Dates Command
//!
//! Refreshes the year range in copyright year notices from git history.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use relicense::config::load_config;
use relicense::dates::NoticeUpdater;
use relicense::diff::DiffManager;
use relicense::git::GitHistory;
use relicense::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use relicense::processor::{Processor, RefreshDates};
use tracing::debug;

use crate::output::print_dates_summary;

/// Arguments for the dates command
#[derive(Args, Debug, Default)]
pub struct DatesArgs {
  /// Root directory to process in place (also the git working directory)
  pub path: PathBuf,

  /// Holder named in the year-notice line (required unless configured)
  #[arg(long, value_name = "NAME")]
  pub holder: Option<String>,

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

/// Run the dates command with the given arguments
pub fn run_dates(args: DatesArgs) -> Result<()> {
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

  // The notice prefix names the holder, so one has to come from somewhere
  let Some(holder) = args.holder.clone().or_else(|| config.holder.clone()) else {
    eprintln!("ERROR: No holder marker: pass --holder or set `holder` in the config");
    process::exit(1)
  };

  let updater = NoticeUpdater::new(&config.comment_marker, &holder);
  let history = GitHistory::new(&args.path);

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff.clone());
  diff_manager.init()?;

  let op = RefreshDates::new(updater, history, args.dry_run, diff_manager);
  let summary = Processor::new(&args.path, &op).run();

  // History lookups that failed were already printed per file; the run
  // itself always completes with a summary and a zero exit code.
  print_dates_summary(&summary, args.dry_run);

  Ok(())
}
