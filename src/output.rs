//! # Output Module
//!
//! This module centralizes the user-facing summary output for the relicense
//! tool: consistent formatting, colors, and symbols for terminal output.
//! Per-file progress lines come from `info_log!` in the processor; this
//! module only renders the end-of-run summaries.

use owo_colors::{OwoColorize, Stream};
use relicense::logging::is_quiet;
use relicense::processor::WalkSummary;

/// Symbols used in output
mod symbols {
  /// Nothing needed changing
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Files were (or would be) rewritten
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Print the summary line for the `header` command.
pub fn print_header_summary(summary: &WalkSummary, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let count = summary.files_changed;
  if count == 0 {
    println!(
      "{} No headers needed rewriting.",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
    );
    return;
  }

  let files_word = if count == 1 { "file" } else { "files" };
  let verb = if dry_run { "would change" } else { "changed" };
  println!(
    "{} {} {} {}.",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    count,
    files_word,
    verb
  );
}

/// Print the summary line for the `dates` command.
///
/// Reports both counters so "N of M files with a notice" is visible even
/// when nothing changed.
pub fn print_dates_summary(summary: &WalkSummary, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let changed = summary.files_changed;
  let with_notice = summary.files_with_notice;

  if changed == 0 {
    println!(
      "{} 0 of {} {} with a copyright notice changed.",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      with_notice,
      if with_notice == 1 { "file" } else { "files" }
    );
    return;
  }

  let verb = if dry_run { "would change" } else { "changed" };
  println!(
    "{} {} of {} {} with a copyright notice {}.",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    changed,
    with_notice,
    if with_notice == 1 { "file" } else { "files" },
    verb
  );
}
