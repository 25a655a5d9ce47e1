//! # Diff Module
//!
//! Renders diffs between the original and rewritten content of a file, for
//! previewing changes in dry-run mode. Diffs go to stderr and/or are
//! appended to a single consolidated diff file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for header/notice rewrites.
pub struct DiffManager {
  /// Whether to print diffs to stderr.
  pub show_diff: bool,

  /// Path to append diffs to, if any.
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Truncates a stale diff file from a previous run so this run's diffs
  /// start from an empty file.
  pub fn init(&self) -> Result<()> {
    if let Some(ref diff_path) = self.save_diff_path {
      std::fs::write(diff_path, "").with_context(|| format!("Failed to reset diff file: {}", diff_path.display()))?;
    }
    Ok(())
  }

  const fn enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Renders the line diff between `original` and `new` for `path`.
  ///
  /// No-op unless showing or saving was requested.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.enabled() {
      return Ok(());
    }

    let diff = TextDiff::from_lines(original, new);

    let mut rendered = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      rendered.push_str(&format!("{sign}{change}"));
    }
    rendered.push('\n');

    if self.show_diff {
      eprint!("{rendered}");
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(rendered.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
