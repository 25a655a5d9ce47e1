//! # Processor Module
//!
//! This module contains the directory walker and the per-file operations it
//! drives: rewriting copyright header blocks and refreshing year notices.
//!
//! The walk is sequential and depth-first. Version-control metadata
//! directories are never descended into. A failure while processing one file
//! is printed and does not interrupt the rest of the tree; change counters
//! are accumulated by value and returned to the caller.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::dates::{NoticeUpdater, YearResolver};
use crate::diff::DiffManager;
use crate::file_io::FileIO;
use crate::git::{Boundary, GitHistory, HistoryError};
use crate::header::HeaderRewriter;
use crate::{info_log, verbose_log};

/// What one file operation did.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileOutcome {
  /// The file was rewritten (or would be, in dry-run mode).
  pub changed: bool,

  /// The file carried a header/notice the operation recognizes.
  pub had_notice: bool,
}

/// Accumulated counts for a whole walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
  /// Files rewritten (or reported as would-be-rewritten in dry-run mode).
  pub files_changed: usize,

  /// Files that carried a recognized header/notice at all.
  pub files_with_notice: usize,
}

/// A per-file operation applied by the walker.
pub trait FileOp {
  fn apply(&self, path: &Path) -> Result<FileOutcome>;
}

/// Sequential recursive walker over a root directory.
pub struct Processor<'a> {
  root: &'a Path,
  op: &'a dyn FileOp,
}

impl<'a> Processor<'a> {
  pub const fn new(root: &'a Path, op: &'a dyn FileOp) -> Self {
    Self { root, op }
  }

  /// Walks the tree and applies the operation to every regular file.
  ///
  /// Per-file errors are printed as `<path> error: <message>` and the walk
  /// continues; the summary always reflects every file that was reached.
  pub fn run(&self) -> WalkSummary {
    let mut summary = WalkSummary::default();

    let walker = WalkDir::new(self.root)
      .follow_links(false)
      .into_iter()
      .filter_entry(|entry| !is_vcs_metadata_dir(entry));

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          eprintln!("Error reading directory entry: {e}");
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      match self.op.apply(entry.path()) {
        Ok(outcome) => {
          if outcome.changed {
            summary.files_changed += 1;
          }
          if outcome.had_notice {
            summary.files_with_notice += 1;
          }
        }
        Err(e) => {
          println!("{} error: {}", entry.path().display(), e);
        }
      }
    }

    debug!(
      "Walk finished: {} changed, {} with a notice",
      summary.files_changed, summary.files_with_notice
    );

    summary
  }
}

/// Directories named with a VCS metadata prefix are never descended into.
fn is_vcs_metadata_dir(entry: &DirEntry) -> bool {
  entry.file_type().is_dir()
    && entry
      .file_name()
      .to_str()
      .is_some_and(|name| name.starts_with(".git"))
}

/// Replaces copyright header blocks with the canonical text.
pub struct RewriteHeaders {
  rewriter: HeaderRewriter,
  dry_run: bool,
  diff: DiffManager,
}

impl RewriteHeaders {
  pub const fn new(rewriter: HeaderRewriter, dry_run: bool, diff: DiffManager) -> Self {
    Self { rewriter, dry_run, diff }
  }
}

impl FileOp for RewriteHeaders {
  fn apply(&self, path: &Path) -> Result<FileOutcome> {
    let Some(content) = FileIO::read_text(path)? else {
      trace!("Skipping: {} (not valid text)", path.display());
      return Ok(FileOutcome::default());
    };

    let outcome = self.rewriter.rewrite(&content);
    if !outcome.replaced {
      return Ok(FileOutcome::default());
    }

    self.diff.display_diff(path, &content, &outcome.content)?;

    if self.dry_run {
      info_log!("Would rewrite header in: {}", path.display());
    } else {
      FileIO::write_text(path, &outcome.content)?;
      info_log!("Rewrote header in: {}", path.display());
    }

    Ok(FileOutcome {
      changed: true,
      had_notice: true,
    })
  }
}

/// Refreshes the year range in year-notice lines from git history.
pub struct RefreshDates {
  updater: NoticeUpdater,
  history: GitHistory,
  dry_run: bool,
  diff: DiffManager,
}

impl RefreshDates {
  pub const fn new(updater: NoticeUpdater, history: GitHistory, dry_run: bool, diff: DiffManager) -> Self {
    Self {
      updater,
      history,
      dry_run,
      diff,
    }
  }
}

/// Binds a [`GitHistory`] to one file path for the notice updater.
struct PathHistory<'a> {
  history: &'a GitHistory,
  path: &'a Path,
}

impl YearResolver for PathHistory<'_> {
  fn latest_year(&self) -> Result<Option<String>, HistoryError> {
    self.history.boundary_year(self.path, Boundary::Latest)
  }

  fn earliest_year(&self) -> Result<Option<String>, HistoryError> {
    self.history.boundary_year(self.path, Boundary::Earliest)
  }
}

impl FileOp for RefreshDates {
  fn apply(&self, path: &Path) -> Result<FileOutcome> {
    let Some(content) = FileIO::read_text(path)? else {
      trace!("Skipping: {} (not valid text)", path.display());
      return Ok(FileOutcome::default());
    };

    let resolver = PathHistory {
      history: &self.history,
      path,
    };

    // A history failure propagates here and leaves the file unmodified;
    // the walker prints it and moves on.
    let outcome = self.updater.update(&content, &resolver)?;

    if outcome.changed {
      self.diff.display_diff(path, &content, &outcome.content)?;

      if self.dry_run {
        info_log!("Would update years in: {}", path.display());
      } else {
        FileIO::write_text(path, &outcome.content)?;
        info_log!("Updated years in: {}", path.display());
      }
    } else if outcome.had_notice {
      verbose_log!("Notice already current in: {}", path.display());
    }

    Ok(FileOutcome {
      changed: outcome.changed,
      had_notice: outcome.had_notice,
    })
  }
}
