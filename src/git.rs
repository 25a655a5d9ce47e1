//! # Git Module
//!
//! This module contains the version-control collaborator for the date
//! resolver: it shells out to `git log` to recover the boundary commit
//! timestamps of a file.
//!
//! Git is treated as an opaque external service. A query asks for one
//! ISO-8601 author timestamp per revision, newest first, and selects either
//! the first line (latest revision) or the last line (earliest revision) of
//! the captured output. Failure is signaled by a non-empty error stream.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

/// Which end of a file's history to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
  /// The oldest revision touching the file.
  Earliest,
  /// The newest revision touching the file.
  Latest,
}

/// A boundary-year lookup failed.
///
/// Carries every error string encountered across the follow and no-follow
/// queries, joined in the order they occurred.
#[derive(Debug, thiserror::Error)]
#[error("history lookup failed for '{path}': {details}")]
pub struct HistoryError {
  pub path: PathBuf,
  pub details: String,
}

/// Queries commit history for files under a fixed root working directory.
pub struct GitHistory {
  root: PathBuf,
}

impl GitHistory {
  pub fn new(root: &Path) -> Self {
    Self {
      root: root.to_path_buf(),
    }
  }

  /// Resolves the 4-digit year of the earliest or latest revision touching
  /// `file`.
  ///
  /// The history is queried with `--follow` first so renames are tracked;
  /// when that yields no year, the query is retried without rename
  /// following. `Ok(None)` means the file simply has no usable history (for
  /// example, it was never committed). An error is returned only when no
  /// year was recovered and at least one query failed.
  pub fn boundary_year(&self, file: &Path, boundary: Boundary) -> Result<Option<String>, HistoryError> {
    let relative = self.relative_to_root(file);
    let mut errors = Vec::new();

    for follow in [true, false] {
      match self.query_year(&relative, boundary, follow) {
        Ok(Some(year)) => {
          if !errors.is_empty() {
            debug!(
              "history lookup for {} recovered after error: {}",
              file.display(),
              errors.join(" - ")
            );
          }
          return Ok(Some(year));
        }
        Ok(None) => {}
        Err(message) => errors.push(message),
      }
    }

    if errors.is_empty() {
      Ok(None)
    } else {
      Err(HistoryError {
        path: file.to_path_buf(),
        details: errors.join(" - "),
      })
    }
  }

  /// Runs one `git log` invocation and selects the boundary timestamp's year
  /// from its output.
  fn query_year(&self, relative: &Path, boundary: Boundary, follow: bool) -> Result<Option<String>, String> {
    let mut command = Command::new("git");
    command.arg("log");
    if follow {
      command.arg("--follow");
    }
    command
      .arg("--format=%aI")
      .arg("--")
      .arg(relative)
      .current_dir(&self.root)
      .stdin(Stdio::null());

    let output = command.output().map_err(|e| format!("failed to run git log: {e}"))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
      return Err(stderr.to_string());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines().filter(|line| !line.trim().is_empty());
    let timestamp = match boundary {
      Boundary::Latest => lines.next(),
      Boundary::Earliest => lines.last(),
    };

    Ok(timestamp.and_then(year_from_timestamp))
  }

  /// Path of `file` relative to the root, as passed to `git log`.
  fn relative_to_root(&self, file: &Path) -> PathBuf {
    if let Ok(stripped) = file.strip_prefix(&self.root) {
      return stripped.to_path_buf();
    }

    pathdiff::diff_paths(file, &self.root).unwrap_or_else(|| file.to_path_buf())
  }
}

/// Extracts the 4-character year prefix of an ISO-8601 timestamp.
///
/// Empty or too-short input means "no year found", not an error.
fn year_from_timestamp(timestamp: &str) -> Option<String> {
  let trimmed = timestamp.trim();
  if trimmed.len() < 4 {
    return None;
  }

  trimmed.get(..4).map(str::to_string)
}
