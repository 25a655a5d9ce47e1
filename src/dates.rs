//! # Date Resolver Module
//!
//! Rewrites the year range in a copyright year-notice line from version
//! control history.
//!
//! A year-notice line is identified by its prefix, built from the comment
//! marker and the holder marker (e.g. `# (C) Copyright IBM `). The existing
//! years are parsed from the line, the latest modification year is resolved
//! from history, and the line is reformatted only when the two disagree.

use std::sync::LazyLock;

use regex::Regex;

use crate::git::HistoryError;

/// Year tokens: anything beginning with "20" and four digits long.
/// Comma-separated multi-year lists parse the same with or without spaces.
static YEAR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b20\d{2}").expect("year token regex must compile"));

/// Resolves boundary years for the file currently being processed.
///
/// Implemented over [`crate::git::GitHistory`] in production; tests inject
/// fixed or failing resolvers.
pub trait YearResolver {
  /// Year of the newest revision touching the file, if any.
  fn latest_year(&self) -> Result<Option<String>, HistoryError>;

  /// Year of the oldest revision touching the file, if any.
  fn earliest_year(&self) -> Result<Option<String>, HistoryError>;
}

/// Result of updating one file's year notices.
#[derive(Debug)]
pub struct NoticeOutcome {
  /// Content with any rewritten notice lines. Equal to the input when no
  /// line changed.
  pub content: String,

  /// Whether the file contained at least one year-notice line. Tracked
  /// separately from `changed` so callers can report "N of M files".
  pub had_notice: bool,

  /// Whether at least one notice line was actually rewritten.
  pub changed: bool,
}

/// Rewrites year-notice lines against resolved history years.
pub struct NoticeUpdater {
  /// Full notice-line prefix, e.g. `# (C) Copyright IBM `.
  prefix: String,
}

impl NoticeUpdater {
  pub fn new(comment_marker: &str, holder: &str) -> Self {
    Self {
      prefix: format!("{comment_marker} (C) Copyright {holder} "),
    }
  }

  /// The notice-line prefix this updater matches on.
  pub fn prefix(&self) -> &str {
    &self.prefix
  }

  /// Scans `content` for year-notice lines and rewrites any whose recorded
  /// end year disagrees with the resolved latest year.
  ///
  /// History is only consulted when a notice line is present, and the latest
  /// year is resolved at most once per file. The earliest year is resolved
  /// only for a notice that carries no year tokens at all. A resolver
  /// failure propagates and leaves the caller's file untouched; a resolver
  /// that finds no year leaves the line unchanged.
  pub fn update(&self, content: &str, resolver: &dyn YearResolver) -> Result<NoticeOutcome, HistoryError> {
    let mut output = String::with_capacity(content.len());
    let mut had_notice = false;
    let mut changed = false;
    let mut latest_memo: Option<Option<String>> = None;

    for line in content.split_inclusive('\n') {
      if !line.starts_with(&self.prefix) {
        output.push_str(line);
        continue;
      }

      had_notice = true;

      let resolved = match &latest_memo {
        Some(memo) => memo.clone(),
        None => {
          let year = resolver.latest_year()?;
          latest_memo = Some(year.clone());
          year
        }
      };

      // No last-modification year recoverable: leave the notice as-is.
      let Some(resolved) = resolved else {
        output.push_str(line);
        continue;
      };

      let (start, end) = parse_year_tokens(line);

      // A single-year notice records that year as both start and end; a
      // notice without years records nothing and always disagrees.
      let recorded_end = end.or_else(|| start.clone());
      if recorded_end.as_deref() == Some(resolved.as_str()) {
        output.push_str(line);
        continue;
      }

      // A notice without any years borrows its start from history too.
      let start = match start {
        Some(start) => Some(start),
        None => resolver.earliest_year()?,
      };

      let mut replacement = self.format_notice(start.as_deref(), &resolved);
      replacement.push_str(line_terminator(line));
      if replacement != line {
        changed = true;
      }
      output.push_str(&replacement);
    }

    Ok(NoticeOutcome {
      content: output,
      had_notice,
      changed,
    })
  }

  /// Formats a notice line body: prefix, optional `<start>, `, resolved
  /// year, period.
  fn format_notice(&self, start: Option<&str>, resolved: &str) -> String {
    let mut line = self.prefix.clone();
    if let Some(start) = start {
      if start != resolved {
        line.push_str(start);
        line.push_str(", ");
      }
    }
    line.push_str(resolved);
    line.push('.');
    line
  }
}

/// First two year tokens of a notice line, as (start, end).
pub fn parse_year_tokens(line: &str) -> (Option<String>, Option<String>) {
  let mut tokens = YEAR_TOKEN.find_iter(line);
  let start = tokens.next().map(|m| m.as_str().to_string());
  let end = tokens.next().map(|m| m.as_str().to_string());
  (start, end)
}

/// The line ending carried by a `split_inclusive` line, possibly empty.
fn line_terminator(line: &str) -> &str {
  if line.ends_with("\r\n") {
    "\r\n"
  } else if line.ends_with('\n') {
    "\n"
  } else {
    ""
  }
}
