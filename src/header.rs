//! # Header Rewriter Module
//!
//! Line-oriented replacement of copyright header comment blocks.
//!
//! A header block starts at a *trigger line*: a comment line whose lowercased
//! text contains "copyright" (and, when a holder marker is configured, also
//! contains that marker verbatim). Once triggered, the block is open-ended:
//! every subsequent comment line belongs to it until the first non-comment
//! line or end of input, and none of those lines survive. The canonical text
//! is spliced in exactly once per block.

/// Result of rewriting one file's content.
#[derive(Debug)]
pub struct RewriteOutcome {
  /// The rewritten content. Equal to the input when nothing matched.
  pub content: String,

  /// Whether the canonical text was spliced in at least once.
  pub replaced: bool,
}

/// Replaces copyright header blocks with a canonical text.
///
/// The rewriter is pure: it transforms content strings and leaves file I/O to
/// the caller.
pub struct HeaderRewriter {
  /// Comment marker that header lines start with (e.g. "#" or "//").
  comment_marker: String,

  /// Optional holder marker. When set, a comment line only triggers a header
  /// block if it contains this marker in addition to "copyright".
  holder: Option<String>,

  /// Canonical header lines, substituted verbatim for each detected block.
  canonical: Vec<String>,
}

impl HeaderRewriter {
  pub const fn new(comment_marker: String, holder: Option<String>, canonical: Vec<String>) -> Self {
    Self {
      comment_marker,
      holder,
      canonical,
    }
  }

  /// Whether a comment line opens a header block.
  fn is_trigger(&self, line: &str) -> bool {
    if !line.to_lowercase().contains("copyright") {
      return false;
    }

    match &self.holder {
      Some(holder) => line.contains(holder.as_str()),
      None => true,
    }
  }

  /// Rewrites `content`, replacing every detected header block.
  ///
  /// Line endings of surviving lines are preserved byte-for-byte. The
  /// canonical text is always emitted with `\n` endings and a trailing
  /// newline. A block that runs to end of input (no trailing non-comment
  /// line) is still replaced exactly once.
  pub fn rewrite(&self, content: &str) -> RewriteOutcome {
    let mut inside_header = false;
    let mut replaced = false;
    let mut output = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
      if line.starts_with(&self.comment_marker) {
        if self.is_trigger(line) {
          inside_header = true;
        }
      } else if inside_header {
        // First non-comment line after the block: splice the canonical text
        // before copying the line itself.
        self.flush_canonical(&mut output);
        replaced = true;
        inside_header = false;
      }

      if !inside_header {
        output.push_str(line);
      }
    }

    // Header ran to end of input without a trailing non-comment line.
    if inside_header {
      self.flush_canonical(&mut output);
      replaced = true;
    }

    let replaced = replaced && !output.is_empty();
    RewriteOutcome {
      content: output,
      replaced,
    }
  }

  fn flush_canonical(&self, output: &mut String) {
    output.push_str(&self.canonical.join("\n"));
    output.push('\n');
  }
}
