//! # File I/O Module
//!
//! Reading and writing the files the processor touches. Reads distinguish
//! "not valid text" (skipped by the caller) from real I/O errors.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads a file as UTF-8 text.
  ///
  /// Returns `Ok(None)` when the bytes do not decode as UTF-8: the file is
  /// not a text file under the tree's assumed encoding and is not an error.
  /// I/O failures are real errors.
  pub fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    match String::from_utf8(bytes) {
      Ok(content) => Ok(Some(content)),
      Err(_) => Ok(None),
    }
  }

  /// Overwrites a file in place.
  ///
  /// Not atomic: a crash mid-write can leave the file truncated.
  pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
