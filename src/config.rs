//! # Configuration Module
//!
//! Optional TOML configuration for relicense: the holder marker, the comment
//! marker the tree uses, and the canonical header text.
//!
//! Configuration can live in a `.relicense.toml` file at the processed root
//! or be pointed at via the `RELICENSE_CONFIG` environment variable. CLI
//! flags take precedence over anything configured here.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// The default config file name, looked up in the processed root.
pub const DEFAULT_CONFIG_FILENAME: &str = ".relicense.toml";

/// Environment variable for specifying a config file path.
pub const CONFIG_ENV_VAR: &str = "RELICENSE_CONFIG";

fn default_comment_marker() -> String {
  "#".to_string()
}

/// Main configuration struct for relicense.
#[derive(Debug, Deserialize)]
pub struct Config {
  /// Holder marker (e.g. "IBM"). Enables the strict header trigger and
  /// names the holder in rewritten year notices.
  #[serde(default)]
  pub holder: Option<String>,

  /// Comment marker header lines start with. Defaults to "#".
  #[serde(default = "default_comment_marker", rename = "comment-marker")]
  pub comment_marker: String,

  /// Canonical header text, inline. Takes precedence over `header-file`.
  #[serde(default)]
  pub header: Option<String>,

  /// Path to a file containing the canonical header text.
  #[serde(default, rename = "header-file")]
  pub header_file: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      holder: None,
      comment_marker: default_comment_marker(),
      header: None,
      header_file: None,
    }
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  Parse { path: PathBuf, source: toml::de::Error },
}

/// Loads configuration, if any.
///
/// Resolution order: an explicitly passed path, then `RELICENSE_CONFIG`,
/// then `<root>/.relicense.toml`. With `no_config` set, nothing is loaded.
/// An explicit or env-var path that does not exist is an error; the dotfile
/// is simply optional.
pub fn load_config(explicit: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>, ConfigError> {
  if no_config {
    debug!("Config loading disabled via --no-config");
    return Ok(None);
  }

  if let Some(path) = explicit {
    return read_config(path).map(Some);
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    if !env_path.is_empty() {
      return read_config(Path::new(&env_path)).map(Some);
    }
  }

  let default_path = root.join(DEFAULT_CONFIG_FILENAME);
  if default_path.is_file() {
    return read_config(&default_path).map(Some);
  }

  Ok(None)
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
  debug!("Loading config from {}", path.display());

  let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  toml::from_str(&raw).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_full_config() {
    let config: Config = toml::from_str(
      r#"
holder = "IBM"
comment-marker = "//"
header = """
// Copyright Example Authors.
// All rights reserved.
"""
"#,
    )
    .expect("config parses");

    assert_eq!(config.holder.as_deref(), Some("IBM"));
    assert_eq!(config.comment_marker, "//");
    assert!(config.header.expect("header set").contains("All rights reserved."));
  }

  #[test]
  fn defaults_apply_when_fields_are_absent() {
    let config: Config = toml::from_str("").expect("empty config parses");
    assert_eq!(config.comment_marker, "#");
    assert!(config.holder.is_none());
    assert!(config.header.is_none());
    assert!(config.header_file.is_none());
  }

  #[test]
  fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "holder = [not toml").expect("write");

    let err = read_config(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
  }

  #[test]
  fn missing_dotfile_is_not_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loaded = load_config(None, dir.path(), false).expect("load succeeds");
    assert!(loaded.is_none());
  }
}
