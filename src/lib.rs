//! # relicense
//!
//! A tool that rewrites outdated copyright headers in a source tree and refreshes copyright year
//! ranges from git history.
//!
//! `relicense` modifies source files in place. It walks a root directory recursively, replaces
//! stale license header blocks with a canonical version, and keeps the year notice in each header
//! in sync with the file's commit history.
//!
//! ## Features
//!
//! * Replace copyright header comment blocks with canonical license text
//! * Optional strict detection requiring a configured holder marker
//! * Refresh year ranges from `git log`, following renames where possible
//! * Dry-run mode with diff previews of what would change
//! * Per-file failures never abort the walk; the run always ends with a summary
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use relicense::diff::DiffManager;
//! use relicense::header::HeaderRewriter;
//! use relicense::processor::{Processor, RewriteHeaders};
//!
//! let canonical = vec![
//!     "# Copyright Example Authors.".to_string(),
//!     "# Licensed under the Apache License, Version 2.0.".to_string(),
//! ];
//!
//! let rewriter = HeaderRewriter::new("#".to_string(), None, canonical);
//! let op = RewriteHeaders::new(rewriter, false, DiffManager::new(false, None));
//!
//! let summary = Processor::new(Path::new("src"), &op).run();
//! println!("{} files changed.", summary.files_changed);
//! ```
//!
//! ## Modules
//!
//! * [`header`] - Header block detection and canonical-text substitution
//! * [`dates`] - Year-notice parsing, formatting, and rewrite policy
//! * [`git`] - The `git log` collaborator resolving boundary years
//! * [`processor`] - Directory walker and per-file operations
//!
//! [`header`]: crate::header
//! [`dates`]: crate::dates
//! [`git`]: crate::git
//! [`processor`]: crate::processor

// Re-export modules for public API
pub mod config;
pub mod dates;
pub mod diff;
pub mod file_io;
pub mod git;
pub mod header;
pub mod logging;
pub mod processor;
