//! Git-backed tests for year-notice refreshing.

mod common;

use std::fs;

use anyhow::Result;
use common::{git_add_and_commit_dated, init_git_repo, is_git_available};
use relicense::dates::NoticeUpdater;
use relicense::diff::DiffManager;
use relicense::git::{Boundary, GitHistory};
use relicense::processor::{Processor, RefreshDates};
use tempfile::tempdir;

fn refresh_op(holder: &str, dry_run: bool, root: &std::path::Path) -> RefreshDates {
  RefreshDates::new(
    NoticeUpdater::new("#", holder),
    GitHistory::new(root),
    dry_run,
    DiffManager::new(false, None),
  )
}

#[test]
fn boundary_years_come_from_the_commit_dates() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  let file = temp_dir.path().join("module.py");
  fs::write(&file, "print(1)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "first", "2019-03-05T12:00:00+00:00")?;
  fs::write(&file, "print(2)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "second", "2021-07-10T12:00:00+00:00")?;

  let history = GitHistory::new(temp_dir.path());
  assert_eq!(
    history.boundary_year(&file, Boundary::Earliest)?,
    Some("2019".to_string())
  );
  assert_eq!(history.boundary_year(&file, Boundary::Latest)?, Some("2021".to_string()));
  Ok(())
}

#[test]
fn uncommitted_files_have_no_history_years() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  // Establish HEAD so the log query itself succeeds
  fs::write(temp_dir.path().join("initial.txt"), "initial\n")?;
  git_add_and_commit_dated(temp_dir.path(), "initial.txt", "initial", "2018-01-01T12:00:00+00:00")?;

  let file = temp_dir.path().join("untracked.py");
  fs::write(&file, "print(1)\n")?;

  let history = GitHistory::new(temp_dir.path());
  assert_eq!(history.boundary_year(&file, Boundary::Latest)?, None);
  Ok(())
}

#[test]
fn stale_end_year_is_refreshed_from_history() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  let file = temp_dir.path().join("module.py");
  fs::write(&file, "# (C) Copyright IBM 2019.\nprint(1)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "first", "2019-03-05T12:00:00+00:00")?;
  fs::write(&file, "# (C) Copyright IBM 2019.\nprint(2)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "second", "2020-06-01T12:00:00+00:00")?;

  let op = refresh_op("IBM", false, temp_dir.path());
  let summary = Processor::new(temp_dir.path(), &op).run();

  assert_eq!(summary.files_changed, 1);
  assert_eq!(summary.files_with_notice, 1);
  assert_eq!(
    fs::read_to_string(&file)?,
    "# (C) Copyright IBM 2019, 2020.\nprint(2)\n"
  );
  Ok(())
}

#[test]
fn current_notice_is_left_alone_and_still_counted() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  let file = temp_dir.path().join("module.py");
  let content = "# (C) Copyright IBM 2020.\nprint(1)\n";
  fs::write(&file, content)?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "only", "2020-06-01T12:00:00+00:00")?;

  let op = refresh_op("IBM", false, temp_dir.path());
  let summary = Processor::new(temp_dir.path(), &op).run();

  assert_eq!(summary.files_changed, 0);
  assert_eq!(summary.files_with_notice, 1);
  assert_eq!(fs::read_to_string(&file)?, content);
  Ok(())
}

#[test]
fn notice_without_years_gets_both_boundaries_from_history() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  let file = temp_dir.path().join("module.py");
  fs::write(&file, "# (C) Copyright IBM \nprint(1)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "first", "2019-03-05T12:00:00+00:00")?;
  fs::write(&file, "# (C) Copyright IBM \nprint(2)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "second", "2020-06-01T12:00:00+00:00")?;

  let op = refresh_op("IBM", false, temp_dir.path());
  Processor::new(temp_dir.path(), &op).run();

  assert_eq!(
    fs::read_to_string(&file)?,
    "# (C) Copyright IBM 2019, 2020.\nprint(2)\n"
  );
  Ok(())
}

#[test]
fn renamed_files_keep_their_original_start_year() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  let old = temp_dir.path().join("old_name.py");
  fs::write(&old, "print(1)\n")?;
  git_add_and_commit_dated(temp_dir.path(), "old_name.py", "first", "2018-02-01T12:00:00+00:00")?;

  common::run_git(temp_dir.path(), &["mv", "old_name.py", "new_name.py"])?;
  common::run_git_env(
    temp_dir.path(),
    &["commit", "-m", "rename"],
    &[
      ("GIT_AUTHOR_DATE", "2021-02-01T12:00:00+00:00"),
      ("GIT_COMMITTER_DATE", "2021-02-01T12:00:00+00:00"),
    ],
  )?;

  let history = GitHistory::new(temp_dir.path());
  let renamed = temp_dir.path().join("new_name.py");
  assert_eq!(
    history.boundary_year(&renamed, Boundary::Earliest)?,
    Some("2018".to_string())
  );
  assert_eq!(history.boundary_year(&renamed, Boundary::Latest)?, Some("2021".to_string()));
  Ok(())
}

#[test]
fn outside_a_repository_files_are_left_unmodified() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  let file = temp_dir.path().join("module.py");
  let content = "# (C) Copyright IBM 2019.\nprint(1)\n";
  fs::write(&file, content)?;

  // The lookup fails per file; the walk still completes with a summary.
  let op = refresh_op("IBM", false, temp_dir.path());
  let summary = Processor::new(temp_dir.path(), &op).run();

  assert_eq!(summary.files_changed, 0);
  assert_eq!(fs::read_to_string(&file)?, content);
  Ok(())
}

#[test]
fn dry_run_reports_but_does_not_modify() -> Result<()> {
  if !is_git_available() {
    println!("Skipping git test because git command is not available");
    return Ok(());
  }

  let temp_dir = tempdir()?;
  init_git_repo(temp_dir.path())?;

  let file = temp_dir.path().join("module.py");
  let content = "# (C) Copyright IBM 2019.\nprint(1)\n";
  fs::write(&file, content)?;
  git_add_and_commit_dated(temp_dir.path(), "module.py", "only", "2020-06-01T12:00:00+00:00")?;

  let op = refresh_op("IBM", true, temp_dir.path());
  let summary = Processor::new(temp_dir.path(), &op).run();

  assert_eq!(summary.files_changed, 1);
  assert_eq!(fs::read_to_string(&file)?, content);
  Ok(())
}
