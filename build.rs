use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

fn embed_build_info() {
  // Capture the current Git commit hash for version identification.
  // Falls back to "unknown" when Git is unavailable or this is not a
  // repository, so env!() in the CLI always resolves.
  println!("cargo:rustc-env=GIT_HASH={}", git_stdout(&["rev-parse", "--short", "HEAD"]));

  // Capture the commit date in YYYY-MM-DD format.
  println!("cargo:rustc-env=GIT_DATE={}", git_stdout(&["log", "-1", "--format=%cs"]));
}

fn git_stdout(args: &[&str]) -> String {
  let value = Command::new("git")
    .args(args)
    .output()
    .ok()
    .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
    .unwrap_or_default();

  if value.is_empty() { "unknown".to_string() } else { value }
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
