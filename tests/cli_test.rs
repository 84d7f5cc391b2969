// tests/cli_test.rs
mod common;

use common::TestRepo;
use std::path::Path;
use std::process::{Command, Output};

fn semvertool(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semvertool"))
        .args(args)
        .env_remove("SEMVERTOOL_LOG")
        .output()
        .expect("Failed to execute semvertool")
}

fn semvertool_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semvertool"))
        .current_dir(dir)
        .args(args)
        .env_remove("SEMVERTOOL_LOG")
        .output()
        .expect("Failed to execute semvertool")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_help() {
    let output = semvertool(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("semvertool"));
}

#[test]
fn test_bump_flags() {
    assert_eq!(stdout(&semvertool(&["bump", "1.2.3"])), "1.2.4");
    assert_eq!(stdout(&semvertool(&["bump", "1.2"])), "1.2.1");
    assert_eq!(stdout(&semvertool(&["bump", "--major", "v1.2.3"])), "v2.0.0");
    assert_eq!(stdout(&semvertool(&["bump", "--minor", "1.2.3"])), "1.3.0");
    assert_eq!(
        stdout(&semvertool(&["bump", "--prerelease", "1.2.3-alpha.0.9"])),
        "1.2.3-alpha.0.10"
    );
    assert_eq!(
        stdout(&semvertool(&["bump", "--prerelease", "-p", "snapshot", "1.2.3"])),
        "1.2.4-snapshot.1"
    );
}

#[test]
fn test_bump_metadata() {
    let output = semvertool(&["bump", "--metadata", "build.42", "1.2.3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2.4+build.42");
}

#[test]
fn test_bump_from_message() {
    let output = semvertool(&["bump", "-m", "feat: thing [BUMP Minor]", "1.2.3"]);
    assert_eq!(stdout(&output), "1.3.0");

    let output = semvertool(&["bump", "-m", "chore: nothing", "1.2.3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2.3");
    assert!(stderr(&output).contains("No valid bump type found"));
}

#[test]
fn test_bump_conflicting_flags_is_usage_error() {
    let output = semvertool(&["bump", "--major", "--minor", "1.2.3"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_bump_invalid_version() {
    let output = semvertool(&["bump", "not-a-version"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("not-a-version"));
}

#[test]
fn test_bump_no_trailing_digits() {
    let output = semvertool(&["bump", "--prerelease", "1.2.3-alpha.beta"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("alpha.beta"));
}

#[test]
fn test_sort() {
    let output = semvertool(&["sort", "1.0.0", "2.0.0", "0.1.0"]);
    assert_eq!(stdout(&output), "0.1.0 1.0.0 2.0.0");

    let output = semvertool(&["sort", "-d", "-s", ",", "1.0.0", "2.0.0", "0.1.0"]);
    assert_eq!(stdout(&output), "2.0.0,1.0.0,0.1.0");
}

#[test]
fn test_sort_skips_invalid_and_prereleases() {
    let output = semvertool(&[
        "sort",
        "--no-prerelease",
        "1.0.0",
        "bogus",
        "1.1.0-rc.1",
        "1.0.1+build",
        "0.9.0",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0.9.0 1.0.0 1.0.1+build");
    assert!(stderr(&output).contains("invalid semver version: bogus"));
}

#[test]
fn test_compare_exit_codes() {
    assert_eq!(semvertool(&["compare", "1.0.0", "2.0.0"]).status.code(), Some(0));
    assert_eq!(semvertool(&["compare", "2.0.0", "2.0.0"]).status.code(), Some(1));
    assert_eq!(semvertool(&["compare", "2.0.0", "1.0.0"]).status.code(), Some(2));
    assert_eq!(semvertool(&["compare", "2.0", "1.0.0"]).status.code(), Some(2));
    assert_eq!(semvertool(&["compare", "2.0.x", "1.0.0"]).status.code(), Some(3));
    assert_eq!(
        semvertool(&["script", "compare", "1.0.0-rc.1", "1.0.0"]).status.code(),
        Some(0)
    );
}

#[test]
fn test_script_released() {
    assert_eq!(semvertool(&["script", "released", "v1.0.0"]).status.code(), Some(0));
    assert_eq!(
        semvertool(&["script", "released", "1.0.0-alpha"]).status.code(),
        Some(1)
    );
    assert_eq!(semvertool(&["script", "released", "junk"]).status.code(), Some(1));
}

#[test]
fn test_bump_git_and_previous() {
    let (test_repo, commits) = TestRepo::with_release_history();
    let path = test_repo.dir.path().to_str().unwrap();

    let output = semvertool(&["bump", "git", "--minor", "-r", path]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "v1.3.0");

    let output = semvertool(&["bump", "git", "--hash", "-r", path]);
    let hash = commits[3].to_string();
    assert_eq!(stdout(&output), format!("v1.2.1+{}", &hash[..7]));

    let output = semvertool_in(test_repo.dir.path(), &["previous"]);
    assert_eq!(stdout(&output), "v1.2.0-alpha.1");

    let output = semvertool_in(test_repo.dir.path(), &["previous", "--released"]);
    assert_eq!(stdout(&output), "v1.1.0");
}

#[test]
fn test_no_tags_exit_code() {
    let mut test_repo = TestRepo::new();
    test_repo.commit("initial");
    let path = test_repo.dir.path().to_str().unwrap();

    let output = semvertool(&["bump", "git", "-r", path]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("No semver tags found"));

    let output = semvertool(&["previous", "-r", path]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_negated_flags_override_config() {
    let (test_repo, _) = TestRepo::with_release_history();
    let path = test_repo.dir.path().to_str().unwrap();
    let config_path = test_repo.dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "[git]\nhash = true\n\n[previous]\nreleased_only = true\n",
    )
    .unwrap();
    let config = config_path.to_str().unwrap();

    let output = semvertool(&["--config", config, "bump", "git", "-r", path]);
    assert!(stdout(&output).starts_with("v1.2.1+"));
    let output = semvertool(&["--config", config, "bump", "git", "--no-hash", "-r", path]);
    assert_eq!(stdout(&output), "v1.2.1");

    let output = semvertool(&["--config", config, "previous", "-r", path]);
    assert_eq!(stdout(&output), "v1.1.0");
    let output = semvertool(&["--config", config, "previous", "--no-released", "-r", path]);
    assert_eq!(stdout(&output), "v1.2.0-alpha.1");
}

#[test]
fn test_skipped_tags_are_reported() {
    let (test_repo, commits) = TestRepo::with_release_history();
    test_repo.tag("nightly", commits[3]);
    let path = test_repo.dir.path().to_str().unwrap();

    let output = semvertool(&["bump", "git", "-r", path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "v1.2.1");
    assert!(stderr(&output).contains("nightly"));

    let output = semvertool(&["previous", "-r", path]);
    assert_eq!(stdout(&output), "v1.2.0-alpha.1");
    assert!(stderr(&output).contains("nightly"));
}

#[test]
fn test_config_file_sets_prefix() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join("custom.toml");
    std::fs::write(&config_path, "[bump]\nprerelease_prefix = \"rc\"\n").unwrap();

    let output = semvertool(&[
        "--config",
        config_path.to_str().unwrap(),
        "bump",
        "--prerelease",
        "1.0.0",
    ]);
    assert_eq!(stdout(&output), "1.0.1-rc.1");
}
