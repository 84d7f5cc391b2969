// tests/config_test.rs
use semvertool::config::{load_config, Config, LOCAL_CONFIG_FILE};
use semvertool::domain::SortOrder;
use semvertool::SemverToolError;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[bump]
prerelease_prefix = "beta"

[sort]
separator = ","
descending = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.bump.prerelease_prefix, "beta");
    assert_eq!(config.sort.separator, ",");
    assert_eq!(config.sort.order(), SortOrder::Descending);
    assert!(!config.git.hash);
}

#[test]
fn test_load_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[git]\nhash = \"yes\"\n").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(matches!(result, Err(SemverToolError::Config(_))));
}

#[test]
#[serial]
fn test_discovers_file_in_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[previous]\nreleased_only = true\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert!(config.previous.released_only);
    assert!(config.resolve_options().released_only);
}

#[test]
#[serial]
fn test_explicit_path_beats_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG_FILE), "[git]\nhash = true\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "[git]\nhash = false\n").unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(explicit.to_str());
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap(), Config::default());
}
